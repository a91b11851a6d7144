use hunt::{Element, HostEvent, HuntObserver, HuntOptions, HuntResult, SweepSummary, Target};

use crate::{ScrollPosition, Window};

/// A framework-neutral controller that wraps a `hunt::HuntObserver` over a headless [`Window`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_resize` when UI events occur
/// - `tick(now_ms)` each frame/timer tick, so throttled trailing sweeps land
///
/// Events are only forwarded while the observer is listening for them, the same way a real
/// dispatcher stops calling a removed listener.
#[derive(Debug)]
pub struct Controller<E> {
    observer: HuntObserver<E, Window>,
    scroll: ScrollPosition,
}

impl<E: Element> Controller<E> {
    pub fn new(
        window: Window,
        scroll: ScrollPosition,
        target: impl Into<Target<E>>,
        options: HuntOptions<E>,
    ) -> HuntResult<Self> {
        Ok(Self {
            observer: HuntObserver::new(window, target, options)?,
            scroll,
        })
    }

    pub fn from_observer(observer: HuntObserver<E, Window>, scroll: ScrollPosition) -> Self {
        Self { observer, scroll }
    }

    pub fn observer(&self) -> &HuntObserver<E, Window> {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut HuntObserver<E, Window> {
        &mut self.observer
    }

    pub fn into_observer(self) -> HuntObserver<E, Window> {
        self.observer
    }

    pub fn scroll_position(&self) -> &ScrollPosition {
        &self.scroll
    }

    pub fn is_listening(&self, event: HostEvent) -> bool {
        self.observer.host().listeners.is_listening(event)
    }

    /// Call this when the UI reports a new scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64, now_ms: u64) -> Option<SweepSummary> {
        self.scroll.set(scroll_y);
        self.dispatch(HostEvent::Scroll, now_ms)
    }

    /// Call this when the UI reports a new viewport height.
    pub fn on_resize(&mut self, inner_height: f64, now_ms: u64) -> Option<SweepSummary> {
        self.observer.host_mut().inner_height = inner_height;
        self.dispatch(HostEvent::Resize, now_ms)
    }

    /// Advances the throttle clock. Returns the trailing sweep when one was due.
    pub fn tick(&mut self, now_ms: u64) -> Option<SweepSummary> {
        match self.observer.next_deadline() {
            Some(deadline) if deadline <= now_ms => self.observer.tick(now_ms),
            _ => None,
        }
    }

    /// When the host should call [`Self::tick`] next.
    pub fn next_wakeup(&self) -> Option<u64> {
        self.observer.next_deadline()
    }

    /// Registers more elements (see `HuntObserver::observe`).
    pub fn observe(
        &mut self,
        target: impl Into<Target<E>>,
        options: HuntOptions<E>,
    ) -> HuntResult<SweepSummary> {
        self.observer.observe(target, options)
    }

    fn dispatch(&mut self, event: HostEvent, now_ms: u64) -> Option<SweepSummary> {
        if !self.is_listening(event) {
            return None;
        }
        self.observer.handle_event(event, now_ms)
    }
}
