use alloc::vec::Vec;

use crate::target::TrackedTarget;
use crate::throttle::Throttle;
use crate::{
    ConfigParseWarning, Element, EventSource, HostEvent, HuntOptions, HuntResult, SweepSummary,
    Target, ViewportMetrics,
};

/// A headless viewport visibility observer.
///
/// The observer owns its tracked targets and the host capabilities it was built with:
/// - It subscribes to scroll/resize through [`EventSource`] when connected.
/// - The host forwards those signals to [`Self::handle_event`] and calls [`Self::tick`] once
///   [`Self::next_deadline`] is reached, so throttled trailing sweeps are not lost.
/// - Every sweep queries element geometry live; only the viewport height is cached.
///
/// Once no target is left, the observer disconnects itself.
///
/// Callbacks receive the element only. Since every sweep runs under `&mut self`, a callback
/// cannot re-enter the observer that invoked it.
pub struct HuntObserver<E, H> {
    host: H,
    targets: Vec<TrackedTarget<E>>,
    viewport_height: f64,
    scroll: Throttle,
    resize: Throttle,
    connected: bool,
    warnings: Vec<ConfigParseWarning>,
}

impl<E: Element, H: EventSource + ViewportMetrics> HuntObserver<E, H> {
    /// Registers `target` and connects to the host.
    ///
    /// Elements already on the viewport receive `enter` before this returns.
    pub fn new(
        host: H,
        target: impl Into<Target<E>>,
        options: HuntOptions<E>,
    ) -> HuntResult<Self> {
        let target = target.into();
        target.validate()?;
        options.validate()?;

        let viewport_height = host.viewport_height();
        let interval_ms = options.throttle_interval_ms;
        hdebug!(
            targets = target.len(),
            viewport_height,
            interval_ms,
            "HuntObserver::new"
        );

        let mut observer = Self {
            host,
            targets: Vec::with_capacity(target.len()),
            viewport_height,
            scroll: Throttle::new(interval_ms),
            resize: Throttle::new(interval_ms),
            connected: false,
            warnings: Vec::new(),
        };
        observer.push_targets(target, &options);
        observer.connect();
        observer.hunt();
        Ok(observer)
    }

    /// Registers more elements on an existing observer.
    ///
    /// Reconnects a disconnected observer and runs an immediate sweep. The throttle interval
    /// of `options` is ignored; the first registration fixed it.
    pub fn observe(
        &mut self,
        target: impl Into<Target<E>>,
        options: HuntOptions<E>,
    ) -> HuntResult<SweepSummary> {
        let target = target.into();
        target.validate()?;
        options.validate()?;

        htrace!(targets = target.len(), "HuntObserver::observe");
        self.push_targets(target, &options);
        self.connect();
        Ok(self.hunt())
    }

    fn push_targets(&mut self, target: Target<E>, options: &HuntOptions<E>) {
        let warnings = &mut self.warnings;
        self.targets.extend(
            target
                .into_vec()
                .into_iter()
                .enumerate()
                .map(|(i, element)| TrackedTarget::new(element, options, i, warnings)),
        );
    }

    fn connect(&mut self) {
        if self.connected {
            return;
        }
        self.host.subscribe(HostEvent::Scroll);
        self.host.subscribe(HostEvent::Resize);
        self.connected = true;
    }

    /// Forwards a host signal through the throttle.
    ///
    /// Scroll signals sweep; resize signals re-sample the viewport height first. Ignored while
    /// disconnected.
    pub fn handle_event(&mut self, event: HostEvent, now_ms: u64) -> Option<SweepSummary> {
        if !self.connected {
            return None;
        }
        htrace!(event = event.name(), now_ms, "handle_event");
        match event {
            HostEvent::Scroll => self.scroll.call(now_ms, ()).map(|()| self.hunt()),
            HostEvent::Resize => self.resize.call(now_ms, ()).map(|()| self.update_metrics()),
        }
    }

    /// Runs throttled trailing calls whose deadline has passed.
    pub fn tick(&mut self, now_ms: u64) -> Option<SweepSummary> {
        if !self.connected {
            return None;
        }
        let mut summary: Option<SweepSummary> = None;
        if self.resize.tick(now_ms).is_some() {
            summary = Some(self.update_metrics());
        }
        // The resize sweep may have disconnected the observer.
        if self.connected && self.scroll.tick(now_ms).is_some() {
            let swept = self.hunt();
            summary = Some(summary.map_or(swept, |prev| prev.merge(swept)));
        }
        summary
    }

    /// Earliest pending throttle deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.scroll.next_deadline(), self.resize.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Runs an unthrottled sweep now, e.g. after mutating the document programmatically.
    pub fn trigger(&mut self) -> SweepSummary {
        self.hunt()
    }

    /// Re-samples the viewport height and sweeps.
    pub fn update_metrics(&mut self) -> SweepSummary {
        self.viewport_height = self.host.viewport_height();
        htrace!(viewport_height = self.viewport_height, "update_metrics");
        self.hunt()
    }

    /// A panicking callback unwinds out of the sweep before compaction. Targets retired earlier
    /// in that pass stay tombstoned and are skipped, then dropped by the next sweep.
    fn hunt(&mut self) -> SweepSummary {
        let viewport_height = self.viewport_height;
        let mut summary = SweepSummary::default();

        for target in self.targets.iter_mut().rev() {
            if let Some(transition) = target.evaluate(viewport_height) {
                summary.record(transition);
            }
        }

        let before = self.targets.len();
        self.targets.retain(|t| !t.is_retired());
        summary.retired = before - self.targets.len();

        if !summary.is_quiet() || summary.retired > 0 {
            htrace!(
                entered = summary.entered,
                left = summary.left,
                retired = summary.retired,
                remaining = self.targets.len(),
                "sweep"
            );
        }

        if self.targets.is_empty() {
            self.disconnect();
        }
        summary
    }
}

impl<E, H: EventSource> HuntObserver<E, H> {
    /// Removes both subscriptions and drops pending throttled calls.
    ///
    /// Idempotent. Tracked targets are kept, so [`HuntObserver::trigger`] keeps working.
    pub fn disconnect(&mut self) {
        if !self.connected {
            return;
        }
        self.host.unsubscribe(HostEvent::Scroll);
        self.host.unsubscribe(HostEvent::Resize);
        self.scroll.cancel();
        self.resize.cancel();
        self.connected = false;
        hdebug!(remaining = self.targets.len(), "HuntObserver::disconnect");
    }
}

impl<E, H> HuntObserver<E, H> {
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn targets(&self) -> &[TrackedTarget<E>] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Viewport height as of the last resize signal.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn throttle_interval_ms(&self) -> u64 {
        self.scroll.interval_ms()
    }

    /// Attribute overrides that failed to parse during registration.
    pub fn warnings(&self) -> &[ConfigParseWarning] {
        &self.warnings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to update simulated metrics in tests.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<E: core::fmt::Debug, H: core::fmt::Debug> core::fmt::Debug for HuntObserver<E, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HuntObserver")
            .field("host", &self.host)
            .field("targets", &self.targets)
            .field("viewport_height", &self.viewport_height)
            .field("connected", &self.connected)
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}
