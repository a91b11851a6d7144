use hunt::{EventSource, HostEvent, ViewportMetrics};

/// Which host events currently have a listener attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Listeners {
    scroll: bool,
    resize: bool,
}

impl Listeners {
    pub fn is_listening(&self, event: HostEvent) -> bool {
        match event {
            HostEvent::Scroll => self.scroll,
            HostEvent::Resize => self.resize,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.scroll && !self.resize
    }

    fn slot(&mut self, event: HostEvent) -> &mut bool {
        match event {
            HostEvent::Scroll => &mut self.scroll,
            HostEvent::Resize => &mut self.resize,
        }
    }
}

impl EventSource for Listeners {
    fn subscribe(&mut self, event: HostEvent) {
        *self.slot(event) = true;
    }

    fn unsubscribe(&mut self, event: HostEvent) {
        *self.slot(event) = false;
    }
}

/// A headless window: inner height plus the listeners attached to it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Window {
    pub inner_height: f64,
    pub listeners: Listeners,
}

impl Window {
    pub fn new(inner_height: f64) -> Self {
        Self {
            inner_height,
            listeners: Listeners::default(),
        }
    }
}

impl EventSource for Window {
    fn subscribe(&mut self, event: HostEvent) {
        self.listeners.subscribe(event);
    }

    fn unsubscribe(&mut self, event: HostEvent) {
        self.listeners.unsubscribe(event);
    }
}

impl ViewportMetrics for Window {
    fn viewport_height(&self) -> f64 {
        self.inner_height
    }
}
