// Example: host-driven scroll signals at 60fps with a 100ms throttle.
use std::cell::Cell;
use std::rc::Rc;

use hunt::{
    BoundingBox, Element, EventSource, HostEvent, HuntObserver, HuntOptions, ViewportMetrics,
};

#[derive(Debug)]
struct Row {
    index: usize,
    page_top: f64,
    scroll_y: Rc<Cell<f64>>,
}

impl Element for Row {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.page_top - self.scroll_y.get(), 40.0)
    }
}

#[derive(Debug, Default)]
struct Window {
    listening: bool,
}

impl EventSource for Window {
    fn subscribe(&mut self, _event: HostEvent) {
        self.listening = true;
    }

    fn unsubscribe(&mut self, _event: HostEvent) {
        self.listening = false;
    }
}

impl ViewportMetrics for Window {
    fn viewport_height(&self) -> f64 {
        400.0
    }
}

fn main() -> Result<(), hunt::HuntError> {
    let scroll_y = Rc::new(Cell::new(0.0));
    let rows: Vec<Rc<Row>> = (0..50)
        .map(|index| {
            Rc::new(Row {
                index,
                page_top: index as f64 * 60.0,
                scroll_y: Rc::clone(&scroll_y),
            })
        })
        .collect();

    let options = HuntOptions::new()
        .with_persist(true)
        .with_offset(20.0)
        .with_enter(|r: &Rc<Row>| println!("  enter row {}", r.index))
        .with_leave(|r: &Rc<Row>| println!("  leave row {}", r.index));

    let mut observer = HuntObserver::new(Window::default(), rows, options)?;

    let mut now_ms = 0u64;
    while scroll_y.get() < 1200.0 {
        now_ms += 16;
        scroll_y.set(scroll_y.get() + 25.0);
        if observer.host().listening {
            if let Some(summary) = observer.handle_event(HostEvent::Scroll, now_ms) {
                println!("t={now_ms}ms y={} {summary:?}", scroll_y.get());
            }
        }
        if observer.next_deadline().is_some_and(|d| d <= now_ms) {
            if let Some(summary) = observer.tick(now_ms) {
                println!("t={now_ms}ms (trailing) y={} {summary:?}", scroll_y.get());
            }
        }
    }

    // Let the trailing sweep of the burst land.
    if let Some(deadline) = observer.next_deadline() {
        observer.tick(deadline);
    }
    let visible = observer.targets().iter().filter(|t| t.is_visible()).count();
    println!("done: {visible} rows visible");
    Ok(())
}
