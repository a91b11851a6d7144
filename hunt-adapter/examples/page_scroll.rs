// Example: a controller driven by simulated page scrolling and a window resize.
use hunt::{HuntOptions, Target};
use hunt_adapter::{Controller, LayoutElement, ScrollPosition, Window};

fn main() -> Result<(), hunt::HuntError> {
    let scroll = ScrollPosition::new(0.0);
    let sections: Vec<LayoutElement> = (0..8)
        .map(|i| LayoutElement::new(i, 300.0 + i as f64 * 500.0, 400.0, &scroll))
        .collect();

    let options = HuntOptions::new()
        .with_persist(true)
        .with_enter(|s: &LayoutElement| println!("  section {} entered", s.id()))
        .with_leave(|s: &LayoutElement| println!("  section {} left", s.id()));

    let mut c = Controller::new(Window::new(700.0), scroll, Target::from(sections), options)?;

    let mut now_ms = 0u64;
    for step in 0..60 {
        now_ms += 16;
        c.on_scroll(step as f64 * 60.0, now_ms);
        c.tick(now_ms);
    }
    if let Some(at) = c.next_wakeup() {
        c.tick(at);
        now_ms = at;
    }

    println!("resize to 1400px at t={now_ms}ms");
    c.on_resize(1400.0, now_ms + 500);

    let visible: Vec<u64> = c
        .observer()
        .targets()
        .iter()
        .filter(|t| t.is_visible())
        .map(|t| t.element().id())
        .collect();
    println!("visible sections: {visible:?}");
    Ok(())
}
