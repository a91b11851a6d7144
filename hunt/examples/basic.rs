// Example: register one element, move it, and sweep manually.
use std::cell::Cell;
use std::rc::Rc;

use hunt::{
    BoundingBox, Element, EventSource, HostEvent, HuntObserver, HuntOptions, Target,
    ViewportMetrics,
};

#[derive(Debug)]
struct Card {
    name: &'static str,
    top: Cell<f64>,
    height: f64,
}

impl Element for Card {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.top.get(), self.height)
    }
}

#[derive(Debug)]
struct Window {
    inner_height: f64,
}

impl EventSource for Window {
    fn subscribe(&mut self, event: HostEvent) {
        println!("addEventListener({})", event.name());
    }

    fn unsubscribe(&mut self, event: HostEvent) {
        println!("removeEventListener({})", event.name());
    }
}

impl ViewportMetrics for Window {
    fn viewport_height(&self) -> f64 {
        self.inner_height
    }
}

fn main() -> Result<(), hunt::HuntError> {
    let card = Rc::new(Card {
        name: "hero",
        top: Cell::new(1040.0),
        height: 350.0,
    });

    let options = HuntOptions::new()
        .with_enter(|c: &Rc<Card>| println!("enter {}", c.name))
        .with_leave(|c: &Rc<Card>| println!("leave {}", c.name));

    let mut observer = HuntObserver::new(
        Window {
            inner_height: 550.0,
        },
        Target::One(Rc::clone(&card)),
        options,
    )?;

    card.top.set(97.0);
    println!("{:?}", observer.trigger());

    // Not persistent: the first leave retires the card and disconnects the observer.
    card.top.set(1040.0);
    println!("{:?}", observer.trigger());
    println!("connected={}", observer.is_connected());
    Ok(())
}
