use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use hunt::{HostEvent, HuntOptions, Target};

fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

fn counting(enters: &Arc<AtomicUsize>, leaves: &Arc<AtomicUsize>) -> HuntOptions<LayoutElement> {
    let e = Arc::clone(enters);
    let l = Arc::clone(leaves);
    HuntOptions::new()
        .with_enter(move |_: &LayoutElement| {
            e.fetch_add(1, Ordering::Relaxed);
        })
        .with_leave(move |_: &LayoutElement| {
            l.fetch_add(1, Ordering::Relaxed);
        })
}

#[test]
fn scrolling_a_page_fires_enter_and_leave() {
    let scroll = ScrollPosition::new(0.0);
    let (enters, leaves) = (counter(), counter());
    let el = LayoutElement::new(1, 1040.0, 350.0, &scroll);

    let mut c = Controller::new(
        Window::new(550.0),
        scroll.clone(),
        Target::One(el),
        counting(&enters, &leaves).with_persist(true),
    )
    .unwrap();
    assert_eq!(enters.load(Ordering::Relaxed), 0);
    assert!(c.is_listening(HostEvent::Scroll));

    // Page y=943 puts the element at viewport top 97.
    assert_eq!(c.on_scroll(943.0, 0).unwrap().entered, 1);
    assert_eq!(enters.load(Ordering::Relaxed), 1);

    // Scrolling back within the throttle window is deferred until tick.
    assert_eq!(c.on_scroll(0.0, 40), None);
    assert_eq!(c.next_wakeup(), Some(100));
    assert_eq!(c.tick(60), None);
    assert_eq!(c.tick(100).unwrap().left, 1);
    assert_eq!(leaves.load(Ordering::Relaxed), 1);
    assert_eq!(c.observer().len(), 1);
}

#[test]
fn resize_reveals_element_below_the_fold() {
    let scroll = ScrollPosition::default();
    let (enters, leaves) = (counter(), counter());
    let el = LayoutElement::new(1, 700.0, 50.0, &scroll);

    let mut c = Controller::new(
        Window::new(550.0),
        scroll,
        Target::One(el),
        counting(&enters, &leaves),
    )
    .unwrap();
    assert_eq!(enters.load(Ordering::Relaxed), 0);

    let s = c.on_resize(900.0, 0).unwrap();
    assert_eq!(s.entered, 1);
    assert_eq!(c.observer().viewport_height(), 900.0);
}

#[test]
fn events_stop_once_every_element_is_retired() {
    let scroll = ScrollPosition::new(0.0);
    let (enters, leaves) = (counter(), counter());
    let els: Vec<LayoutElement> = (0..3)
        .map(|i| LayoutElement::new(i, 1000.0 + 100.0 * i as f64, 50.0, &scroll))
        .collect();

    let enter_only = {
        let e = Arc::clone(&enters);
        HuntOptions::new().with_enter(move |_: &LayoutElement| {
            e.fetch_add(1, Ordering::Relaxed);
        })
    };
    let mut c = Controller::new(Window::new(500.0), scroll, els, enter_only).unwrap();
    assert_eq!(c.observer().len(), 3);

    c.on_scroll(900.0, 0);
    assert_eq!(enters.load(Ordering::Relaxed), 3);
    assert!(c.observer().is_empty());
    assert!(c.observer().host().listeners.is_empty());

    assert_eq!(c.on_scroll(0.0, 1_000), None);
    assert_eq!(c.on_resize(2_000.0, 1_000), None);
    assert_eq!(leaves.load(Ordering::Relaxed), 0);
}

#[test]
fn layout_shift_is_picked_up_by_trigger() {
    let scroll = ScrollPosition::new(0.0);
    let (enters, leaves) = (counter(), counter());
    let el = LayoutElement::new(5, 2000.0, 10.0, &scroll);

    let mut c = Controller::new(
        Window::new(600.0),
        scroll,
        Target::One(el),
        counting(&enters, &leaves).with_persist(true),
    )
    .unwrap();

    c.observer().targets()[0].element().set_page_top(100.0);
    assert_eq!(c.observer_mut().trigger().entered, 1);
}

#[test]
fn layout_element_dataset_overrides_offset() {
    let scroll = ScrollPosition::new(0.0);
    let (enters, leaves) = (counter(), counter());
    let el = LayoutElement::new(1, 640.0, 10.0, &scroll)
        .with_data(hunt::host::OFFSET_ATTRIBUTE, "100")
        .with_data(hunt::host::PERSIST_ATTRIBUTE, "nope");

    let c = Controller::new(
        Window::new(550.0),
        scroll,
        Target::One(el),
        counting(&enters, &leaves),
    )
    .unwrap();

    // 640 - 100 < 550: visible thanks to the per-element offset.
    assert_eq!(enters.load(Ordering::Relaxed), 1);
    assert_eq!(c.observer().targets()[0].offset(), 100.0);
    assert!(!c.observer().targets()[0].persist());
    assert_eq!(c.observer().warnings().len(), 1);
}
