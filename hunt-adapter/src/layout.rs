use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use hunt::{BoundingBox, Element};

/// Vertical scroll offset shared between a host and its layout elements.
///
/// Cloning shares the same position.
#[derive(Clone, Debug, Default)]
pub struct ScrollPosition(Rc<Cell<f64>>);

impl ScrollPosition {
    pub fn new(y: f64) -> Self {
        Self(Rc::new(Cell::new(y)))
    }

    pub fn get(&self) -> f64 {
        self.0.get()
    }

    pub fn set(&self, y: f64) {
        self.0.set(y);
    }
}

/// An element laid out in page coordinates.
///
/// Its viewport-relative bounding box is `page_top - scroll_y`, so moving the shared
/// [`ScrollPosition`] moves every element built from it.
#[derive(Clone, Debug)]
pub struct LayoutElement {
    id: u64,
    page_top: Cell<f64>,
    height: Cell<f64>,
    scroll: ScrollPosition,
    dataset: Vec<(String, String)>,
}

impl LayoutElement {
    pub fn new(id: u64, page_top: f64, height: f64, scroll: &ScrollPosition) -> Self {
        Self {
            id,
            page_top: Cell::new(page_top),
            height: Cell::new(height),
            scroll: scroll.clone(),
            dataset: Vec::new(),
        }
    }

    /// Adds a `data-*` attribute, e.g. `with_data("data-hunt-offset", "50")`.
    pub fn with_data(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.push((name.into(), value.into()));
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn page_top(&self) -> f64 {
        self.page_top.get()
    }

    /// Moves the element within the page (a layout shift).
    pub fn set_page_top(&self, page_top: f64) {
        self.page_top.set(page_top);
    }

    pub fn set_height(&self, height: f64) {
        self.height.set(height);
    }
}

impl Element for LayoutElement {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.page_top.get() - self.scroll.get(), self.height.get())
    }

    fn data_attribute(&self, name: &str) -> Option<String> {
        self.dataset
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }
}
