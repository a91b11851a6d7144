//! Capabilities the observer consumes from its host environment.
//!
//! The observer never talks to a window, a DOM, or a clock directly. A host adapter implements
//! these traits and forwards signals through [`crate::HuntObserver::handle_event`].

use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;

use crate::{BoundingBox, HostEvent};

/// Attribute overriding the `persist` option for a single element (`data-hunt-persist`).
pub const PERSIST_ATTRIBUTE: &str = "data-hunt-persist";
/// Attribute overriding the `offset` option for a single element (`data-hunt-offset`).
pub const OFFSET_ATTRIBUTE: &str = "data-hunt-offset";

/// An element the observer can track.
pub trait Element {
    /// Current bounding box relative to the viewport origin.
    ///
    /// Queried live on every sweep; the observer never caches it.
    fn bounding_box(&self) -> BoundingBox;

    /// Whether this handle refers to an actual element node.
    ///
    /// Registration rejects handles that return `false`.
    fn is_element(&self) -> bool {
        true
    }

    /// Raw value of a `data-*` attribute, if present.
    fn data_attribute(&self, _name: &str) -> Option<String> {
        None
    }
}

impl<T: Element + ?Sized> Element for &T {
    fn bounding_box(&self) -> BoundingBox {
        (**self).bounding_box()
    }

    fn is_element(&self) -> bool {
        (**self).is_element()
    }

    fn data_attribute(&self, name: &str) -> Option<String> {
        (**self).data_attribute(name)
    }
}

impl<T: Element + ?Sized> Element for Rc<T> {
    fn bounding_box(&self) -> BoundingBox {
        (**self).bounding_box()
    }

    fn is_element(&self) -> bool {
        (**self).is_element()
    }

    fn data_attribute(&self, name: &str) -> Option<String> {
        (**self).data_attribute(name)
    }
}

impl<T: Element + ?Sized> Element for Arc<T> {
    fn bounding_box(&self) -> BoundingBox {
        (**self).bounding_box()
    }

    fn is_element(&self) -> bool {
        (**self).is_element()
    }

    fn data_attribute(&self, name: &str) -> Option<String> {
        (**self).data_attribute(name)
    }
}

/// Subscription side of the host's event dispatcher.
///
/// The observer subscribes to both events when it connects and unsubscribes from both when it
/// disconnects. While subscribed, the host is expected to forward the events to
/// [`crate::HuntObserver::handle_event`].
pub trait EventSource {
    fn subscribe(&mut self, event: HostEvent);
    fn unsubscribe(&mut self, event: HostEvent);
}

/// Viewport metrics provider.
pub trait ViewportMetrics {
    fn viewport_height(&self) -> f64;
}
