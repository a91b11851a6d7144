/// The slice of an element's bounding rectangle the intersection test needs.
///
/// Both values are measured in the same units as the viewport height, with `top` relative to
/// the viewport's top edge (negative once the element has scrolled past it).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub top: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Host signals the observer subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    Scroll,
    Resize,
}

impl HostEvent {
    /// The DOM event name for this signal.
    pub fn name(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
        }
    }
}

/// A visibility change applied to a tracked target during a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    Enter,
    Leave,
}

/// What a single sweep did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepSummary {
    /// Number of `enter` transitions.
    pub entered: usize,
    /// Number of `leave` transitions.
    pub left: usize,
    /// Number of targets removed from tracking.
    pub retired: usize,
}

impl SweepSummary {
    pub fn is_quiet(&self) -> bool {
        self.entered == 0 && self.left == 0
    }

    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            entered: self.entered + other.entered,
            left: self.left + other.left,
            retired: self.retired + other.retired,
        }
    }

    pub(crate) fn record(&mut self, transition: Transition) {
        match transition {
            Transition::Enter => self.entered += 1,
            Transition::Leave => self.left += 1,
        }
    }
}

/// Binary intersection test between an element's box and the offset-expanded viewport.
///
/// Returns `true` when some part of the box lies within
/// `[-(height + offset), viewport_height + offset)` measured from the viewport's top edge.
pub fn is_on_viewport(rect: BoundingBox, offset: f64, viewport_height: f64) -> bool {
    rect.top - offset < viewport_height && rect.top >= -(rect.height + offset)
}
