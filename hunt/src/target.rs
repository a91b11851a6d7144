use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::host::{OFFSET_ATTRIBUTE, PERSIST_ATTRIBUTE};
use crate::{
    BoundingBox, Callback, ConfigParseWarning, Element, HuntOptions, HuntResult, InvalidArgument,
    Transition, is_on_viewport,
};

/// One element or an ordered collection of elements to register.
#[derive(Clone, Debug, PartialEq)]
pub enum Target<E> {
    One(E),
    Many(Vec<E>),
}

impl<E> Target<E> {
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<E> {
        match self {
            Self::One(e) => alloc::vec![e],
            Self::Many(v) => v,
        }
    }
}

impl<E: Element> Target<E> {
    pub(crate) fn validate(&self) -> HuntResult<()> {
        let bad = match self {
            Self::One(e) => (!e.is_element()).then_some(0),
            Self::Many(v) => v.iter().position(|e| !e.is_element()),
        };
        match bad {
            Some(index) => Err(InvalidArgument::NotAnElement { index }.into()),
            None => Ok(()),
        }
    }
}

impl<E> From<Vec<E>> for Target<E> {
    fn from(elements: Vec<E>) -> Self {
        Self::Many(elements)
    }
}

impl<E, const N: usize> From<[E; N]> for Target<E> {
    fn from(elements: [E; N]) -> Self {
        Self::Many(elements.into_iter().collect())
    }
}

impl<E> FromIterator<E> for Target<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::Many(iter.into_iter().collect())
    }
}

/// A tracked element with its resolved configuration and visibility state.
///
/// Exposed read-only through [`crate::HuntObserver::targets`].
pub struct TrackedTarget<E> {
    element: E,
    offset: f64,
    persist: bool,
    enter: Option<Callback<E>>,
    leave: Option<Callback<E>>,
    visible: bool,
    retired: bool,
}

impl<E: Element> TrackedTarget<E> {
    /// Builds a target from shared options, applying `data-hunt-*` overrides.
    ///
    /// Malformed overrides are pushed to `warnings` and leave the option untouched.
    pub(crate) fn new(
        element: E,
        options: &HuntOptions<E>,
        index: usize,
        warnings: &mut Vec<ConfigParseWarning>,
    ) -> Self {
        let mut target = Self {
            offset: options.offset,
            persist: options.persist,
            enter: options.enter.clone(),
            leave: options.leave.clone(),
            visible: false,
            retired: false,
            element,
        };

        if let Some(raw) = target.element.data_attribute(PERSIST_ATTRIBUTE) {
            match parse_bool(&raw) {
                Ok(persist) => target.persist = persist,
                Err(reason) => warnings.push(warn(index, PERSIST_ATTRIBUTE, raw, reason)),
            }
        }

        if let Some(raw) = target.element.data_attribute(OFFSET_ATTRIBUTE) {
            match parse_number(&raw) {
                Ok(offset) if offset.is_finite() => target.offset = offset,
                Ok(_) => warnings.push(warn(
                    index,
                    OFFSET_ATTRIBUTE,
                    raw,
                    String::from("offset must be finite"),
                )),
                Err(reason) => warnings.push(warn(index, OFFSET_ATTRIBUTE, raw, reason)),
            }
        }

        target
    }

    /// Runs the intersection test against a live bounding box and applies the transition.
    ///
    /// Each call evaluates the target exactly once; the returned transition has already had its
    /// callback invoked.
    pub(crate) fn evaluate(&mut self, viewport_height: f64) -> Option<Transition> {
        // Left over from a sweep a callback panic cut short; compacted at the end of this one.
        if self.retired {
            return None;
        }
        let rect = self.element.bounding_box();
        let on_viewport = is_on_viewport(rect, self.offset, viewport_height);

        if !self.visible && on_viewport {
            if let Some(enter) = &self.enter {
                enter(&self.element);
            }
            self.visible = true;
            // Targets without a leave callback only care about the entering edge.
            if self.leave.is_none() && !self.persist {
                self.retired = true;
            }
            return Some(Transition::Enter);
        }

        if self.visible && !on_viewport {
            if let Some(leave) = &self.leave {
                leave(&self.element);
            }
            self.visible = false;
            if !self.persist {
                self.retired = true;
            }
            return Some(Transition::Leave);
        }

        None
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.element.bounding_box()
    }
}

impl<E> TrackedTarget<E> {
    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn persist(&self) -> bool {
        self.persist
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_enter(&self) -> bool {
        self.enter.is_some()
    }

    pub fn has_leave(&self) -> bool {
        self.leave.is_some()
    }

    pub(crate) fn is_retired(&self) -> bool {
        self.retired
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for TrackedTarget<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrackedTarget")
            .field("element", &self.element)
            .field("offset", &self.offset)
            .field("persist", &self.persist)
            .field("enter", &self.enter.is_some())
            .field("leave", &self.leave.is_some())
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    serde_json::from_str::<bool>(raw.trim()).map_err(|e| e.to_string())
}

fn parse_number(raw: &str) -> Result<f64, String> {
    serde_json::from_str::<f64>(raw.trim()).map_err(|e| e.to_string())
}

fn warn(
    index: usize,
    attribute: &'static str,
    value: String,
    reason: String,
) -> ConfigParseWarning {
    hwarn!(
        target_index = index,
        attribute,
        value = %value,
        reason = %reason,
        "ignoring invalid attribute override"
    );
    ConfigParseWarning {
        target_index: index,
        attribute,
        value,
        reason,
    }
}
