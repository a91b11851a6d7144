use alloc::sync::Arc;

use crate::{HuntResult, InvalidArgument};

/// Default minimum time between two throttled sweeps.
pub const DEFAULT_THROTTLE_INTERVAL_MS: u64 = 100;

/// A visibility callback. Receives the element that entered or left the viewport.
pub type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Configuration shared by every element of one registration call.
///
/// This type is cheap to clone: callbacks are stored in `Arc`s, so one set of options can seed
/// several registrations.
pub struct HuntOptions<E> {
    /// Margin added around the viewport edges before an element counts as visible.
    ///
    /// Positive values fire `enter` earlier and `leave` later; negative values shrink the
    /// trigger area.
    pub offset: f64,

    /// Keep tracking the element after its first transition.
    ///
    /// When `false`, the element is dropped after its first `leave`, or after its first
    /// `enter` if no `leave` callback is set.
    pub persist: bool,

    pub enter: Option<Callback<E>>,
    pub leave: Option<Callback<E>>,

    /// Minimum time between two sweeps driven by scroll or resize signals.
    ///
    /// Only the first registration of an observer decides the interval.
    pub throttle_interval_ms: u64,
}

impl<E> HuntOptions<E> {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            persist: false,
            enter: None,
            leave: None,
            throttle_interval_ms: DEFAULT_THROTTLE_INTERVAL_MS,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn with_enter(mut self, enter: impl Fn(&E) + Send + Sync + 'static) -> Self {
        self.enter = Some(Arc::new(enter));
        self
    }

    pub fn with_leave(mut self, leave: impl Fn(&E) + Send + Sync + 'static) -> Self {
        self.leave = Some(Arc::new(leave));
        self
    }

    pub fn with_throttle_interval_ms(mut self, interval_ms: u64) -> Self {
        self.throttle_interval_ms = interval_ms;
        self
    }

    pub(crate) fn validate(&self) -> HuntResult<()> {
        if !self.offset.is_finite() {
            return Err(InvalidArgument::NonFiniteOffset {
                offset: self.offset,
            }
            .into());
        }
        Ok(())
    }
}

impl<E> Default for HuntOptions<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for HuntOptions<E> {
    fn clone(&self) -> Self {
        Self {
            offset: self.offset,
            persist: self.persist,
            enter: self.enter.clone(),
            leave: self.leave.clone(),
            throttle_interval_ms: self.throttle_interval_ms,
        }
    }
}

impl<E> core::fmt::Debug for HuntOptions<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HuntOptions")
            .field("offset", &self.offset)
            .field("persist", &self.persist)
            .field("enter", &self.enter.is_some())
            .field("leave", &self.leave.is_some())
            .field("throttle_interval_ms", &self.throttle_interval_ms)
            .finish()
    }
}

/// The plain-data part of [`HuntOptions`], for configuration loaded from text.
///
/// With `feature = "serde"`, this type deserializes from camelCase keys (`offset`, `persist`,
/// `throttleInterval`) and rejects unknown keys.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, deny_unknown_fields, rename_all = "camelCase")
)]
pub struct HuntConfig {
    pub offset: f64,
    pub persist: bool,
    #[cfg_attr(feature = "serde", serde(rename = "throttleInterval"))]
    pub throttle_interval_ms: u64,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            offset: 0.0,
            persist: false,
            throttle_interval_ms: DEFAULT_THROTTLE_INTERVAL_MS,
        }
    }
}

impl<E> From<HuntConfig> for HuntOptions<E> {
    fn from(config: HuntConfig) -> Self {
        Self::new()
            .with_offset(config.offset)
            .with_persist(config.persist)
            .with_throttle_interval_ms(config.throttle_interval_ms)
    }
}
