//! A headless viewport visibility observer.
//!
//! For adapter-level utilities (listener registry, scroll-driven layout elements, a
//! tick-driven controller), see the `hunt-adapter` crate.
//!
//! Register one or more elements with [`HuntOptions`], and the observer calls `enter` when an
//! element starts intersecting the viewport and `leave` when it stops. Scroll and resize
//! signals are throttled; the last signal of a burst always produces a sweep.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - element bounding boxes ([`Element`])
//! - the viewport height ([`ViewportMetrics`])
//! - scroll/resize subscriptions ([`EventSource`]) and a monotonic `now_ms` clock
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
pub mod host;
mod observer;
mod options;
mod target;
pub mod throttle;
mod types;


pub use error::{ConfigParseWarning, HuntError, HuntResult, InvalidArgument};
pub use host::{Element, EventSource, ViewportMetrics};
pub use observer::HuntObserver;
pub use options::{Callback, DEFAULT_THROTTLE_INTERVAL_MS, HuntConfig, HuntOptions};
pub use target::{Target, TrackedTarget};
pub use throttle::{Throttle, Throttled};
pub use types::{BoundingBox, HostEvent, SweepSummary, Transition, is_on_viewport};
