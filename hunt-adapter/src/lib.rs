//! Adapter utilities for the `hunt` crate.
//!
//! The `hunt` crate is UI-agnostic and focuses on the visibility engine. This crate provides
//! small, framework-neutral helpers commonly needed by hosts:
//!
//! - A listener registry and window model implementing the host capability traits
//! - Layout elements positioned in page coordinates and moved by a shared scroll position
//! - A controller that forwards scroll/resize/timer ticks to an observer
//!
//! This crate is intentionally framework-agnostic (no web-sys/winit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod layout;
mod window;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use layout::{LayoutElement, ScrollPosition};
pub use window::{Listeners, Window};
