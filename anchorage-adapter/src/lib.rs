//! Host adapter utilities for the `anchorage` crate.
//!
//! The `anchorage` crate is UI-agnostic and focuses on the core state
//! machines and geometry math. This crate provides the small,
//! framework-neutral pieces a host needs to put them on screen:
//!
//! - The [`ViewportProbe`] / [`AnchorSurface`] seams a DOM binding, wasm
//!   shim, or simulator implements
//! - [`Controller`]: the activation lifecycle (eager initial measurement,
//!   event forwarding, idempotent surface writes, clean teardown)
//! - `store`: the string-keyed JSON value store used by surrounding page
//!   code (behind `feature = "store"`, on by default)
//!
//! This crate is intentionally framework-agnostic (no DOM/web bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;
#[cfg(feature = "store")]
mod store;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use host::{AnchorSurface, ViewportProbe};
#[cfg(feature = "store")]
pub use store::{JsonStore, MemoryStore, StoreBackend};
