//! A headless engine that keeps a bottom-fixed element (typically a
//! call-to-action control) pinned just above the mobile virtual keyboard.
//!
//! For host-level utilities (viewport probes, anchor surfaces, the activation
//! lifecycle, the JSON value store), see the `anchorage-adapter` crate.
//!
//! Mobile browsers shrink the visual viewport when the keyboard appears but
//! expose no keyboard-height API, so the offset must be inferred from
//! viewport geometry deltas. This crate reconciles the imprecise,
//! asynchronously-firing signals involved (viewport resize/scroll,
//! focus/blur, touch/scroll gestures) into a single flicker-free
//! [`AnchorPlacement`]: a non-negative pixel offset plus a transient hidden
//! flag for gestures that would otherwise be obstructed by the element.
//!
//! It is UI-agnostic. A host layer (DOM binding, wasm shim, simulator, test
//! harness) is expected to provide:
//! - viewport/document geometry snapshots at event time
//! - focus, touch, and scroll events
//! - a monotonic `now_ms` timestamp with every call
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod focus;
mod geometry;
mod gesture;
mod options;
mod presenter;
mod timer;
mod types;


pub use focus::FocusMachine;
pub use geometry::compute_offset;
pub use gesture::GestureMachine;
pub use options::{AnchorOptions, OnChangeCallback};
pub use presenter::AnchorPresenter;
pub use timer::Debounce;
pub use types::{
    AnchorPlacement, FocusPhase, GestureState, KeyboardState, TouchTarget, ViewportSnapshot,
};
