//! Aspect-locked drag and resize geometry for image crop windows.
//!
//! An element (the image) is dragged and resized behind a fixed crop window
//! (the container). Every proposed step is corrected so the element keeps its
//! aspect ratio and always covers the window: no background ever shows.
//!
//! Pure geometry: no pointer handling, no rendering, `no_std` compatible.
//!
//! # Modules
//!
//! - [`constraint`]: Clamp, ratio stabilization and resize recentering
//! - [`geometry`]: Position, size and aspect ratio value types
//! - [`gesture`]: Per-element drag/resize step handling ([`CropFrame`])
//! - [`options`]: Container, drag and resize options
//! - [`binding`]: Host capability checks and element attachment
//! - `registry`: Element handle → binding map (`alloc`)
//! - `svg`: Gesture trace visualization (`svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod binding;
pub mod constraint;
pub mod geometry;
pub mod gesture;
pub mod options;
#[cfg(feature = "alloc")]
pub mod registry;
#[cfg(feature = "svg")]
pub mod svg;

pub use binding::{Binding, InitError, InteractionHost, attach};
pub use constraint::{Stabilized, clamp_to_viewport, recenter, stabilize};
pub use geometry::{AspectRatio, Axes, Geometry, Position, Size};
pub use gesture::{CropFrame, DragStep, ResizeGesture, ResizeStep};
pub use options::{CropOptions, Handle, Handles, ParseHandlesError, ResizeOptions};
#[cfg(feature = "alloc")]
pub use registry::Registry;
