//! Per-frame geometry corrections for a crop window.
//!
//! Three pure functions, each total over finite inputs:
//!
//! - [`clamp_to_viewport`] keeps the element's edges outside the container's
//!   edges so no background shows.
//! - [`stabilize`] keeps the fixed aspect ratio and never lets the element
//!   shrink below the container on either axis.
//! - [`recenter`] turns a corner-anchored resize into growth around the
//!   gesture's starting center.
//!
//! No allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zencrop::{AspectRatio, Position, Size, clamp_to_viewport, stabilize};
//!
//! let bounds = Size::new(400.0, 300.0);
//! let ratio = AspectRatio::of(Size::new(800.0, 400.0)).unwrap();
//!
//! // Dragging right past the container's left edge snaps back to it.
//! let p = clamp_to_viewport(Position::new(50.0, 10.0), Size::new(800.0, 400.0), bounds);
//! assert_eq!(p, Position::new(0.0, 0.0));
//!
//! // Shrinking below the container height snaps to cover it exactly.
//! let s = stabilize(Size::new(500.0, 250.0), bounds, ratio);
//! assert_eq!(s.size, Size::new(600.0, 300.0));
//! assert!(s.pinned.vertical);
//! ```

use num_traits::Float;

use crate::geometry::{AspectRatio, Axes, Geometry, Position, Size};

/// Clamp a proposed position so an element of size `element` leaves no gap
/// inside a container of size `bounds`.
///
/// Both axes use an inclusive magnitude test; at the tie the clamped and
/// unclamped values are equal.
///
/// Requires `element` to cover `bounds` on both axes (see [`stabilize`]).
/// The result then satisfies `bounds - element <= position <= 0` per axis,
/// and clamping an already clamped position returns it unchanged.
pub fn clamp_to_viewport(position: Position, element: Size, bounds: Size) -> Position {
    Position {
        left: clamp_axis(position.left, element.width, bounds.width),
        top: clamp_axis(position.top, element.height, bounds.height),
    }
}

/// Result of [`stabilize`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stabilized {
    /// Corrected element size.
    pub size: Size,
    /// Axes on which the element now exactly fits the container. The
    /// position on a pinned axis must be 0.
    pub pinned: Axes,
}

impl Stabilized {
    /// Zero the pinned axes of `position`.
    pub fn pin(&self, position: Position) -> Position {
        Position {
            left: if self.pinned.horizontal { 0.0 } else { position.left },
            top: if self.pinned.vertical { 0.0 } else { position.top },
        }
    }
}

/// Correct a proposed size so it keeps `ratio` and covers `bounds`.
///
/// Width is checked first, then height against the height the width check
/// produced, so when both trigger the height snap wins. If that leaves the
/// element narrower than the container (the container is relatively wider
/// than the element), width is snapped again. When nothing triggers, the
/// proposed size passes through untouched.
pub fn stabilize(proposed: Size, bounds: Size, ratio: AspectRatio) -> Stabilized {
    let mut size = proposed;
    let mut snapped = false;

    if size.width <= bounds.width {
        size = fit_width(bounds.width, ratio);
        snapped = true;
    }
    if size.height <= bounds.height {
        size = fit_height(bounds.height, ratio);
        snapped = true;
    }
    if size.width < bounds.width {
        size = fit_width(bounds.width, ratio);
    }

    if snapped {
        // The derived axis can land one ulp under the bound.
        size.width = size.width.max(bounds.width);
        size.height = size.height.max(bounds.height);
    }

    Stabilized {
        size,
        pinned: Axes {
            horizontal: size.width == bounds.width,
            vertical: size.height == bounds.height,
        },
    }
}

/// Position that keeps the center of `original` fixed while its size
/// changes to `size`.
///
/// The result is only a proposal; feed it to [`clamp_to_viewport`].
pub fn recenter(original: Geometry, size: Size) -> Position {
    Position {
        left: original.left + (original.width - size.width) / 2.0,
        top: original.top + (original.height - size.height) / 2.0,
    }
}

// ============================================================================
// Internal geometry
// ============================================================================

fn clamp_axis(offset: f64, extent: f64, bound: f64) -> f64 {
    let offset = if offset > 0.0 { 0.0 } else { offset };
    let travel = extent - bound;
    if Float::abs(offset) >= travel {
        bound - extent
    } else {
        offset
    }
}

fn fit_width(width: f64, ratio: AspectRatio) -> Size {
    Size::new(width, ratio.height_for(width))
}

fn fit_height(height: f64, ratio: AspectRatio) -> Size {
    Size::new(ratio.width_for(height), height)
}
