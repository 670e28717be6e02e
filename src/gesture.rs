//! Per-element gesture handling.
//!
//! A [`CropFrame`] owns the geometry of one bound element and corrects every
//! drag and resize step the host interaction source proposes. The host reads
//! the returned [`Geometry`] to render the element for that frame.
//!
//! # Example
//!
//! ```
//! use zencrop::{CropFrame, DragStep, Geometry, Size};
//!
//! let mut frame = CropFrame::new(
//!     Geometry::new(-100.0, -50.0, 800.0, 400.0),
//!     Size::new(400.0, 300.0),
//! )
//! .unwrap();
//!
//! // Drag far left: the trailing edge stops at the container's.
//! let g = frame.drag(DragStep::new(-500.0, -200.0));
//! assert_eq!((g.left, g.top), (-400.0, -100.0));
//!
//! // Corner resize below the container height snaps to cover it.
//! let gesture = frame.begin_resize();
//! let g = frame.resize(gesture.step(Size::new(500.0, 250.0)));
//! assert_eq!((g.width, g.height), (600.0, 300.0));
//! assert_eq!(g.top, 0.0);
//! ```

use crate::binding::InitError;
use crate::constraint::{clamp_to_viewport, recenter, stabilize};
use crate::geometry::{AspectRatio, Geometry, Position, Size};

/// A proposed position from one drag-move frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragStep {
    pub left: f64,
    pub top: f64,
}

impl DragStep {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// The proposed position.
    pub const fn position(&self) -> Position {
        Position::new(self.left, self.top)
    }
}

/// A proposed size from one resize-move frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeStep {
    /// Size proposed by the resize handle for this frame.
    pub size: Size,
    /// Geometry captured when the resize gesture started.
    pub original: Geometry,
}

impl ResizeStep {
    pub const fn new(size: Size, original: Geometry) -> Self {
        Self { size, original }
    }
}

/// Gesture-start snapshot for a resize, see [`CropFrame::begin_resize`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeGesture {
    original: Geometry,
}

impl ResizeGesture {
    /// Geometry at the moment the gesture started.
    pub const fn original(&self) -> Geometry {
        self.original
    }

    /// Build the step for one frame of this gesture.
    pub const fn step(&self, size: Size) -> ResizeStep {
        ResizeStep::new(size, self.original)
    }
}

/// Geometry and fixed ratio of one element bound to a crop container.
///
/// Created once per attached element; the aspect ratio is taken from the
/// initial size and never recomputed. The initial geometry is kept as given:
/// the first drag or resize step brings it into compliance, growing an
/// element smaller than the container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropFrame {
    geometry: Geometry,
    bounds: Size,
    ratio: AspectRatio,
}

impl CropFrame {
    /// Bind an element with natural geometry `element` to a container of size
    /// `bounds`.
    ///
    /// Fails with [`InitError::InvalidDimensions`] when either size is zero,
    /// negative or not finite.
    pub fn new(element: Geometry, bounds: Size) -> Result<Self, InitError> {
        if !bounds.is_positive() {
            return Err(InitError::InvalidDimensions);
        }
        let ratio = AspectRatio::of(element.size()).ok_or(InitError::InvalidDimensions)?;
        Ok(Self {
            geometry: element,
            bounds,
            ratio,
        })
    }

    /// Current (last corrected) geometry.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Container size.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Fixed aspect ratio of the element.
    pub fn ratio(&self) -> AspectRatio {
        self.ratio
    }

    /// Handle one drag-move frame.
    ///
    /// Size is unchanged unless the initial element is smaller than the
    /// container; it is then stabilized before the position is clamped.
    pub fn drag(&mut self, step: DragStep) -> Geometry {
        let mut size = self.geometry.size();
        let mut proposed = step.position();
        if !size.covers(self.bounds) {
            let stable = stabilize(size, self.bounds, self.ratio);
            log::debug!(
                "undersized element {}x{} grown to {}x{} before drag",
                size.width,
                size.height,
                stable.size.width,
                stable.size.height
            );
            size = stable.size;
            proposed = stable.pin(proposed);
        }
        let position = clamp_to_viewport(proposed, size, self.bounds);
        log::trace!(
            "drag ({}, {}) -> ({}, {})",
            step.left,
            step.top,
            position.left,
            position.top
        );
        self.geometry = Geometry::from_parts(position, size);
        self.geometry
    }

    /// Snapshot the current geometry as the start of a resize gesture.
    pub fn begin_resize(&self) -> ResizeGesture {
        ResizeGesture {
            original: self.geometry,
        }
    }

    /// Handle one resize-move frame.
    ///
    /// The size is stabilized first, the position is recentered around the
    /// gesture's starting center for that size, pinned axes are zeroed and
    /// the result is clamped. Position and size are written back together.
    pub fn resize(&mut self, step: ResizeStep) -> Geometry {
        self.geometry = self.correct(step.size, step.original);
        log::trace!(
            "resize {}x{} -> {:?}",
            step.size.width,
            step.size.height,
            self.geometry
        );
        self.geometry
    }

    /// Replace the container size and bring the current geometry back into
    /// compliance with it.
    ///
    /// Growth needed to keep covering the new container is centered on the
    /// element's current center.
    pub fn set_bounds(&mut self, bounds: Size) -> Result<Geometry, InitError> {
        if !bounds.is_positive() {
            return Err(InitError::InvalidDimensions);
        }
        log::debug!(
            "crop container resized {}x{} -> {}x{}",
            self.bounds.width,
            self.bounds.height,
            bounds.width,
            bounds.height
        );
        self.bounds = bounds;
        self.geometry = self.correct(self.geometry.size(), self.geometry);
        Ok(self.geometry)
    }

    // Stabilize, recenter, pin, clamp.
    fn correct(&self, proposed: Size, original: Geometry) -> Geometry {
        let stable = stabilize(proposed, self.bounds, self.ratio);
        if stable.pinned.any() {
            log::trace!("pinned {:?} at {:?}", stable.pinned, stable.size);
        }
        let centered = recenter(original, stable.size);
        let position = clamp_to_viewport(stable.pin(centered), stable.size, self.bounds);
        Geometry::from_parts(position, stable.size)
    }
}
