//! Coordinate types shared by the constraint engine and the gesture layer.
//!
//! All values are `f64` in the container's coordinate space: the container's
//! top-left corner is `(0, 0)` and it extends to `(width, height)`. An element
//! that covers the container therefore sits at a non-positive `left`/`top`.

/// Top-left position of an element relative to the container origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

impl Position {
    /// Create a new position.
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// The container origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);
}

/// Width × height, used for both element sizes and container bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and strictly positive.
    ///
    /// Every size handed to the engine must satisfy this.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Whether this size is at least `bounds` on both axes.
    pub fn covers(&self, bounds: Size) -> bool {
        self.width >= bounds.width && self.height >= bounds.height
    }
}

/// Position and size of the movable element.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    /// Create a geometry from explicit edges and dimensions.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Combine a position and a size.
    pub const fn from_parts(position: Position, size: Size) -> Self {
        Self::new(position.left, position.top, size.width, size.height)
    }

    pub const fn position(&self) -> Position {
        Position::new(self.left, self.top)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the element fully covers a container of size `bounds`
    /// anchored at the origin.
    pub fn covers(&self, bounds: Size) -> bool {
        self.left <= 0.0
            && self.top <= 0.0
            && self.right() >= bounds.width
            && self.bottom() >= bounds.height
    }
}

/// Fixed `width / height` ratio of an element.
///
/// Captured once from the element's natural size and never recomputed, so
/// rounding in later frames cannot drift the ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AspectRatio(f64);

impl AspectRatio {
    /// Ratio of `size`, or `None` if either dimension is zero, negative or
    /// not finite.
    pub fn of(size: Size) -> Option<Self> {
        if !size.is_positive() {
            return None;
        }
        let ratio = size.width / size.height;
        (ratio.is_finite() && ratio > 0.0).then_some(Self(ratio))
    }

    /// The raw `width / height` value.
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Height that keeps this ratio at the given width.
    pub fn height_for(self, width: f64) -> f64 {
        width / self.0
    }

    /// Width that keeps this ratio at the given height.
    pub fn width_for(self, height: f64) -> f64 {
        height * self.0
    }
}

/// A pair of per-axis flags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Axes {
    /// Left/right axis (width, `left`).
    pub horizontal: bool,
    /// Top/bottom axis (height, `top`).
    pub vertical: bool,
}

impl Axes {
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
    };

    pub const BOTH: Self = Self {
        horizontal: true,
        vertical: true,
    };

    /// Whether either flag is set.
    pub const fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}
