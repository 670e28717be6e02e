//! Attachment options.
//!
//! [`CropOptions`] names the crop container and carries the options for the
//! host's drag and resize behaviors. Drag options are opaque and forwarded
//! as given. Resize options are forwarded too, except that fixed-ratio mode
//! and the four corner handles are always forced on: edge handles would
//! resize one axis at a time and fight the ratio lock.
//!
//! # Example
//!
//! ```
//! use zencrop::{CropOptions, Handles};
//!
//! let opts = CropOptions::new()
//!     .container("#crop")
//!     .resizable(|r| r.handles(Handles::ALL).aspect_ratio(false));
//!
//! let forced = opts.resizable.enforced();
//! assert!(forced.aspect_ratio);
//! assert_eq!(forced.handles, Handles::CORNERS);
//! assert_eq!(forced.handles.to_string(), "ne, se, sw, nw");
//! ```

use core::fmt;
use core::str::FromStr;

/// A resize handle position, named after compass points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Handle {
    /// All handles, in display order.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Short name (`"n"`, `"ne"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::East => "e",
            Self::South => "s",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
            Self::NorthWest => "nw",
        }
    }

    /// Whether this is a corner handle (moves both axes at once).
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::NorthEast | Self::SouthEast | Self::SouthWest | Self::NorthWest
        )
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of resize handles.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Handles(u8);

impl Handles {
    pub const NONE: Self = Self(0);

    /// The four corners, the only handles a fixed-ratio crop exposes.
    pub const CORNERS: Self = Self(
        Handle::NorthEast.bit()
            | Handle::SouthEast.bit()
            | Handle::SouthWest.bit()
            | Handle::NorthWest.bit(),
    );

    pub const ALL: Self = Self(0xff);

    /// Resize defaults of the usual host widgets: east, south and south-east.
    pub const HOST_DEFAULT: Self =
        Self(Handle::East.bit() | Handle::South.bit() | Handle::SouthEast.bit());

    pub const fn contains(self, handle: Handle) -> bool {
        self.0 & handle.bit() != 0
    }

    /// Add a handle to the set.
    pub const fn with(self, handle: Handle) -> Self {
        Self(self.0 | handle.bit())
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate handles in [`Handle::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Handle> {
        Handle::ALL.into_iter().filter(move |h| self.contains(*h))
    }
}

impl FromIterator<Handle> for Handles {
    fn from_iter<I: IntoIterator<Item = Handle>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

impl fmt::Debug for Handles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handles({self})")
    }
}

/// Comma-separated short names, e.g. `"ne, se, sw, nw"`.
impl fmt::Display for Handles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, h) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(h.name())?;
        }
        Ok(())
    }
}

/// A handle name in a handle list was not recognized.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseHandlesError;

impl fmt::Display for ParseHandlesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized resize handle (expected n, e, s, w, ne, se, sw, nw or all)")
    }
}

impl core::error::Error for ParseHandlesError {}

impl FromStr for Handles {
    type Err = ParseHandlesError;

    /// Parse a comma-separated list such as `"ne, se, sw, nw"` or `"all"`.
    /// Names are case-insensitive; empty entries are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = Self::NONE;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if part.eq_ignore_ascii_case("all") {
                set = Self::ALL;
                continue;
            }
            let handle = Handle::ALL
                .into_iter()
                .find(|h| h.name().eq_ignore_ascii_case(part))
                .ok_or(ParseHandlesError)?;
            set = set.with(handle);
        }
        Ok(set)
    }
}

/// Options for the host's resize behavior.
///
/// `extra` carries any host-specific settings and is forwarded untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeOptions<R = ()> {
    pub aspect_ratio: bool,
    pub handles: Handles,
    pub extra: R,
}

impl<R: Default> Default for ResizeOptions<R> {
    fn default() -> Self {
        Self {
            aspect_ratio: false,
            handles: Handles::HOST_DEFAULT,
            extra: R::default(),
        }
    }
}

impl<R> ResizeOptions<R> {
    pub fn aspect_ratio(mut self, enabled: bool) -> Self {
        self.aspect_ratio = enabled;
        self
    }

    pub fn handles(mut self, handles: Handles) -> Self {
        self.handles = handles;
        self
    }

    /// Replace the host-specific settings.
    pub fn extra<R2>(self, extra: R2) -> ResizeOptions<R2> {
        ResizeOptions {
            aspect_ratio: self.aspect_ratio,
            handles: self.handles,
            extra,
        }
    }

    /// These options with fixed-ratio mode and the corner handles forced on,
    /// whatever the caller asked for. Everything else is kept.
    pub fn enforced(self) -> Self {
        Self {
            aspect_ratio: true,
            handles: Handles::CORNERS,
            extra: self.extra,
        }
    }
}

/// Options for attaching an element to a crop container.
///
/// `C` identifies the container in the host's terms (a selector, a node
/// handle, ...). `D` and `R` are the host's drag and resize settings.
#[derive(Clone, Debug, PartialEq)]
pub struct CropOptions<C, D = (), R = ()> {
    /// The crop container. Required; attaching without one fails.
    pub container: Option<C>,
    pub draggable: D,
    pub resizable: ResizeOptions<R>,
}

impl<C, D: Default, R: Default> Default for CropOptions<C, D, R> {
    fn default() -> Self {
        Self {
            container: None,
            draggable: D::default(),
            resizable: ResizeOptions::default(),
        }
    }
}

impl<C> CropOptions<C> {
    /// Options with no container and default drag/resize settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C, D, R> CropOptions<C, D, R> {
    /// Set the crop container.
    pub fn container(mut self, container: C) -> Self {
        self.container = Some(container);
        self
    }

    /// Replace the drag settings forwarded to the host.
    pub fn draggable<D2>(self, draggable: D2) -> CropOptions<C, D2, R> {
        CropOptions {
            container: self.container,
            draggable,
            resizable: self.resizable,
        }
    }

    /// Adjust the resize settings forwarded to the host.
    pub fn resizable<R2>(
        self,
        f: impl FnOnce(ResizeOptions<R>) -> ResizeOptions<R2>,
    ) -> CropOptions<C, D, R2> {
        CropOptions {
            container: self.container,
            draggable: self.draggable,
            resizable: f(self.resizable),
        }
    }
}
