//! Attaching an element to a crop container.
//!
//! [`attach`] checks that the host interaction source can drag and resize,
//! that a container was configured and can be measured, and then creates the
//! element's [`CropFrame`]. Failures are logged at `error` level and
//! returned; no binding exists afterwards, so the element simply stays
//! inert and nothing else on the host is affected.
//!
//! # Example
//!
//! ```
//! use zencrop::{CropOptions, Geometry, InteractionHost, Size, attach};
//!
//! struct Page;
//!
//! impl InteractionHost<&'static str> for Page {
//!     fn supports_drag(&self) -> bool { true }
//!     fn supports_resize(&self) -> bool { true }
//!     fn container_size(&self, container: &&'static str) -> Option<Size> {
//!         (*container == ".container").then_some(Size::new(400.0, 300.0))
//!     }
//! }
//!
//! let element = Geometry::new(0.0, 0.0, 800.0, 400.0);
//! let binding = attach(&Page, element, CropOptions::new().container(".container")).unwrap();
//! assert!(binding.resizable.aspect_ratio);
//! assert_eq!(binding.frame.bounds(), Size::new(400.0, 300.0));
//! ```

use core::fmt;

use crate::geometry::{Geometry, Size};
use crate::gesture::CropFrame;
use crate::options::{CropOptions, ResizeOptions};

/// Prefix for diagnostics emitted while attaching.
const LOG_PREFIX: &str = "crop_resize";

/// The host interaction source: whatever delivers drag/resize gestures and
/// renders the element.
///
/// `C` is how the host names a container.
pub trait InteractionHost<C> {
    /// Whether the host can drag elements.
    fn supports_drag(&self) -> bool;

    /// Whether the host can resize elements.
    fn supports_resize(&self) -> bool;

    /// Current size of `container`, or `None` if it does not resolve.
    fn container_size(&self, container: &C) -> Option<Size>;
}

impl<C, H: InteractionHost<C> + ?Sized> InteractionHost<C> for &H {
    fn supports_drag(&self) -> bool {
        (**self).supports_drag()
    }

    fn supports_resize(&self) -> bool {
        (**self).supports_resize()
    }

    fn container_size(&self, container: &C) -> Option<Size> {
        (**self).container_size(container)
    }
}

/// Why an element could not be attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InitError {
    /// The host lacks drag and/or resize support. Each flag is `true` for
    /// the capability that is missing.
    MissingCapability { drag: bool, resize: bool },
    /// No crop container was specified.
    MissingConfiguration,
    /// A container was specified but the host could not measure it.
    ContainerUnresolved,
    /// Element or container has a zero, negative or non-finite dimension.
    InvalidDimensions,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCapability { drag, resize } => {
                let what = match (drag, resize) {
                    (true, true) => "draggable and resizable",
                    (true, false) => "draggable",
                    _ => "resizable",
                };
                write!(f, "the interaction host has no {what} support")
            }
            Self::MissingConfiguration => f.write_str("no crop container specified"),
            Self::ContainerUnresolved => f.write_str("crop container could not be measured"),
            Self::InvalidDimensions => {
                f.write_str("element and container sizes must be positive and finite")
            }
        }
    }
}

impl core::error::Error for InitError {}

/// An attached element: its frame plus the options to hand to the host's
/// drag and resize behaviors.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding<D = (), R = ()> {
    pub frame: CropFrame,
    /// Drag settings, exactly as the caller gave them.
    pub draggable: D,
    /// Resize settings with fixed ratio and corner handles forced on.
    pub resizable: ResizeOptions<R>,
}

/// Attach an element with natural geometry `element` using `options`.
///
/// Checks, in order: host capabilities, container presence, container
/// measurement, dimensions. The first failure is logged and returned.
pub fn attach<C, D, R>(
    host: &impl InteractionHost<C>,
    element: Geometry,
    options: CropOptions<C, D, R>,
) -> Result<Binding<D, R>, InitError> {
    bind(host, element, options).inspect_err(|e| log::error!("{LOG_PREFIX}: {e}"))
}

fn bind<C, D, R>(
    host: &impl InteractionHost<C>,
    element: Geometry,
    options: CropOptions<C, D, R>,
) -> Result<Binding<D, R>, InitError> {
    let drag = !host.supports_drag();
    let resize = !host.supports_resize();
    if drag || resize {
        return Err(InitError::MissingCapability { drag, resize });
    }

    let container = options
        .container
        .as_ref()
        .ok_or(InitError::MissingConfiguration)?;
    let bounds = host
        .container_size(container)
        .ok_or(InitError::ContainerUnresolved)?;

    let frame = CropFrame::new(element, bounds)?;
    log::debug!(
        "{LOG_PREFIX}: attached {}x{} element to {}x{} container",
        element.width,
        element.height,
        bounds.width,
        bounds.height
    );

    Ok(Binding {
        frame,
        draggable: options.draggable,
        resizable: options.resizable.enforced(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::options::Handles;

    /// A host with switchable capabilities and a single known container.
    pub(crate) struct FakeHost {
        pub drag: bool,
        pub resize: bool,
        pub container: Option<Size>,
    }

    impl FakeHost {
        pub(crate) fn ready() -> Self {
            Self {
                drag: true,
                resize: true,
                container: Some(Size::new(400.0, 300.0)),
            }
        }
    }

    impl InteractionHost<&'static str> for FakeHost {
        fn supports_drag(&self) -> bool {
            self.drag
        }

        fn supports_resize(&self) -> bool {
            self.resize
        }

        fn container_size(&self, container: &&'static str) -> Option<Size> {
            if *container == ".container" {
                self.container
            } else {
                None
            }
        }
    }

    fn element() -> Geometry {
        Geometry::new(-100.0, -50.0, 800.0, 400.0)
    }

    fn options() -> CropOptions<&'static str> {
        CropOptions::new().container(".container")
    }

    #[test]
    fn attach_builds_frame() {
        let b = attach(&FakeHost::ready(), element(), options()).unwrap();
        assert_eq!(b.frame.geometry(), element());
        assert_eq!(b.frame.bounds(), Size::new(400.0, 300.0));
        assert_eq!(b.frame.ratio().get(), 2.0);
    }

    #[test]
    fn attach_forces_ratio_and_corners() {
        let opts = options().resizable(|r| r.aspect_ratio(false).handles(Handles::ALL));
        let b = attach(&FakeHost::ready(), element(), opts).unwrap();
        assert!(b.resizable.aspect_ratio);
        assert_eq!(b.resizable.handles, Handles::CORNERS);
    }

    #[test]
    fn attach_forwards_draggable() {
        let opts = options().draggable("containment: parent");
        let b = attach(&FakeHost::ready(), element(), opts).unwrap();
        assert_eq!(b.draggable, "containment: parent");
    }

    #[test]
    fn missing_drag_capability() {
        let host = FakeHost {
            drag: false,
            ..FakeHost::ready()
        };
        assert_eq!(
            attach(&host, element(), options()),
            Err(InitError::MissingCapability {
                drag: true,
                resize: false
            })
        );
    }

    #[test]
    fn missing_both_capabilities_checked_before_container() {
        let host = FakeHost {
            drag: false,
            resize: false,
            container: None,
        };
        let e = attach(&host, element(), CropOptions::<&str>::new()).unwrap_err();
        assert_eq!(
            e,
            InitError::MissingCapability {
                drag: true,
                resize: true
            }
        );
    }

    #[test]
    fn missing_container() {
        let e = attach(&FakeHost::ready(), element(), CropOptions::<&str>::new()).unwrap_err();
        assert_eq!(e, InitError::MissingConfiguration);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn error_messages() {
        use alloc::string::ToString;

        let both = InitError::MissingCapability {
            drag: true,
            resize: true,
        };
        assert_eq!(
            both.to_string(),
            "the interaction host has no draggable and resizable support"
        );
        assert_eq!(
            InitError::MissingConfiguration.to_string(),
            "no crop container specified"
        );
        assert_eq!(
            InitError::ContainerUnresolved.to_string(),
            "crop container could not be measured"
        );
    }

    #[test]
    fn unresolved_container() {
        let opts = CropOptions::new().container(".nope");
        assert_eq!(
            attach(&FakeHost::ready(), element(), opts),
            Err(InitError::ContainerUnresolved)
        );
    }

    #[test]
    fn zero_sized_element() {
        let e = attach(
            &FakeHost::ready(),
            Geometry::new(0.0, 0.0, 800.0, 0.0),
            options(),
        );
        assert_eq!(e, Err(InitError::InvalidDimensions));
    }

    #[cfg(feature = "std")]
    mod logging {
        use super::*;
        use std::sync::Mutex;

        static RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

        struct Capture;

        impl log::Log for Capture {
            fn enabled(&self, _: &log::Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &log::Record<'_>) {
                if let Ok(mut records) = RECORDS.lock() {
                    records.push((record.level(), record.args().to_string()));
                }
            }

            fn flush(&self) {}
        }

        static CAPTURE: Capture = Capture;

        fn captured(level: log::Level, message: &str) -> bool {
            RECORDS
                .lock()
                .map(|r| r.iter().any(|(l, m)| *l == level && m == message))
                .unwrap_or(false)
        }

        #[test]
        fn init_failure_is_logged_as_error() {
            let _ = log::set_logger(&CAPTURE);
            log::set_max_level(log::LevelFilter::Trace);

            let host = FakeHost {
                resize: false,
                ..FakeHost::ready()
            };
            let e = attach(&host, element(), options()).unwrap_err();
            assert!(captured(
                log::Level::Error,
                "crop_resize: the interaction host has no resizable support"
            ));
            assert_eq!(
                e.to_string(),
                "the interaction host has no resizable support"
            );

            attach(&FakeHost::ready(), element(), options()).unwrap();
            assert!(captured(
                log::Level::Debug,
                "crop_resize: attached 800x400 element to 400x300 container"
            ));
        }
    }

    #[test]
    fn host_by_reference() {
        let host = FakeHost::ready();
        let by_ref = &host;
        assert!(attach(&by_ref, element(), options()).is_ok());
    }
}
