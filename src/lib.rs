//! Client-shell state for the KOTS property management app.
//!
//! Pure in-process state modules consumed by the rendering layer:
//! - Image preview overlay (single image or cyclic gallery)
//! - Scroll-driven header visibility with hysteresis
//! - Auth session and pending-request gauge
//! - Cloudinary url optimization and target-width resolution
//! - Route-path and viewport classification
//!
//! Nothing here performs I/O or blocks; the only external seam is the
//! host-provided [`session::SessionStore`]. [`shell::ShellContext`] bundles
//! the pieces behind locks for hosts that dispatch events from more than
//! one thread.

pub mod chrome;
pub mod images;
pub mod preview;
pub mod routes;
pub mod session;
pub mod shell;

pub use chrome::{DeviceMode, HeaderVisibility};
pub use preview::{PreviewGallery, PreviewItem};
pub use session::{AuthSession, LoadingCounter, MemoryStore, SessionStore};
pub use shell::ShellContext;
