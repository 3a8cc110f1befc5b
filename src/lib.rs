//! # What is This?
//!
//! The capability negotiation and diagnostics layer between crayon's renderer and
//! the OpenGL driver. It decides once per context which optional features
//! (buffer objects with mapping, framebuffer objects and renderbuffer objects) are
//! really usable, binds their entry points under vendor-neutral names no matter
//! which extension supplied them, and turns driver error codes into log records
//! tagged with the call-site that produced them.
//!
//! ```ignore
//! let driver = unsafe { GLDriver::new(|symbol| window.get_proc_address(symbol) as *const _) };
//! let caps = GraphicsCapabilities::probe(&driver, &ProbeSettings::default())?;
//!
//! let fbo = caps.framebuffer()?;
//! unsafe { (fbo.bind_framebuffer)(consts::FRAMEBUFFER, id) };
//! check_gl!(driver);
//! ```
//!
//! Everything in here must run on the thread that owns the graphics context.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate gl;
extern crate serde;
extern crate serde_json;

#[macro_use]
pub mod diagnostics;

pub mod backends;
pub mod capabilities;
pub mod consts;
pub mod driver;
pub mod entry;
pub mod errors;
pub mod extensions;
pub mod info;
pub mod settings;
pub mod version;

pub mod prelude {
    pub use crate::backends::HeadlessDriver;
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::backends::GLDriver;
    pub use crate::capabilities::{Capability, CapabilityFlags, GraphicsCapabilities, ProbeState};
    pub use crate::consts::FramebufferStatus;
    pub use crate::diagnostics::{log_if_error, translate_error, CallSite, Translation};
    pub use crate::driver::{Driver, DriverString};
    pub use crate::entry::Binding;
    pub use crate::errors::{Error, Result};
    pub use crate::extensions::has_extension;
    pub use crate::settings::ProbeSettings;
    pub use crate::version::Version;
}
