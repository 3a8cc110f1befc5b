//! The boundary between this crate and the graphics driver.
//!
//! Everything the capability layer knows about the device comes through a
//! `Driver`: the identification strings, the advertised extension list, the
//! error queue and the symbol lookup primitive. None of the values handed out
//! here are assumed to be portable across vendors.

use std::os::raw::c_void;

use gl::types::GLenum;

/// Identification strings a driver reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DriverString {
    /// The company responsible for this GL implementation.
    Vendor,
    /// The name of the renderer, typically specific to a hardware configuration.
    Renderer,
    /// A version or release number, optionally followed by vendor information.
    Version,
}

/// The upstream graphics driver.
///
/// All methods must be called on the thread that owns the graphics context.
pub trait Driver {
    /// Returns the identification string, or `None` if the driver does not report it.
    fn string(&self, name: DriverString) -> Option<String>;

    /// Returns the space-separated list of advertised extensions, or `None` if the
    /// driver reports nothing.
    fn extensions(&self) -> Option<String>;

    /// Pops the oldest error code from the driver's error queue. Returns
    /// `gl::NO_ERROR` when the queue is empty.
    fn error(&self) -> GLenum;

    /// Pops the last error of the windowing layer (EGL), on platforms which have one.
    fn egl_error(&self) -> Option<i32> {
        None
    }

    /// Resolves a symbol by name. A null pointer means the symbol is absent.
    fn proc_address(&self, symbol: &str) -> *const c_void;
}
