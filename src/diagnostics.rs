//! Translation of driver error codes and call-site tagged error logging.
//!
//! Driver errors are advisory: they are logged with the location of the call that
//! produced them and left for the caller to act on. Nothing in here returns an
//! `Error` or panics.

use std::fmt;

use gl::types::GLenum;

use crate::driver::Driver;

/// Outcome of translating a raw error code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Translation {
    /// The code means success; there is nothing to report.
    NoError,
    /// A known error with its symbolic name.
    Known(&'static str),
    /// A code this crate has no name for. Still an error.
    Unknown,
}

impl Translation {
    #[inline]
    pub fn name(self) -> Option<&'static str> {
        match self {
            Translation::Known(name) => Some(name),
            _ => None,
        }
    }

    #[inline]
    pub fn is_error(self) -> bool {
        self != Translation::NoError
    }
}

/// Translates a code returned by `glGetError`.
pub fn translate_error(code: GLenum) -> Translation {
    match code {
        0x0000 => Translation::NoError,
        0x0500 => Translation::Known("GL_INVALID_ENUM"),
        0x0501 => Translation::Known("GL_INVALID_VALUE"),
        0x0502 => Translation::Known("GL_INVALID_OPERATION"),
        0x0503 => Translation::Known("GL_STACK_OVERFLOW"),
        0x0504 => Translation::Known("GL_STACK_UNDERFLOW"),
        0x0505 => Translation::Known("GL_OUT_OF_MEMORY"),
        0x0506 => Translation::Known("GL_INVALID_FRAMEBUFFER_OPERATION"),
        0x0507 => Translation::Known("GL_CONTEXT_LOST"),
        _ => Translation::Unknown,
    }
}

/// Translates a code returned by `eglGetError`.
pub fn translate_egl_error(code: i32) -> Translation {
    match code {
        0x3000 => Translation::NoError,
        0x3001 => Translation::Known("EGL_NOT_INITIALIZED"),
        0x3002 => Translation::Known("EGL_BAD_ACCESS"),
        0x3003 => Translation::Known("EGL_BAD_ALLOC"),
        0x3004 => Translation::Known("EGL_BAD_ATTRIBUTE"),
        0x3005 => Translation::Known("EGL_BAD_CONFIG"),
        0x3006 => Translation::Known("EGL_BAD_CONTEXT"),
        0x3007 => Translation::Known("EGL_BAD_CURRENT_SURFACE"),
        0x3008 => Translation::Known("EGL_BAD_DISPLAY"),
        0x3009 => Translation::Known("EGL_BAD_MATCH"),
        0x300A => Translation::Known("EGL_BAD_NATIVE_PIXMAP"),
        0x300B => Translation::Known("EGL_BAD_NATIVE_WINDOW"),
        0x300C => Translation::Known("EGL_BAD_PARAMETER"),
        0x300D => Translation::Known("EGL_BAD_SURFACE"),
        0x300E => Translation::Known("EGL_CONTEXT_LOST"),
        _ => Translation::Unknown,
    }
}

/// The source location a driver call was made from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    #[inline]
    pub const fn new(file: &'static str, line: u32) -> Self {
        CallSite { file, line }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Which error queue a record was read from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorSource {
    GL,
    EGL,
}

/// A single failed driver call, ready to be logged.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub source: ErrorSource,
    pub code: u32,
    pub name: Option<&'static str>,
    pub callsite: CallSite,
}

impl ErrorRecord {
    /// Builds the record for a `glGetError` code. `None` if the code means success.
    pub fn gl(code: GLenum, callsite: CallSite) -> Option<ErrorRecord> {
        ErrorRecord::translated(ErrorSource::GL, code, translate_error(code), callsite)
    }

    /// Builds the record for an `eglGetError` code. `None` if the code means success.
    pub fn egl(code: i32, callsite: CallSite) -> Option<ErrorRecord> {
        let translation = translate_egl_error(code);
        ErrorRecord::translated(ErrorSource::EGL, code as u32, translation, callsite)
    }

    #[inline]
    fn translated(
        source: ErrorSource,
        code: u32,
        translation: Translation,
        callsite: CallSite,
    ) -> Option<ErrorRecord> {
        match translation {
            Translation::NoError => None,
            translation => Some(ErrorRecord {
                source,
                code,
                name: translation.name(),
                callsite,
            }),
        }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self.source {
            ErrorSource::GL => "GL",
            ErrorSource::EGL => "EGL",
        };

        match self.name {
            Some(name) => write!(
                f,
                "[{}] {} (0x{:04X}) at {}.",
                tag, name, self.code, self.callsite
            ),
            None => write!(
                f,
                "[{}] Unknown error 0x{:04X} at {}.",
                tag, self.code, self.callsite
            ),
        }
    }
}

/// Logs `code` at error severity, tagged with `callsite`. Does nothing at all
/// when the code means success.
#[inline]
pub fn log_if_error(code: GLenum, callsite: CallSite) {
    if let Some(record) = ErrorRecord::gl(code, callsite) {
        log_record(&record);
    }
}

/// Logs an EGL error code, see `log_if_error`.
#[inline]
pub fn log_if_egl_error(code: i32, callsite: CallSite) {
    if let Some(record) = ErrorRecord::egl(code, callsite) {
        log_record(&record);
    }
}

/// Reads the driver's error queue once and logs what it finds.
pub fn check_error<D: Driver + ?Sized>(driver: &D, callsite: CallSite) {
    log_if_error(driver.error(), callsite);
}

/// Reads the windowing layer's error once and logs what it finds.
pub fn check_egl_error<D: Driver + ?Sized>(driver: &D, callsite: CallSite) {
    if let Some(code) = driver.egl_error() {
        log_if_egl_error(code, callsite);
    }
}

#[cold]
fn log_record(record: &ErrorRecord) {
    error!("{}", record);
}

/// Expands to the `CallSite` of the invocation.
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::diagnostics::CallSite::new(file!(), line!())
    };
}

/// Checks the driver's error queue and logs any error with the invocation's call-site.
///
/// ```ignore
/// fbo.bind_framebuffer(FRAMEBUFFER, id);
/// check_gl!(driver);
/// ```
#[macro_export]
macro_rules! check_gl {
    ($driver:expr) => {
        $crate::diagnostics::check_error(&$driver, $crate::callsite!())
    };
}

/// Checks the windowing layer's error and logs it with the invocation's call-site.
#[macro_export]
macro_rules! check_egl {
    ($driver:expr) => {
        $crate::diagnostics::check_egl_error(&$driver, $crate::callsite!())
    };
}
