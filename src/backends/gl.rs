use std::ffi;
use std::os::raw::c_void;

use gl::types::*;

use crate::driver::{Driver, DriverString};
use crate::version::Version;

/// A `Driver` over the OpenGL context current on the calling thread.
pub struct GLDriver {
    loader: Box<dyn Fn(&str) -> *const c_void>,
}

impl GLDriver {
    /// Loads the core functions with `loader` and keeps it for resolving the
    /// optional entry points later.
    ///
    /// # Safety
    ///
    /// The context `loader` resolves symbols for must be current on this thread for
    /// as long as the driver is used.
    pub unsafe fn new<F>(loader: F) -> Self
    where
        F: Fn(&str) -> *const c_void + 'static,
    {
        gl::load_with(|symbol| loader(symbol));
        GLDriver {
            loader: Box::new(loader),
        }
    }

    #[inline]
    unsafe fn parse_str(id: GLenum) -> Option<String> {
        let s = gl::GetString(id);
        if s.is_null() {
            return None;
        }

        match ffi::CStr::from_ptr(s as *const _).to_str() {
            Ok(v) => Some(v.to_owned()),
            Err(_) => {
                warn!("[GL] String of {:#X} is unformaled.", id);
                None
            }
        }
    }

    /// Contexts from 3.0 on may not report `GL_EXTENSIONS` as a single string, so
    /// the list is gathered one entry at a time.
    unsafe fn parse_indexed_extensions() -> Option<String> {
        let mut num_extensions = 0;
        gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut num_extensions);

        let mut names = Vec::with_capacity(num_extensions.max(0) as usize);
        for i in 0..num_extensions {
            let ext = gl::GetStringi(gl::EXTENSIONS, i as GLuint);
            if ext.is_null() {
                continue;
            }

            if let Ok(v) = ffi::CStr::from_ptr(ext as *const _).to_str() {
                names.push(v);
            }
        }

        Some(names.join(" "))
    }
}

impl Driver for GLDriver {
    fn string(&self, name: DriverString) -> Option<String> {
        let id = match name {
            DriverString::Vendor => gl::VENDOR,
            DriverString::Renderer => gl::RENDERER,
            DriverString::Version => gl::VERSION,
        };

        unsafe { GLDriver::parse_str(id) }
    }

    fn extensions(&self) -> Option<String> {
        let indexed = self
            .string(DriverString::Version)
            .and_then(|v| Version::parse(&v).ok())
            .map_or(false, |v| v >= Version::GL(3, 0) || v >= Version::ES(3, 0));

        unsafe {
            if indexed && gl::GetStringi::is_loaded() {
                GLDriver::parse_indexed_extensions()
            } else {
                GLDriver::parse_str(gl::EXTENSIONS)
            }
        }
    }

    fn error(&self) -> GLenum {
        unsafe { gl::GetError() }
    }

    fn proc_address(&self, symbol: &str) -> *const c_void {
        (self.loader)(symbol)
    }
}
