use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::os::raw::c_void;
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

use gl::types::*;

use crate::driver::{Driver, DriverString};
use crate::entry::EntryPointTable;

/// A scripted `Driver`.
///
/// It reports whatever strings it was built with, resolves only the symbols that
/// were exposed, and returns queued error codes. Exposed symbols point at inert
/// functions with the right signatures, so bound entry points can be called.
pub struct HeadlessDriver {
    vendor: Option<String>,
    renderer: Option<String>,
    version: Option<String>,
    extensions: Option<String>,
    symbols: HashMap<String, *const c_void>,
    errors: RefCell<VecDeque<GLenum>>,
    egl_errors: RefCell<VecDeque<i32>>,
}

impl HeadlessDriver {
    pub fn new(version: &str, extensions: &str) -> Self {
        HeadlessDriver {
            vendor: Some("crayon".to_owned()),
            renderer: Some("headless".to_owned()),
            version: Some(version.to_owned()),
            extensions: Some(extensions.to_owned()),
            symbols: HashMap::new(),
            errors: RefCell::new(VecDeque::new()),
            egl_errors: RefCell::new(VecDeque::new()),
        }
    }

    /// A driver which reports no strings at all.
    pub fn silent() -> Self {
        HeadlessDriver {
            vendor: None,
            renderer: None,
            version: None,
            extensions: None,
            ..HeadlessDriver::new("", "")
        }
    }

    /// Exposes every symbol of `T` under `<name><suffix>`.
    pub fn expose<T: EntryPointTable>(&mut self, suffix: &str) -> &mut Self {
        for &symbol in T::SYMBOLS {
            if let Some(stub) = stub(symbol) {
                self.symbols.insert(format!("{}{}", symbol, suffix), stub);
            }
        }

        self
    }

    /// Exposes a single symbol at an arbitrary address.
    pub fn expose_symbol(&mut self, name: &str, address: *const c_void) -> &mut Self {
        self.symbols.insert(name.to_owned(), address);
        self
    }

    /// Removes a previously exposed symbol.
    pub fn hide(&mut self, name: &str) -> &mut Self {
        self.symbols.remove(name);
        self
    }

    /// Queues a code for `Driver::error`.
    pub fn push_error(&self, code: GLenum) {
        self.errors.borrow_mut().push_back(code);
    }

    /// Queues a code for `Driver::egl_error`.
    pub fn push_egl_error(&self, code: i32) {
        self.egl_errors.borrow_mut().push_back(code);
    }
}

impl Driver for HeadlessDriver {
    fn string(&self, name: DriverString) -> Option<String> {
        match name {
            DriverString::Vendor => self.vendor.clone(),
            DriverString::Renderer => self.renderer.clone(),
            DriverString::Version => self.version.clone(),
        }
    }

    fn extensions(&self) -> Option<String> {
        self.extensions.clone()
    }

    fn error(&self) -> GLenum {
        self.errors.borrow_mut().pop_front().unwrap_or(gl::NO_ERROR)
    }

    fn egl_error(&self) -> Option<i32> {
        Some(self.egl_errors.borrow_mut().pop_front().unwrap_or(0x3000))
    }

    fn proc_address(&self, symbol: &str) -> *const c_void {
        self.symbols.get(symbol).cloned().unwrap_or(ptr::null())
    }
}

static NEXT_NAME: AtomicUsize = AtomicUsize::new(1);

unsafe extern "system" fn bind(_: GLenum, _: GLuint) {}

unsafe extern "system" fn gen(n: GLsizei, names: *mut GLuint) {
    for i in 0..n.max(0) as usize {
        *names.add(i) = NEXT_NAME.fetch_add(1, Ordering::Relaxed) as GLuint;
    }
}

unsafe extern "system" fn delete(_: GLsizei, _: *const GLuint) {}

unsafe extern "system" fn buffer_data(_: GLenum, _: GLsizeiptr, _: *const c_void, _: GLenum) {}

unsafe extern "system" fn buffer_sub_data(
    _: GLenum,
    _: GLintptr,
    _: GLsizeiptr,
    _: *const c_void,
) {
}

unsafe extern "system" fn map_buffer(_: GLenum, _: GLenum) -> *mut c_void {
    ptr::null_mut()
}

unsafe extern "system" fn unmap_buffer(_: GLenum) -> GLboolean {
    gl::TRUE
}

unsafe extern "system" fn framebuffer_texture_2d(
    _: GLenum,
    _: GLenum,
    _: GLenum,
    _: GLuint,
    _: GLint,
) {
}

unsafe extern "system" fn framebuffer_renderbuffer(_: GLenum, _: GLenum, _: GLenum, _: GLuint) {}

unsafe extern "system" fn check_framebuffer_status(_: GLenum) -> GLenum {
    0x8CD5
}

unsafe extern "system" fn renderbuffer_storage(_: GLenum, _: GLenum, _: GLsizei, _: GLsizei) {}

fn stub(symbol: &str) -> Option<*const c_void> {
    let address = match symbol {
        "glBindBuffer" | "glBindFramebuffer" | "glBindRenderbuffer" => bind as *const c_void,
        "glGenBuffers" | "glGenFramebuffers" | "glGenRenderbuffers" => gen as *const c_void,
        "glDeleteBuffers" | "glDeleteFramebuffers" | "glDeleteRenderbuffers" => {
            delete as *const c_void
        }
        "glBufferData" => buffer_data as *const c_void,
        "glBufferSubData" => buffer_sub_data as *const c_void,
        "glMapBuffer" => map_buffer as *const c_void,
        "glUnmapBuffer" => unmap_buffer as *const c_void,
        "glFramebufferTexture2D" => framebuffer_texture_2d as *const c_void,
        "glFramebufferRenderbuffer" => framebuffer_renderbuffer as *const c_void,
        "glCheckFramebufferStatus" => check_framebuffer_status as *const c_void,
        "glRenderbufferStorage" => renderbuffer_storage as *const c_void,
        _ => return None,
    };

    Some(address)
}
