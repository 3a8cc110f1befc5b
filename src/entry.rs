//! Optional driver entry points, bound once per context.
//!
//! Every feature group has an ordered list of `Variant`s: the core profile and the
//! vendor extensions which provide the same functions under suffixed names. The
//! first variant that is advertised and fully resolvable wins, and its function
//! table is stored under the vendor-neutral field names. A group whose symbols can
//! not be resolved is `Unsupported`, whatever the driver advertises.

use std::fmt;
use std::mem;
use std::os::raw::c_void;

use gl::types::*;

use crate::consts::FramebufferStatus;
use crate::driver::Driver;
use crate::extensions::Extensions;
use crate::version::Version;

/// A function table for one feature group.
pub trait EntryPointTable: Sized + Copy {
    /// Human readable name of the group.
    const GROUP: &'static str;
    /// Unsuffixed names of every symbol in the table.
    const SYMBOLS: &'static [&'static str];

    /// Resolves every symbol with `suffix` appended, falling back to the unsuffixed
    /// name. Returns `None` if any symbol is missing.
    fn resolve<D: Driver + ?Sized>(driver: &D, suffix: &str) -> Option<Self>;
}

/// Looks up `symbol` + `suffix`, then `symbol` alone.
pub fn lookup<D>(driver: &D, symbol: &str, suffix: &str) -> Option<*const c_void>
where
    D: Driver + ?Sized,
{
    if !suffix.is_empty() {
        let name = format!("{}{}", symbol, suffix);
        if let Some(ptr) = valid(driver.proc_address(&name)) {
            trace!("[GL] Resolved {}.", name);
            return Some(ptr);
        }
    }

    let ptr = valid(driver.proc_address(symbol));
    if ptr.is_none() {
        debug!("[GL] Failed to resolve {}{}.", symbol, suffix);
    }

    ptr
}

#[inline]
fn valid(ptr: *const c_void) -> Option<*const c_void> {
    // Some loaders hand out small sentinel values instead of null.
    match ptr as isize {
        -1 | 0 | 1 | 2 | 3 => None,
        _ => Some(ptr),
    }
}

macro_rules! entry_points {
    (
        $(#[$meta:meta])*
        pub struct $table:ident($group:literal) {
            $($field:ident: $symbol:literal => fn($($arg:ty),*) $(-> $ret:ty)?,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $table {
            $(
                pub $field: unsafe extern "system" fn($($arg),*) $(-> $ret)?,
            )+
        }

        impl EntryPointTable for $table {
            const GROUP: &'static str = $group;
            const SYMBOLS: &'static [&'static str] = &[$($symbol,)+];

            fn resolve<D: Driver + ?Sized>(driver: &D, suffix: &str) -> Option<Self> {
                Some($table {
                    $(
                        $field: unsafe {
                            mem::transmute::<*const c_void, unsafe extern "system" fn($($arg),*) $(-> $ret)?>(
                                lookup(driver, $symbol, suffix)?,
                            )
                        },
                    )+
                })
            }
        }

        impl fmt::Debug for $table {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.debug_struct(stringify!($table))
                    $(.field(stringify!($field), &(self.$field as *const c_void)))+
                    .finish()
            }
        }
    };
}

entry_points! {
    /// Buffer objects, including mapping.
    pub struct BufferObjectFns("buffer object") {
        bind_buffer: "glBindBuffer" => fn(GLenum, GLuint),
        gen_buffers: "glGenBuffers" => fn(GLsizei, *mut GLuint),
        buffer_data: "glBufferData" => fn(GLenum, GLsizeiptr, *const c_void, GLenum),
        buffer_sub_data: "glBufferSubData" => fn(GLenum, GLintptr, GLsizeiptr, *const c_void),
        delete_buffers: "glDeleteBuffers" => fn(GLsizei, *const GLuint),
        map_buffer: "glMapBuffer" => fn(GLenum, GLenum) -> *mut c_void,
        unmap_buffer: "glUnmapBuffer" => fn(GLenum) -> GLboolean,
    }
}

entry_points! {
    /// Framebuffer objects.
    pub struct FramebufferFns("framebuffer") {
        bind_framebuffer: "glBindFramebuffer" => fn(GLenum, GLuint),
        framebuffer_texture_2d: "glFramebufferTexture2D" => fn(GLenum, GLenum, GLenum, GLuint, GLint),
        framebuffer_renderbuffer: "glFramebufferRenderbuffer" => fn(GLenum, GLenum, GLenum, GLuint),
        gen_framebuffers: "glGenFramebuffers" => fn(GLsizei, *mut GLuint),
        delete_framebuffers: "glDeleteFramebuffers" => fn(GLsizei, *const GLuint),
        check_framebuffer_status: "glCheckFramebufferStatus" => fn(GLenum) -> GLenum,
    }
}

entry_points! {
    /// Renderbuffer objects.
    pub struct RenderbufferFns("renderbuffer") {
        gen_renderbuffers: "glGenRenderbuffers" => fn(GLsizei, *mut GLuint),
        delete_renderbuffers: "glDeleteRenderbuffers" => fn(GLsizei, *const GLuint),
        bind_renderbuffer: "glBindRenderbuffer" => fn(GLenum, GLuint),
        renderbuffer_storage: "glRenderbufferStorage" => fn(GLenum, GLenum, GLsizei, GLsizei),
    }
}

impl FramebufferFns {
    /// Queries the completeness of the framebuffer bound to `target`.
    ///
    /// # Safety
    ///
    /// The context these functions were resolved from must be current.
    pub unsafe fn status(&self, target: GLenum) -> FramebufferStatus {
        FramebufferStatus::from_raw((self.check_framebuffer_status)(target))
    }
}

/// What a variant needs from the driver before its symbols are looked up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Promoted to core from the given desktop and/or embedded version on.
    Core {
        gl: Option<Version>,
        es: Option<Version>,
    },
    /// Provided by the named extension.
    Extension(&'static str),
}

impl Requirement {
    pub fn holds(self, version: Option<Version>, extensions: &Extensions) -> bool {
        match self {
            Requirement::Core { gl, es } => match version {
                Some(v) => gl.map_or(false, |min| v >= min) || es.map_or(false, |min| v >= min),
                None => false,
            },
            Requirement::Extension(name) => extensions.has(name),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Requirement::Core { .. } => write!(f, "core profile"),
            Requirement::Extension(name) => write!(f, "{}", name),
        }
    }
}

/// One way a feature group may be provided.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Variant {
    pub requirement: Requirement,
    pub suffix: &'static str,
}

pub const BUFFER_OBJECT_VARIANTS: &[Variant] = &[
    Variant {
        requirement: Requirement::Core {
            gl: Some(Version::GL(1, 5)),
            es: None,
        },
        suffix: "",
    },
    Variant {
        requirement: Requirement::Extension("GL_ARB_vertex_buffer_object"),
        suffix: "ARB",
    },
    Variant {
        requirement: Requirement::Extension("GL_OES_mapbuffer"),
        suffix: "OES",
    },
];

/// Framebuffer and renderbuffer objects come from the same extensions.
pub const FRAMEBUFFER_VARIANTS: &[Variant] = &[
    Variant {
        requirement: Requirement::Core {
            gl: Some(Version::GL(3, 0)),
            es: Some(Version::ES(2, 0)),
        },
        suffix: "",
    },
    Variant {
        requirement: Requirement::Extension("GL_ARB_framebuffer_object"),
        suffix: "",
    },
    Variant {
        requirement: Requirement::Extension("GL_EXT_framebuffer_object"),
        suffix: "EXT",
    },
    Variant {
        requirement: Requirement::Extension("GL_OES_framebuffer_object"),
        suffix: "OES",
    },
];

/// The bound state of a feature group, chosen once per context.
#[derive(Debug, Copy, Clone)]
pub enum Binding<T> {
    /// Bound from the core profile.
    Core(T),
    /// Bound from the named extension.
    Extension(&'static str, T),
    /// Not available on this driver.
    Unsupported,
}

impl<T> Binding<T> {
    #[inline]
    pub fn is_bound(&self) -> bool {
        match *self {
            Binding::Unsupported => false,
            _ => true,
        }
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        match *self {
            Binding::Core(ref fns) | Binding::Extension(_, ref fns) => Some(fns),
            Binding::Unsupported => None,
        }
    }

    /// The extension which supplied the entry points, if any.
    #[inline]
    pub fn extension(&self) -> Option<&'static str> {
        match *self {
            Binding::Extension(name, _) => Some(name),
            _ => None,
        }
    }

    /// Returns the function table.
    ///
    /// # Panics
    ///
    /// Panics if the group is unsupported. Consult the capability guard first.
    #[inline]
    pub fn fns(&self) -> &T {
        match self.get() {
            Some(fns) => fns,
            None => panic!("Entry points of an unsupported feature group were used unchecked."),
        }
    }
}

/// Tries `variants` in order and binds the first one that is advertised and resolves.
pub fn bind<T, D>(
    driver: &D,
    version: Option<Version>,
    extensions: &Extensions,
    variants: &[Variant],
) -> Binding<T>
where
    T: EntryPointTable,
    D: Driver + ?Sized,
{
    let mut advertised = false;

    for variant in variants {
        if !variant.requirement.holds(version, extensions) {
            continue;
        }

        advertised = true;
        match T::resolve(driver, variant.suffix) {
            Some(fns) => {
                info!("[GL] Binds {} entry points from {}.", T::GROUP, variant.requirement);
                return match variant.requirement {
                    Requirement::Core { .. } => Binding::Core(fns),
                    Requirement::Extension(name) => Binding::Extension(name, fns),
                };
            }
            None => warn!(
                "[GL] {} advertises {} entry points, but they failed to resolve.",
                variant.requirement,
                T::GROUP
            ),
        }
    }

    if advertised {
        warn!("[GL] Downgrades {} support to unsupported.", T::GROUP);
    }

    Binding::Unsupported
}

/// Every optional entry point of a context.
#[derive(Debug, Copy, Clone)]
pub struct EntryPoints {
    pub buffer_objects: Binding<BufferObjectFns>,
    pub framebuffer: Binding<FramebufferFns>,
    pub renderbuffer: Binding<RenderbufferFns>,
}

impl EntryPoints {
    /// Nothing bound.
    pub fn unbound() -> Self {
        EntryPoints {
            buffer_objects: Binding::Unsupported,
            framebuffer: Binding::Unsupported,
            renderbuffer: Binding::Unsupported,
        }
    }

    /// Resolves every group against the driver. Calling this again on the same
    /// context yields the same bindings.
    pub fn bind<D: Driver + ?Sized>(
        driver: &D,
        version: Option<Version>,
        extensions: &Extensions,
    ) -> Self {
        EntryPoints {
            buffer_objects: bind(driver, version, extensions, BUFFER_OBJECT_VARIANTS),
            framebuffer: bind(driver, version, extensions, FRAMEBUFFER_VARIANTS),
            renderbuffer: bind(driver, version, extensions, FRAMEBUFFER_VARIANTS),
        }
    }
}
