//! Vendor-neutral constants for the optional feature groups.
//!
//! The `EXT`, `OES` and core spellings share these values; renderer code should
//! only ever use the names in here.

use gl::types::GLenum;

pub const FRAMEBUFFER: GLenum = 0x8D40;
pub const FRAMEBUFFER_BINDING: GLenum = 0x8CA6;
pub const RENDERBUFFER: GLenum = 0x8D41;
pub const RENDERBUFFER_BINDING: GLenum = 0x8CA7;

pub const COLOR_ATTACHMENT0: GLenum = 0x8CE0;
pub const DEPTH_ATTACHMENT: GLenum = 0x8D00;

pub const DEPTH_COMPONENT16: GLenum = 0x81A5;
pub const DEPTH_COMPONENT24: GLenum = 0x81A6;
pub const RGBA8: GLenum = 0x8058;

pub const ARRAY_BUFFER: GLenum = 0x8892;
pub const ELEMENT_ARRAY_BUFFER: GLenum = 0x8893;
pub const WRITE_ONLY: GLenum = 0x88B9;

/// Completeness of a framebuffer, as reported by `glCheckFramebufferStatus`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FramebufferStatus {
    Complete,
    Unsupported,
    IncompleteAttachment,
    MissingAttachment,
    /// Only reported by `GL_EXT_framebuffer_object` and ES 2.0 drivers.
    IncompleteDimensions,
    IncompleteDrawBuffer,
    IncompleteReadBuffer,
    IncompleteMultisample,
    Undefined,
    /// A status value this crate has no name for.
    Unknown(GLenum),
}

impl FramebufferStatus {
    pub fn from_raw(status: GLenum) -> Self {
        match status {
            0x8CD5 => FramebufferStatus::Complete,
            0x8CDD => FramebufferStatus::Unsupported,
            0x8CD6 => FramebufferStatus::IncompleteAttachment,
            0x8CD7 => FramebufferStatus::MissingAttachment,
            0x8CD9 => FramebufferStatus::IncompleteDimensions,
            0x8CDB => FramebufferStatus::IncompleteDrawBuffer,
            0x8CDC => FramebufferStatus::IncompleteReadBuffer,
            0x8D56 => FramebufferStatus::IncompleteMultisample,
            0x8219 => FramebufferStatus::Undefined,
            v => FramebufferStatus::Unknown(v),
        }
    }

    #[inline]
    pub fn is_complete(self) -> bool {
        self == FramebufferStatus::Complete
    }

    /// Symbolic name of the status.
    pub fn name(self) -> &'static str {
        match self {
            FramebufferStatus::Complete => "GL_FRAMEBUFFER_COMPLETE",
            FramebufferStatus::Unsupported => "GL_FRAMEBUFFER_UNSUPPORTED",
            FramebufferStatus::IncompleteAttachment => "GL_FRAMEBUFFER_INCOMPLETE_ATTACHMENT",
            FramebufferStatus::MissingAttachment => {
                "GL_FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT"
            }
            FramebufferStatus::IncompleteDimensions => "GL_FRAMEBUFFER_INCOMPLETE_DIMENSIONS",
            FramebufferStatus::IncompleteDrawBuffer => "GL_FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER",
            FramebufferStatus::IncompleteReadBuffer => "GL_FRAMEBUFFER_INCOMPLETE_READ_BUFFER",
            FramebufferStatus::IncompleteMultisample => "GL_FRAMEBUFFER_INCOMPLETE_MULTISAMPLE",
            FramebufferStatus::Undefined => "GL_FRAMEBUFFER_UNDEFINED",
            FramebufferStatus::Unknown(_) => "GL_FRAMEBUFFER_STATUS_UNKNOWN",
        }
    }
}
