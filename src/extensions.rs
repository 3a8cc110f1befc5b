//! Extension probing.
//!
//! Membership is always decided on whole whitespace-separated tokens, so
//! `GL_EXT_framebuffer` never matches a driver advertising only
//! `GL_EXT_framebuffer_object`.

use crate::driver::Driver;

/// Splits the driver-reported extension string into its tokens.
#[inline]
pub fn tokenize(list: &str) -> impl Iterator<Item = &str> {
    list.split_whitespace()
}

/// Returns true if `name` appears as a whole token in `list`.
pub fn contains_token(list: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    tokenize(list).any(|token| token == name)
}

/// Queries the driver and returns true if it advertises the extension `name`.
///
/// The extension list is fetched on every call. An absent or empty list yields
/// `false` for every name.
pub fn has_extension<D: Driver + ?Sized>(driver: &D, name: &str) -> bool {
    match driver.extensions() {
        Some(list) => contains_token(&list, name),
        None => false,
    }
}

macro_rules! extensions {
    ($($string:literal => $field:ident,)+) => {
        /// Contains data about the list of extensions this crate cares about.
        ///
        /// A record belongs to exactly one graphics context; a recreated context
        /// must be probed again.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct Extensions {
            $(
                pub $field: bool,
            )+
        }

        impl Extensions {
            /// Every token this record tracks, in declaration order.
            pub const TOKENS: &'static [&'static str] = &[$($string,)+];

            /// Builds the record from a space-separated extension list.
            pub fn parse(list: &str) -> Extensions {
                let mut extensions = Extensions::default();

                for extension in tokenize(list) {
                    match extension {
                        $(
                            $string => extensions.$field = true,
                        )+
                        _ => (),
                    }
                }

                extensions
            }

            /// Returns true if `name` is a tracked token and was advertised.
            pub fn has(&self, name: &str) -> bool {
                match name {
                    $(
                        $string => self.$field,
                    )+
                    _ => false,
                }
            }
        }
    }
}

extensions! {
    "GL_ARB_vertex_buffer_object" => gl_arb_vertex_buffer_object,
    "GL_OES_mapbuffer" => gl_oes_mapbuffer,
    "GL_ARB_framebuffer_object" => gl_arb_framebuffer_object,
    "GL_EXT_framebuffer_object" => gl_ext_framebuffer_object,
    "GL_OES_framebuffer_object" => gl_oes_framebuffer_object,
    "GL_OES_depth24" => gl_oes_depth24,
    "GL_OES_rgb8_rgba8" => gl_oes_rgb8_rgba8,
}

impl Extensions {
    /// Probes the driver once and records the tracked tokens.
    pub fn probe<D: Driver + ?Sized>(driver: &D) -> Extensions {
        match driver.extensions() {
            Some(list) => Extensions::parse(&list),
            None => Extensions::default(),
        }
    }
}
