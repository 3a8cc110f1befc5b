extern crate glcaps;

use glcaps::extensions::{contains_token, Extensions};
use glcaps::prelude::*;

#[test]
fn whole_token_membership() {
    let driver = HeadlessDriver::new(
        "2.1 Mesa 10.1",
        "GL_EXT_framebuffer_object GL_ARB_vertex_buffer_object",
    );

    assert!(has_extension(&driver, "GL_EXT_framebuffer_object"));
    assert!(has_extension(&driver, "GL_ARB_vertex_buffer_object"));
    assert!(!has_extension(&driver, "GL_EXT_framebuffer"));
    assert!(!has_extension(&driver, "GL_ARB_vertex_buffer"));
    assert!(!has_extension(&driver, "vertex_buffer_object"));
    assert!(!has_extension(&driver, ""));
}

#[test]
fn similar_names() {
    let list = "GL_EXT_foobar GL_EXT_foo_bar";

    assert!(!contains_token(list, "GL_EXT_foo"));
    assert!(contains_token(list, "GL_EXT_foobar"));
    assert!(contains_token(list, "GL_EXT_foo_bar"));
}

#[test]
fn absent_or_empty_list() {
    let silent = HeadlessDriver::silent();
    let empty = HeadlessDriver::new("2.1", "");

    for name in Extensions::TOKENS {
        assert!(!has_extension(&silent, name));
        assert!(!has_extension(&empty, name));
    }

    assert_eq!(Extensions::probe(&silent), Extensions::default());
    assert_eq!(Extensions::probe(&empty), Extensions::default());
}

#[test]
fn record_agrees_with_query() {
    let list = "GL_OES_framebuffer_object GL_OES_depth24 GL_OES_rgb8_rgba8 GL_OES_mapbufferX";
    let driver = HeadlessDriver::new("OpenGL ES 2.0", list);
    let exts = Extensions::probe(&driver);

    for name in Extensions::TOKENS {
        assert_eq!(exts.has(name), has_extension(&driver, name), "{}", name);
    }

    assert!(exts.gl_oes_framebuffer_object);
    assert!(!exts.gl_oes_mapbuffer);
}
