//! Implementations of `Driver`: the real OpenGL driver, and a scripted one which
//! never touches a graphics context.

pub mod headless;

#[cfg(not(target_arch = "wasm32"))]
pub mod gl;

pub use self::headless::HeadlessDriver;

#[cfg(not(target_arch = "wasm32"))]
pub use self::gl::GLDriver;
