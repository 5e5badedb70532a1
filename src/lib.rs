// glerror/src/lib.rs
//
//! Typed access to the OpenGL error flags.
//!
//! The GL reports misuse through a queue of error flags that is read one flag at a time with
//! `glGetError`. This crate turns those raw values into [`ErrorCode`]s, describes them, and
//! provides the usual polling helpers on top of any [`ErrorSource`]: the bindings generated in
//! [`gl`], a `glow::Context`, or anything else that can answer `glGetError`.
//!
//! ```ignore
//! let gl = glerror::gl::Gl::load_with(|symbol| device.get_proc_address(symbol));
//!
//! glerror::clear_errors(&gl);
//! unsafe { gl.BindTexture(gl::TEXTURE_2D, texture) };
//! if let Some(error) = glerror::get_error(&gl) {
//!     log::error!("glBindTexture failed: {}", error);
//! }
//! ```

pub mod error;
pub use crate::error::{describe, ErrorCode};

mod info;
pub use crate::info::GLApi;

#[macro_use]
pub mod macros;

mod reporter;
pub use crate::reporter::{check, clear_errors, errors, get_error, Errors};

mod source;
pub use crate::source::ErrorSource;

/// OpenGL bindings generated by `gl_generator`.
#[allow(non_upper_case_globals, clippy::all)]
pub mod gl {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));

    // The GLES registry names its struct after the API.
    #[cfg(gles)]
    pub use self::Gles2 as Gl;
}
