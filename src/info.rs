// glerror/src/info.rs
//
//! Which GL the generated bindings were built for.

/// The API (OpenGL or OpenGL ES).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GLApi {
    GL,
    GLES,
}

impl GLApi {
    /// The API that the bindings in [`crate::gl`] target on this platform.
    ///
    /// Android and OpenHarmony get GLES 3.2; everything else gets desktop GL 4.5 core. The error
    /// flags are identical in both.
    #[inline]
    pub const fn bindings() -> GLApi {
        if cfg!(gles) {
            GLApi::GLES
        } else {
            GLApi::GL
        }
    }
}
