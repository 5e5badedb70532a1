// glerror/src/macros.rs
//
//! Assertion helpers.

/// Asserts, in debug builds only, that no GL error is pending.
///
/// ```ignore
/// gl.BindFramebuffer(gl::FRAMEBUFFER, framebuffer_object);
/// debug_assert_no_gl_error!(gl);
/// ```
///
/// One flag is taken from the driver when the assertion runs. In release builds the source is
/// not polled at all.
#[macro_export]
macro_rules! debug_assert_no_gl_error {
    ($source:expr) => {
        if cfg!(debug_assertions) {
            if let Some(code) = $crate::get_error(&$source) {
                panic!("unexpected GL error {:#x}: {}", code.to_raw(), code);
            }
        }
    };
}
