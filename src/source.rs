// glerror/src/source.rs
//
//! Where error flags come from.

use crate::gl::types::GLenum;
use crate::gl::Gl;

use std::rc::Rc;
use std::sync::Arc;

/// Something that can be asked for the next pending GL error flag.
///
/// This is the driver's `glGetError`. Each call removes the flag it returns from the driver's
/// queue, and `GL_NO_ERROR` means the queue is empty. Implementations must eventually return
/// `GL_NO_ERROR` when polled repeatedly.
///
/// The GL requires a current context on the calling thread. Making one current is up to the
/// caller.
pub trait ErrorSource {
    fn next_error_flag(&self) -> GLenum;
}

impl ErrorSource for Gl {
    #[inline]
    fn next_error_flag(&self) -> GLenum {
        unsafe { self.GetError() }
    }
}

#[cfg(feature = "glow")]
impl ErrorSource for glow::Context {
    #[inline]
    fn next_error_flag(&self) -> GLenum {
        use glow::HasContext;
        unsafe { self.get_error() }
    }
}

impl<S> ErrorSource for &S
where
    S: ErrorSource + ?Sized,
{
    #[inline]
    fn next_error_flag(&self) -> GLenum {
        (**self).next_error_flag()
    }
}

impl<S> ErrorSource for Box<S>
where
    S: ErrorSource + ?Sized,
{
    #[inline]
    fn next_error_flag(&self) -> GLenum {
        (**self).next_error_flag()
    }
}

impl<S> ErrorSource for Rc<S>
where
    S: ErrorSource + ?Sized,
{
    #[inline]
    fn next_error_flag(&self) -> GLenum {
        (**self).next_error_flag()
    }
}

impl<S> ErrorSource for Arc<S>
where
    S: ErrorSource + ?Sized,
{
    #[inline]
    fn next_error_flag(&self) -> GLenum {
        (**self).next_error_flag()
    }
}
