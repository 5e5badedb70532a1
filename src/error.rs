// glerror/src/error.rs
//
//! The OpenGL error flags and their descriptions.

use crate::gl;
use crate::gl::types::GLenum;

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

/// An OpenGL error flag, as reported by `glGetError`.
///
/// The seven flags defined by the GL and GLES specifications get their own variants. Anything else
/// a driver hands back is kept verbatim in `Unknown`, so no information is lost on the way to the
/// caller.
#[derive(Clone, Copy, Debug, thiserror::Error)]
pub enum ErrorCode {
    /// `GL_INVALID_ENUM`: an enumeration parameter is not legal for the function.
    #[error("unacceptable value for enumerated argument")]
    InvalidEnum,
    /// `GL_INVALID_VALUE`: a value parameter is not legal for the function.
    #[error("numeric argument is out of range")]
    InvalidValue,
    /// `GL_INVALID_OPERATION`: the current state is not legal for the parameters given.
    #[error("operation is not allowed")]
    InvalidOperation,
    /// `GL_STACK_OVERFLOW`: a push would overflow an internal stack.
    #[error("internal stack overflow")]
    StackOverflow,
    /// `GL_STACK_UNDERFLOW`: a pop would underflow an internal stack.
    #[error("internal stack underflow")]
    StackUnderflow,
    /// `GL_OUT_OF_MEMORY`: the driver could not allocate enough memory.
    ///
    /// The GL state is undefined after this error.
    #[error("out of memory")]
    OutOfMemory,
    /// `GL_INVALID_FRAMEBUFFER_OPERATION`: the bound framebuffer is not complete.
    #[error("incomplete framebuffer object")]
    InvalidFramebufferOperation,
    /// A flag outside the set above, such as a vendor or extension error.
    ///
    /// A named value wrapped here still compares, hashes and describes as the named flag.
    #[error("{}", describe(*.0))]
    Unknown(GLenum),
}

impl ErrorCode {
    /// Every named error flag, in ascending order of raw value.
    pub const NAMED: [ErrorCode; 7] = [
        ErrorCode::InvalidEnum,
        ErrorCode::InvalidValue,
        ErrorCode::InvalidOperation,
        ErrorCode::StackOverflow,
        ErrorCode::StackUnderflow,
        ErrorCode::OutOfMemory,
        ErrorCode::InvalidFramebufferOperation,
    ];

    /// Converts a raw value from `glGetError` into an error code.
    ///
    /// Returns `None` for `GL_NO_ERROR`.
    pub fn from_raw(raw: GLenum) -> Option<ErrorCode> {
        let code = match raw {
            gl::NO_ERROR => return None,
            gl::INVALID_ENUM => ErrorCode::InvalidEnum,
            gl::INVALID_VALUE => ErrorCode::InvalidValue,
            gl::INVALID_OPERATION => ErrorCode::InvalidOperation,
            gl::STACK_OVERFLOW => ErrorCode::StackOverflow,
            gl::STACK_UNDERFLOW => ErrorCode::StackUnderflow,
            gl::OUT_OF_MEMORY => ErrorCode::OutOfMemory,
            gl::INVALID_FRAMEBUFFER_OPERATION => ErrorCode::InvalidFramebufferOperation,
            other => ErrorCode::Unknown(other),
        };
        Some(code)
    }

    /// Returns the raw GL value of this error code.
    pub fn to_raw(self) -> GLenum {
        match self {
            ErrorCode::InvalidEnum => gl::INVALID_ENUM,
            ErrorCode::InvalidValue => gl::INVALID_VALUE,
            ErrorCode::InvalidOperation => gl::INVALID_OPERATION,
            ErrorCode::StackOverflow => gl::STACK_OVERFLOW,
            ErrorCode::StackUnderflow => gl::STACK_UNDERFLOW,
            ErrorCode::OutOfMemory => gl::OUT_OF_MEMORY,
            ErrorCode::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
            ErrorCode::Unknown(raw) => raw,
        }
    }

    // Folds `Unknown` wrapping a named value back onto the named variant.
    fn normalize(self) -> ErrorCode {
        match self {
            ErrorCode::Unknown(raw) => ErrorCode::from_raw(raw).unwrap_or(self),
            named => named,
        }
    }

    /// The symbolic GL name of this flag, e.g. `GL_INVALID_ENUM`.
    pub fn name(self) -> Option<&'static str> {
        match self.normalize() {
            ErrorCode::InvalidEnum => Some("GL_INVALID_ENUM"),
            ErrorCode::InvalidValue => Some("GL_INVALID_VALUE"),
            ErrorCode::InvalidOperation => Some("GL_INVALID_OPERATION"),
            ErrorCode::StackOverflow => Some("GL_STACK_OVERFLOW"),
            ErrorCode::StackUnderflow => Some("GL_STACK_UNDERFLOW"),
            ErrorCode::OutOfMemory => Some("GL_OUT_OF_MEMORY"),
            ErrorCode::InvalidFramebufferOperation => Some("GL_INVALID_FRAMEBUFFER_OPERATION"),
            ErrorCode::Unknown(_) => None,
        }
    }

    /// A human-readable description of this flag.
    ///
    /// Named flags borrow a fixed string; unknown ones render their raw value in hex.
    pub fn description(self) -> Cow<'static, str> {
        match self.normalize() {
            ErrorCode::InvalidEnum => "unacceptable value for enumerated argument".into(),
            ErrorCode::InvalidValue => "numeric argument is out of range".into(),
            ErrorCode::InvalidOperation => "operation is not allowed".into(),
            ErrorCode::StackOverflow => "internal stack overflow".into(),
            ErrorCode::StackUnderflow => "internal stack underflow".into(),
            ErrorCode::OutOfMemory => "out of memory".into(),
            ErrorCode::InvalidFramebufferOperation => "incomplete framebuffer object".into(),
            ErrorCode::Unknown(raw) => format!("{:#x}", raw).into(),
        }
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &ErrorCode) -> bool {
        self.to_raw() == other.to_raw()
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_raw().hash(state);
    }
}

impl From<ErrorCode> for GLenum {
    #[inline]
    fn from(code: ErrorCode) -> GLenum {
        code.to_raw()
    }
}

/// Describes any raw GL error value.
///
/// This never fails: values that aren't one of the named flags, `GL_NO_ERROR` included, come back
/// as hex, e.g. `0x9999`.
pub fn describe(raw: GLenum) -> Cow<'static, str> {
    match ErrorCode::from_raw(raw) {
        Some(code) => code.description(),
        None => format!("{:#x}", raw).into(),
    }
}
