// glerror/src/reporter.rs
//
//! Polling the driver for error flags.
//!
//! A GL implementation may record several error flags at once (distributed implementations keep
//! one per part), but `glGetError` only reports one per call. Getting back to a clean state
//! therefore means polling until the driver says `GL_NO_ERROR`.

use crate::error::ErrorCode;
use crate::source::ErrorSource;

use log::{debug, warn};
use std::fmt;
use std::iter::FusedIterator;

/// Returns the next pending error, or `None` if there is none.
///
/// Only one flag is taken from the driver. Any others stay queued.
pub fn get_error<S>(source: &S) -> Option<ErrorCode>
where
    S: ErrorSource + ?Sized,
{
    ErrorCode::from_raw(source.next_error_flag())
}

/// Discards every pending error flag.
///
/// Returns how many flags were discarded.
pub fn clear_errors<S>(source: &S) -> usize
where
    S: ErrorSource + ?Sized,
{
    let discarded = errors(source).count();
    if discarded > 0 {
        debug!("cleared {} pending GL error(s)", discarded);
    }
    discarded
}

/// Takes the next pending error as a `Result`, for use with `?`.
pub fn check<S>(source: &S) -> Result<(), ErrorCode>
where
    S: ErrorSource + ?Sized,
{
    match get_error(source) {
        None => Ok(()),
        Some(code) => {
            warn!("GL error {:#x}: {}", code.to_raw(), code);
            Err(code)
        }
    }
}

/// Returns a lazy iterator over the pending errors.
pub fn errors<S>(source: &S) -> Errors<'_, S>
where
    S: ErrorSource + ?Sized,
{
    Errors {
        source,
        drained: false,
    }
}

/// Yields pending error flags until the driver reports `GL_NO_ERROR`.
///
/// Each step removes a flag from the driver, so the iterator can't be rewound. After it first
/// returns `None` it never touches the driver again.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Errors<'a, S>
where
    S: ErrorSource + ?Sized,
{
    source: &'a S,
    drained: bool,
}

impl<'a, S> Iterator for Errors<'a, S>
where
    S: ErrorSource + ?Sized,
{
    type Item = ErrorCode;

    fn next(&mut self) -> Option<ErrorCode> {
        if self.drained {
            return None;
        }
        match get_error(self.source) {
            Some(code) => {
                debug!("pending GL error {:#x}: {}", code.to_raw(), code);
                Some(code)
            }
            None => {
                self.drained = true;
                None
            }
        }
    }
}

impl<'a, S> fmt::Debug for Errors<'a, S>
where
    S: ErrorSource + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Errors")
            .field("drained", &self.drained)
            .finish_non_exhaustive()
    }
}

impl<'a, S> FusedIterator for Errors<'a, S> where S: ErrorSource + ?Sized {}
