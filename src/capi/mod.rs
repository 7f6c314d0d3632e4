//! Every handle crossing this boundary is created through a `rosu_pp_*_new`
//! style function and must be released exactly once through the matching
//! `rosu_pp_*_free` function. Fallible functions return a [`RosuPpError`] and
//! write their result through an out-pointer.

use std::{
    any::Any,
    ffi::{c_void, CStr, CString},
    os::raw::c_char,
    panic::{catch_unwind, AssertUnwindSafe},
};

use crate::{error::Error, model::mode::Mode};

pub mod attributes;
pub mod beatmap;
pub mod difficulty;
pub mod gradual;
pub mod mode_attributes;
pub mod mods;
pub mod performance;
pub mod score_state;

/// Error codes returned by the C API.
#[repr(C)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RosuPpError {
    Ok = 0,
    NullPointer = 1,
    InvalidUtf8 = 2,
    IoError = 3,
    Panic = 4,
    TooSuspicious = 5,
    EndOfStream = 6,
    InvalidString = 7,
    SerializeError = 8,
    ConvertError = 9,
    OutOfRange = 10,
    Unknown = 255,
}

impl From<&Error> for RosuPpError {
    fn from(err: &Error) -> Self {
        match err {
            Error::Null => Self::NullPointer,
            Error::Panic(_) => Self::Panic,
            Error::Io(_) => Self::IoError,
            Error::Utf8(_) => Self::InvalidUtf8,
            Error::InvalidString(_) => Self::InvalidString,
            Error::Serialize(_) => Self::SerializeError,
            Error::Convert(_) | Error::ModeMismatch { .. } => Self::ConvertError,
            Error::OutOfRange { .. } => Self::OutOfRange,
            Error::TooSuspicious(_) => Self::TooSuspicious,
        }
    }
}

impl From<Error> for RosuPpError {
    fn from(err: Error) -> Self {
        tracing::debug!(category = ?err.category(), "{err}");

        Self::from(&err)
    }
}

/// Convert an error code into a static, NUL-terminated string.
#[no_mangle]
pub extern "C" fn rosu_pp_error_str(err: i32) -> *const c_char {
    match err {
        x if x == RosuPpError::Ok as i32 => b"Ok\0".as_ptr(),
        x if x == RosuPpError::NullPointer as i32 => b"NullPointer\0".as_ptr(),
        x if x == RosuPpError::InvalidUtf8 as i32 => b"InvalidUtf8\0".as_ptr(),
        x if x == RosuPpError::IoError as i32 => b"IoError\0".as_ptr(),
        x if x == RosuPpError::Panic as i32 => b"Panic\0".as_ptr(),
        x if x == RosuPpError::TooSuspicious as i32 => b"TooSuspicious\0".as_ptr(),
        x if x == RosuPpError::EndOfStream as i32 => b"EndOfStream\0".as_ptr(),
        x if x == RosuPpError::InvalidString as i32 => b"InvalidString\0".as_ptr(),
        x if x == RosuPpError::SerializeError as i32 => b"SerializeError\0".as_ptr(),
        x if x == RosuPpError::ConvertError as i32 => b"ConvertError\0".as_ptr(),
        x if x == RosuPpError::OutOfRange as i32 => b"OutOfRange\0".as_ptr(),
        _ => b"Unknown\0".as_ptr(),
    }
    .cast::<c_char>()
}

/// Free a string created by this library.
///
/// # Safety
/// - `s` must either be `NULL` or a string returned by a `rosu_pp_*` function
///   that was not freed yet.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }

    let _ = catch_unwind(AssertUnwindSafe(|| drop(CString::from_raw(s))));
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Run `f` while catching panics so they never unwind into foreign code.
pub(crate) fn guard<F>(f: F) -> RosuPpError
where
    F: FnOnce() -> Result<RosuPpError, RosuPpError>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(code) | Err(code)) => code,
        Err(payload) => {
            tracing::error!("panicked at the C boundary: {}", panic_message(&*payload));

            RosuPpError::Panic
        }
    }
}

/// Move `value` onto the heap and write the resulting handle into `out`.
pub(crate) unsafe fn write_handle<T>(out: *mut *mut c_void, value: T) -> Result<RosuPpError, RosuPpError> {
    if out.is_null() {
        return Err(RosuPpError::NullPointer);
    }

    out.write(Box::into_raw(Box::new(value)).cast::<c_void>());

    Ok(RosuPpError::Ok)
}

pub(crate) unsafe fn write_out<T>(out: *mut T, value: T) -> Result<RosuPpError, RosuPpError> {
    if out.is_null() {
        return Err(RosuPpError::NullPointer);
    }

    out.write(value);

    Ok(RosuPpError::Ok)
}

pub(crate) unsafe fn write_string(out: *mut *mut c_char, s: String) -> Result<RosuPpError, RosuPpError> {
    let s = CString::new(s).map_err(|_| RosuPpError::InvalidString)?;

    write_out(out, s.into_raw())
}

/// Drop a handle created by [`write_handle`].
pub(crate) unsafe fn free_handle<T>(handle: *mut c_void) {
    if handle.is_null() {
        return;
    }

    let _ = catch_unwind(AssertUnwindSafe(|| drop(Box::from_raw(handle.cast::<T>()))));
}

pub(crate) unsafe fn handle_ref<'a, T>(handle: *const c_void) -> Result<&'a T, RosuPpError> {
    handle.cast::<T>().as_ref().ok_or(RosuPpError::NullPointer)
}

pub(crate) unsafe fn handle_mut<'a, T>(handle: *mut c_void) -> Result<&'a mut T, RosuPpError> {
    handle.cast::<T>().as_mut().ok_or(RosuPpError::NullPointer)
}

pub(crate) unsafe fn str_arg<'a>(s: *const c_char) -> Result<&'a str, RosuPpError> {
    if s.is_null() {
        return Err(RosuPpError::NullPointer);
    }

    CStr::from_ptr(s).to_str().map_err(|_| RosuPpError::InvalidUtf8)
}

pub(crate) fn mode_arg(mode: u32) -> Result<Mode, RosuPpError> {
    Mode::try_from(mode).map_err(RosuPpError::from)
}

#[cfg(test)]
mod tests {
    use std::ffi::CStr;

    use super::*;

    #[test]
    fn error_str() {
        let s = unsafe { CStr::from_ptr(rosu_pp_error_str(RosuPpError::ConvertError as i32)) };
        assert_eq!(s.to_str().unwrap(), "ConvertError");

        let s = unsafe { CStr::from_ptr(rosu_pp_error_str(42)) };
        assert_eq!(s.to_str().unwrap(), "Unknown");
    }

    #[test]
    fn mode_mismatch_is_convert_error() {
        let err = Error::ModeMismatch {
            expected: Mode::Osu,
            actual: Mode::Mania,
        };

        assert_eq!(RosuPpError::from(&err), RosuPpError::ConvertError);
    }

    #[test]
    fn guard_catches_panics() {
        let code = guard(|| panic!("oops"));
        assert_eq!(code, RosuPpError::Panic);

        let code = guard(|| Err(RosuPpError::OutOfRange));
        assert_eq!(code, RosuPpError::OutOfRange);
    }
}
