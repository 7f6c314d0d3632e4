use std::{ffi::c_void, os::raw::c_char};

use crate::model::mods::Mods;

use super::{
    free_handle, guard, handle_mut, handle_ref, mode_arg, str_arg, write_handle, write_out,
    write_string, RosuPpError,
};

/// Create an empty set of mods for the given mode.
///
/// # Safety
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_new(mode: u32, out: *mut *mut c_void) -> RosuPpError {
    guard(|| write_handle(out, Mods::new(mode_arg(mode)?)))
}

/// Parse mods from acronyms such as `"HDHR"` or `"hd,dt"`.
///
/// # Safety
/// - `acronyms` must be a valid, NUL-terminated UTF-8 string.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_from_acronyms(
    acronyms: *const c_char,
    mode: u32,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let mods = Mods::from_acronyms(str_arg(acronyms)?, mode_arg(mode)?)?;

        write_handle(out, mods)
    })
}

/// Create mods from legacy bits.
///
/// # Safety
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_from_bits(
    bits: u32,
    mode: u32,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| write_handle(out, Mods::from_bits(bits, mode_arg(mode)?)))
}

/// Deserialize mods from a JSON list.
///
/// # Safety
/// - `json` must be a valid, NUL-terminated UTF-8 string.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_from_json(
    json: *const c_char,
    mode: u32,
    deny_unknown_fields: bool,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let mods = Mods::from_json(str_arg(json)?, mode_arg(mode)?, deny_unknown_fields)?;

        write_handle(out, mods)
    })
}

/// Create an independent copy of mods.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_clone(mods: *const c_void, out: *mut *mut c_void) -> RosuPpError {
    guard(|| write_handle(out, handle_ref::<Mods>(mods)?.clone()))
}

/// Free mods created through `rosu_pp_mods_*`.
///
/// # Safety
/// - `mods` must either be `NULL` or a pointer returned by `rosu_pp_mods_*`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_free(mods: *mut c_void) {
    free_handle::<Mods>(mods);
}

/// Insert a mod by its acronym.
///
/// `out_inserted` is `false` if the mod is invalid for the mode or already
/// contained.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
/// - `acronym` must be a valid, NUL-terminated UTF-8 string.
/// - `out_inserted` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_insert(
    mods: *mut c_void,
    acronym: *const c_char,
    out_inserted: *mut bool,
) -> RosuPpError {
    guard(|| {
        let mods = handle_mut::<Mods>(mods)?;
        let acronym = str_arg(acronym)?;

        write_out(out_inserted, mods.insert(acronym))
    })
}

/// Insert a mod given as JSON object.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
/// - `json` must be a valid, NUL-terminated UTF-8 string.
/// - `out_inserted` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_insert_json(
    mods: *mut c_void,
    json: *const c_char,
    deny_unknown_fields: bool,
    out_inserted: *mut bool,
) -> RosuPpError {
    guard(|| {
        let mods = handle_mut::<Mods>(mods)?;
        let inserted = mods.insert_json(str_arg(json)?, deny_unknown_fields)?;

        write_out(out_inserted, inserted)
    })
}

/// Check whether a mod is contained.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
/// - `acronym` must be a valid, NUL-terminated UTF-8 string.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_contains(
    mods: *const c_void,
    acronym: *const c_char,
    out: *mut bool,
) -> RosuPpError {
    guard(|| {
        let mods = handle_ref::<Mods>(mods)?;

        write_out(out, mods.contains(str_arg(acronym)?))
    })
}

/// Remove all mods.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_clear(mods: *mut c_void) -> RosuPpError {
    guard(|| {
        handle_mut::<Mods>(mods)?.clear();

        Ok(RosuPpError::Ok)
    })
}

/// Remove all mods that are unknown for the mode.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_remove_unknown(mods: *mut c_void) -> RosuPpError {
    guard(|| {
        handle_mut::<Mods>(mods)?.remove_unknown_mods();

        Ok(RosuPpError::Ok)
    })
}

/// Remove incompatible and redundant mods.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_sanitize(mods: *mut c_void) -> RosuPpError {
    guard(|| {
        handle_mut::<Mods>(mods)?.sanitize();

        Ok(RosuPpError::Ok)
    })
}

/// Get the legacy bits of mods.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_bits(mods: *const c_void, out: *mut u32) -> RosuPpError {
    guard(|| write_out(out, handle_ref::<Mods>(mods)?.bits()))
}

/// Get the amount of mods.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_len(mods: *const c_void, out: *mut usize) -> RosuPpError {
    guard(|| write_out(out, handle_ref::<Mods>(mods)?.len()))
}

/// Get the clock rate of mods.
///
/// `out_has_value` is `false` if the clock rate is variable.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
/// - `out` and `out_has_value` must be valid pointers to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_clock_rate(
    mods: *const c_void,
    out: *mut f64,
    out_has_value: *mut bool,
) -> RosuPpError {
    guard(|| {
        let clock_rate = handle_ref::<Mods>(mods)?.clock_rate();

        write_out(out, clock_rate.unwrap_or(1.0))?;
        write_out(out_has_value, clock_rate.is_some())
    })
}

/// Serialize mods to JSON.
///
/// The string must be released through `rosu_pp_string_free`.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_json(mods: *const c_void, out: *mut *mut c_char) -> RosuPpError {
    guard(|| write_string(out, handle_ref::<Mods>(mods)?.json()?))
}

/// All acronyms of mods concatenated.
///
/// The string must be released through `rosu_pp_string_free`.
///
/// # Safety
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_mods_acronyms(
    mods: *const c_void,
    out: *mut *mut c_char,
) -> RosuPpError {
    guard(|| write_string(out, handle_ref::<Mods>(mods)?.acronyms()))
}
