use std::{ffi::c_void, os::raw::c_char};

use crate::model::{
    beatmap::{Beatmap, TooSuspicious},
    hit_object::HitObject,
    mods::Mods,
};

use super::{
    free_handle, guard, handle_mut, handle_ref, mode_arg, str_arg, write_handle, write_out,
    RosuPpError,
};

/// Reason why a beatmap was flagged as suspicious.
#[repr(C)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RosuPpSuspicion {
    None = 0,
    Density = 1,
    Length = 2,
    ObjectCount = 3,
    RedFlag = 4,
    SliderPositions = 5,
    SliderRepeats = 6,
}

impl From<TooSuspicious> for RosuPpSuspicion {
    fn from(sus: TooSuspicious) -> Self {
        match sus {
            TooSuspicious::Density => Self::Density,
            TooSuspicious::Length => Self::Length,
            TooSuspicious::ObjectCount => Self::ObjectCount,
            TooSuspicious::RedFlag => Self::RedFlag,
            TooSuspicious::SliderPositions => Self::SliderPositions,
            TooSuspicious::SliderRepeats => Self::SliderRepeats,
        }
    }
}

/// Parse a beatmap from a `.osu` file path.
///
/// # Safety
/// - `path` must be a valid, NUL-terminated UTF-8 string.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_from_path(
    path: *const c_char,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let path = str_arg(path)?;
        let map = Beatmap::from_path(path)?;

        write_handle(out, map)
    })
}

/// Parse a beatmap from an in-memory `.osu` file.
///
/// # Safety
/// - If `len != 0`, `bytes` must be valid for reads of `len` bytes.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_from_bytes(
    bytes: *const u8,
    len: usize,
    out: *mut *mut c_void,
) -> RosuPpError {
    if bytes.is_null() && len != 0 {
        return RosuPpError::NullPointer;
    }

    guard(|| {
        let bytes = if len == 0 {
            &[]
        } else {
            std::slice::from_raw_parts(bytes, len)
        };

        let map = Beatmap::from_bytes(bytes)?;

        write_handle(out, map)
    })
}

/// Create an independent copy of a beatmap.
///
/// # Safety
/// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_clone(
    map: *const c_void,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let map = handle_ref::<Beatmap>(map)?;

        write_handle(out, map.clone())
    })
}

/// Free a beatmap created through `rosu_pp_beatmap_from_*` or
/// `rosu_pp_beatmap_clone`.
///
/// # Safety
/// - `map` must either be `NULL` or a pointer returned by one of the functions above.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_free(map: *mut c_void) {
    free_handle::<Beatmap>(map);
}

/// Convert a beatmap to the given mode.
///
/// `out_converted` is `false` if the map cannot be converted to the mode,
/// in which case the map stays untouched. `mods` may be `NULL`.
///
/// # Safety
/// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `mods` must either be `NULL` or a valid pointer returned by `rosu_pp_mods_*`.
/// - `out_converted` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_convert(
    map: *mut c_void,
    mode: u32,
    mods: *const c_void,
    out_converted: *mut bool,
) -> RosuPpError {
    guard(|| {
        let map = handle_mut::<Beatmap>(map)?;
        let mode = mode_arg(mode)?;

        let converted = if mods.is_null() {
            map.convert(mode, &Mods::new(mode))
        } else {
            map.convert(mode, handle_ref::<Mods>(mods)?)
        };

        write_out(out_converted, converted.is_ok())
    })
}

/// Check whether a beatmap appears too suspicious for further calculation.
///
/// Returns `RosuPpError::TooSuspicious` if it does.
///
/// # Safety
/// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_check_suspicion(
    map: *const c_void,
    out: *mut RosuPpSuspicion,
) -> RosuPpError {
    guard(|| {
        let map = handle_ref::<Beatmap>(map)?;

        match map.check_suspicion() {
            Ok(()) => write_out(out, RosuPpSuspicion::None),
            Err(sus) => {
                write_out(out, RosuPpSuspicion::from(sus))?;

                Ok(RosuPpError::TooSuspicious)
            }
        }
    })
}

/// Get the hit object at the given index.
///
/// Returns `RosuPpError::EndOfStream` if the index is out of bounds.
///
/// # Safety
/// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_hit_object(
    map: *const c_void,
    idx: usize,
    out: *mut HitObject,
) -> RosuPpError {
    guard(|| {
        let map = handle_ref::<Beatmap>(map)?;

        match map.hit_object(idx) {
            Some(h) => write_out(out, h),
            None => Ok(RosuPpError::EndOfStream),
        }
    })
}

macro_rules! beatmap_getters {
    ( $( $( #[$meta:meta] )* $fn_name:ident => $method:ident: $ty:ty; )* ) => {
        $(
            $( #[$meta] )*
            ///
            /// # Safety
            /// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
            /// - `out` must be a valid pointer to writable memory.
            #[no_mangle]
            pub unsafe extern "C" fn $fn_name(map: *const c_void, out: *mut $ty) -> RosuPpError {
                guard(|| {
                    let map = handle_ref::<Beatmap>(map)?;

                    write_out(out, map.$method())
                })
            }
        )*
    };
}

beatmap_getters! {
    /// Get a beatmap's mode.
    rosu_pp_beatmap_mode => mode: crate::model::mode::Mode;
    /// Get a beatmap's beats per minute.
    rosu_pp_beatmap_bpm => bpm: f64;
    /// Get the total break time of a beatmap in milliseconds.
    rosu_pp_beatmap_total_break_time => total_break_time: f64;
    /// Get a beatmap's file format version.
    rosu_pp_beatmap_version => version: i32;
    /// Whether the beatmap was converted from osu!standard.
    rosu_pp_beatmap_is_convert => is_convert: bool;
    /// Get a beatmap's stack leniency.
    rosu_pp_beatmap_stack_leniency => stack_leniency: f32;
    /// Get a beatmap's approach rate.
    rosu_pp_beatmap_ar => ar: f32;
    /// Get a beatmap's circle size.
    rosu_pp_beatmap_cs => cs: f32;
    /// Get a beatmap's drain rate.
    rosu_pp_beatmap_hp => hp: f32;
    /// Get a beatmap's overall difficulty.
    rosu_pp_beatmap_od => od: f32;
    /// Get a beatmap's slider multiplier.
    rosu_pp_beatmap_slider_multiplier => slider_multiplier: f64;
    /// Get a beatmap's slider tick rate.
    rosu_pp_beatmap_slider_tick_rate => slider_tick_rate: f64;
    /// Get the amount of hit objects of a beatmap.
    rosu_pp_beatmap_n_objects => n_objects: usize;
}
