use std::{ffi::c_void, os::raw::c_char};

use crate::{
    any::{Difficulty, DifficultyAttributes},
    model::{beatmap::Beatmap, mode::Mode, mods::Mods},
};

use super::{
    mode_attributes::{
        RosuPpCatchDifficultyAttributes, RosuPpManiaDifficultyAttributes,
        RosuPpOsuDifficultyAttributes, RosuPpTaikoDifficultyAttributes,
    },
    free_handle, guard, handle_mut, handle_ref, mode_arg, str_arg, write_handle, write_out,
    write_string, RosuPpError,
};

/// Values of difficulty attributes.
///
/// Exactly one of the `has_*` flags is set, matching `mode`, and only that
/// mode's payload is populated.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
pub struct RosuPpDifficultyAttributes {
    pub mode: Mode,
    pub stars: f64,
    pub max_combo: u32,
    pub osu: RosuPpOsuDifficultyAttributes,
    pub has_osu: bool,
    pub taiko: RosuPpTaikoDifficultyAttributes,
    pub has_taiko: bool,
    pub catch: RosuPpCatchDifficultyAttributes,
    pub has_catch: bool,
    pub mania: RosuPpManiaDifficultyAttributes,
    pub has_mania: bool,
}

impl From<&DifficultyAttributes> for RosuPpDifficultyAttributes {
    fn from(attrs: &DifficultyAttributes) -> Self {
        let mut values = Self {
            mode: attrs.mode(),
            stars: attrs.stars(),
            max_combo: attrs.max_combo(),
            ..Self::default()
        };

        match attrs {
            DifficultyAttributes::Osu(attrs) => {
                values.osu = attrs.into();
                values.has_osu = true;
            }
            DifficultyAttributes::Taiko(attrs) => {
                values.taiko = attrs.into();
                values.has_taiko = true;
            }
            DifficultyAttributes::Catch(attrs) => {
                values.catch = attrs.into();
                values.has_catch = true;
            }
            DifficultyAttributes::Mania(attrs) => {
                values.mania = attrs.into();
                values.has_mania = true;
            }
        }

        values
    }
}

/// Create a new difficulty calculator.
///
/// # Safety
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_new(out: *mut *mut c_void) -> RosuPpError {
    guard(|| write_handle(out, Difficulty::new()))
}

/// Free a difficulty calculator created through `rosu_pp_difficulty_new`.
///
/// # Safety
/// - `difficulty` must either be `NULL` or a pointer returned by `rosu_pp_difficulty_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_free(difficulty: *mut c_void) {
    free_handle::<Difficulty>(difficulty);
}

/// Calculate for the given mode instead of the map's mode.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_mode(difficulty: *mut c_void, mode: u32) -> RosuPpError {
    guard(|| {
        handle_mut::<Difficulty>(difficulty)?.mode(mode_arg(mode)?);

        Ok(RosuPpError::Ok)
    })
}

/// Specify mods through legacy bits.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_mods_bits(difficulty: *mut c_void, bits: u32) -> RosuPpError {
    guard(|| {
        handle_mut::<Difficulty>(difficulty)?.mods(bits);

        Ok(RosuPpError::Ok)
    })
}

/// Specify mods through acronyms.
///
/// On error, the previous mods are kept.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
/// - `acronyms` must be a valid, NUL-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_mods_acronyms(
    difficulty: *mut c_void,
    acronyms: *const c_char,
) -> RosuPpError {
    guard(|| {
        let acronyms = str_arg(acronyms)?;
        handle_mut::<Difficulty>(difficulty)?.mods_acronyms(acronyms)?;

        Ok(RosuPpError::Ok)
    })
}

/// Specify mods through a mods handle.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_mods(
    difficulty: *mut c_void,
    mods: *const c_void,
) -> RosuPpError {
    guard(|| {
        let mods = handle_ref::<Mods>(mods)?;
        handle_mut::<Difficulty>(difficulty)?.mods(mods);

        Ok(RosuPpError::Ok)
    })
}

/// Amount of passed objects for partial plays.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_passed_objects(
    difficulty: *mut c_void,
    passed_objects: u32,
) -> RosuPpError {
    guard(|| {
        handle_mut::<Difficulty>(difficulty)?.passed_objects(passed_objects);

        Ok(RosuPpError::Ok)
    })
}

/// Specify a custom clock rate between 0.01 and 100.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_clock_rate(
    difficulty: *mut c_void,
    clock_rate: f64,
) -> RosuPpError {
    guard(|| {
        handle_mut::<Difficulty>(difficulty)?.clock_rate(clock_rate)?;

        Ok(RosuPpError::Ok)
    })
}

macro_rules! attribute_setters {
    ( $( $fn_name:ident => $method:ident, )* ) => {
        $(
            #[doc = concat!("Override the `", stringify!($method), "` value between -20 and 20.")]
            ///
            /// # Safety
            /// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
            #[no_mangle]
            pub unsafe extern "C" fn $fn_name(
                difficulty: *mut c_void,
                value: f32,
                with_mods: bool,
            ) -> RosuPpError {
                guard(|| {
                    handle_mut::<Difficulty>(difficulty)?.$method(value, with_mods)?;

                    Ok(RosuPpError::Ok)
                })
            }
        )*
    };
}

attribute_setters! {
    rosu_pp_difficulty_ar => ar,
    rosu_pp_difficulty_cs => cs,
    rosu_pp_difficulty_hp => hp,
    rosu_pp_difficulty_od => od,
}

/// Adjust patterns as if the HR mod is enabled.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_hardrock_offsets(
    difficulty: *mut c_void,
    hardrock_offsets: bool,
) -> RosuPpError {
    guard(|| {
        handle_mut::<Difficulty>(difficulty)?.hardrock_offsets(hardrock_offsets);

        Ok(RosuPpError::Ok)
    })
}

/// Whether the calculated attributes belong to an osu!lazer or osu!stable score.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_lazer(difficulty: *mut c_void, lazer: bool) -> RosuPpError {
    guard(|| {
        handle_mut::<Difficulty>(difficulty)?.lazer(lazer);

        Ok(RosuPpError::Ok)
    })
}

/// Get the clock rate that will be used.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_get_clock_rate(
    difficulty: *const c_void,
    out: *mut f64,
) -> RosuPpError {
    guard(|| write_out(out, handle_ref::<Difficulty>(difficulty)?.get_clock_rate()))
}

/// Calculate the difficulty attributes of a beatmap.
///
/// The attributes must be released through `rosu_pp_difficulty_attributes_free`.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
/// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_calculate(
    difficulty: *const c_void,
    map: *const c_void,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let difficulty = handle_ref::<Difficulty>(difficulty)?;
        let map = handle_ref::<Beatmap>(map)?;

        write_handle(out, difficulty.calculate(map)?)
    })
}

/// Free difficulty attributes.
///
/// # Safety
/// - `attrs` must either be `NULL` or a pointer to difficulty attributes
///   returned by a `rosu_pp_*` function.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_attributes_free(attrs: *mut c_void) {
    free_handle::<DifficultyAttributes>(attrs);
}

/// Extract the values of difficulty attributes.
///
/// # Safety
/// - `attrs` must be a valid pointer to difficulty attributes.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_difficulty_attributes_values(
    attrs: *const c_void,
    out: *mut RosuPpDifficultyAttributes,
) -> RosuPpError {
    guard(|| {
        let attrs = handle_ref::<DifficultyAttributes>(attrs)?;

        write_out(out, attrs.into())
    })
}

/// Human-readable representation of difficulty attributes.
///
/// The string must be released through `rosu_pp_string_free`.
///
/// # Safety
/// - `attrs` must be a valid pointer to difficulty attributes.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_debug_difficulty_attributes(
    attrs: *const c_void,
    out: *mut *mut c_char,
) -> RosuPpError {
    guard(|| write_string(out, handle_ref::<DifficultyAttributes>(attrs)?.debug_string()))
}
