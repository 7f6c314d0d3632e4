use std::{ffi::c_void, os::raw::c_char};

use crate::{
    any::{Difficulty, DifficultyAttributes, HitResultPriority, Performance, PerformanceAttributes, ScoreState},
    model::{beatmap::Beatmap, mode::Mode, mods::Mods},
};

use super::{
    mode_attributes::{
        RosuPpCatchPerformanceAttributes, RosuPpManiaPerformanceAttributes,
        RosuPpOsuPerformanceAttributes, RosuPpTaikoPerformanceAttributes,
    },
    free_handle, guard, handle_mut, handle_ref, mode_arg, str_arg, write_handle, write_out,
    write_string, RosuPpError,
};

/// Values of performance attributes.
///
/// Exactly one of the `has_*` flags is set, matching `mode`, and only that
/// mode's payload is populated.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
pub struct RosuPpPerformanceAttributes {
    pub mode: Mode,
    pub pp: f64,
    pub stars: f64,
    pub max_combo: u32,
    pub osu: RosuPpOsuPerformanceAttributes,
    pub has_osu: bool,
    pub taiko: RosuPpTaikoPerformanceAttributes,
    pub has_taiko: bool,
    pub catch: RosuPpCatchPerformanceAttributes,
    pub has_catch: bool,
    pub mania: RosuPpManiaPerformanceAttributes,
    pub has_mania: bool,
}

impl From<&PerformanceAttributes> for RosuPpPerformanceAttributes {
    fn from(attrs: &PerformanceAttributes) -> Self {
        let mut values = Self {
            mode: attrs.mode(),
            pp: attrs.pp(),
            stars: attrs.stars(),
            max_combo: attrs.max_combo(),
            ..Self::default()
        };

        match attrs {
            PerformanceAttributes::Osu(attrs) => {
                values.osu = attrs.into();
                values.has_osu = true;
            }
            PerformanceAttributes::Taiko(attrs) => {
                values.taiko = attrs.into();
                values.has_taiko = true;
            }
            PerformanceAttributes::Catch(attrs) => {
                values.catch = attrs.into();
                values.has_catch = true;
            }
            PerformanceAttributes::Mania(attrs) => {
                values.mania = attrs.into();
                values.has_mania = true;
            }
        }

        values
    }
}

fn priority_arg(priority: u32) -> Result<HitResultPriority, RosuPpError> {
    match priority {
        0 => Ok(HitResultPriority::BestCase),
        1 => Ok(HitResultPriority::WorstCase),
        2 => Ok(HitResultPriority::Fastest),
        _ => Err(RosuPpError::OutOfRange),
    }
}

/// Create a new performance calculator.
///
/// # Safety
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_new(out: *mut *mut c_void) -> RosuPpError {
    guard(|| write_handle(out, Performance::new()))
}

/// Free a performance calculator created through `rosu_pp_performance_new`.
///
/// # Safety
/// - `performance` must either be `NULL` or a pointer returned by `rosu_pp_performance_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_free(performance: *mut c_void) {
    free_handle::<Performance>(performance);
}

/// Replace all difficulty settings with those of a difficulty calculator.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_difficulty(
    performance: *mut c_void,
    difficulty: *const c_void,
) -> RosuPpError {
    guard(|| {
        let difficulty = handle_ref::<Difficulty>(difficulty)?.clone();
        handle_mut::<Performance>(performance)?.difficulty(difficulty);

        Ok(RosuPpError::Ok)
    })
}

/// Calculate for the given mode instead of the map's mode.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_mode(performance: *mut c_void, mode: u32) -> RosuPpError {
    guard(|| {
        handle_mut::<Performance>(performance)?.mode(mode_arg(mode)?);

        Ok(RosuPpError::Ok)
    })
}

/// Specify mods through legacy bits.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_mods_bits(
    performance: *mut c_void,
    bits: u32,
) -> RosuPpError {
    guard(|| {
        handle_mut::<Performance>(performance)?.mods(bits);

        Ok(RosuPpError::Ok)
    })
}

/// Specify mods through acronyms.
///
/// On error, the previous mods are kept.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
/// - `acronyms` must be a valid, NUL-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_mods_acronyms(
    performance: *mut c_void,
    acronyms: *const c_char,
) -> RosuPpError {
    guard(|| {
        let acronyms = str_arg(acronyms)?;
        handle_mut::<Performance>(performance)?.mods_acronyms(acronyms)?;

        Ok(RosuPpError::Ok)
    })
}

/// Specify mods through a mods handle.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_mods(
    performance: *mut c_void,
    mods: *const c_void,
) -> RosuPpError {
    guard(|| {
        let mods = handle_ref::<Mods>(mods)?;
        handle_mut::<Performance>(performance)?.mods(mods);

        Ok(RosuPpError::Ok)
    })
}

/// Specify a custom clock rate between 0.01 and 100.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_clock_rate(
    performance: *mut c_void,
    clock_rate: f64,
) -> RosuPpError {
    guard(|| {
        handle_mut::<Performance>(performance)?.clock_rate(clock_rate)?;

        Ok(RosuPpError::Ok)
    })
}

macro_rules! attribute_setters {
    ( $( $fn_name:ident => $method:ident, )* ) => {
        $(
            #[doc = concat!("Override the `", stringify!($method), "` value between -20 and 20.")]
            ///
            /// # Safety
            /// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
            #[no_mangle]
            pub unsafe extern "C" fn $fn_name(
                performance: *mut c_void,
                value: f32,
                with_mods: bool,
            ) -> RosuPpError {
                guard(|| {
                    handle_mut::<Performance>(performance)?.$method(value, with_mods)?;

                    Ok(RosuPpError::Ok)
                })
            }
        )*
    };
}

attribute_setters! {
    rosu_pp_performance_ar => ar,
    rosu_pp_performance_cs => cs,
    rosu_pp_performance_hp => hp,
    rosu_pp_performance_od => od,
}

macro_rules! setters {
    ( $( $fn_name:ident => $method:ident: $ty:ty, )* ) => {
        $(
            #[doc = concat!("Specify the `", stringify!($method), "` value.")]
            ///
            /// # Safety
            /// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
            #[no_mangle]
            pub unsafe extern "C" fn $fn_name(performance: *mut c_void, value: $ty) -> RosuPpError {
                guard(|| {
                    handle_mut::<Performance>(performance)?.$method(value);

                    Ok(RosuPpError::Ok)
                })
            }
        )*
    };
}

setters! {
    rosu_pp_performance_passed_objects => passed_objects: u32,
    rosu_pp_performance_hardrock_offsets => hardrock_offsets: bool,
    rosu_pp_performance_lazer => lazer: bool,
    rosu_pp_performance_combo => combo: u32,
    rosu_pp_performance_misses => misses: u32,
    rosu_pp_performance_large_tick_hits => large_tick_hits: u32,
    rosu_pp_performance_small_tick_hits => small_tick_hits: u32,
    rosu_pp_performance_slider_end_hits => slider_end_hits: u32,
    rosu_pp_performance_n300 => n300: u32,
    rosu_pp_performance_n100 => n100: u32,
    rosu_pp_performance_n50 => n50: u32,
    rosu_pp_performance_n_katu => n_katu: u32,
    rosu_pp_performance_n_geki => n_geki: u32,
}

/// Set the accuracy between 0 and 100.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_accuracy(performance: *mut c_void, acc: f64) -> RosuPpError {
    guard(|| {
        handle_mut::<Performance>(performance)?.accuracy(acc)?;

        Ok(RosuPpError::Ok)
    })
}

/// Specify how hitresults should be generated.
///
/// `0` is best case, `1` worst case, and `2` fastest.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_hitresult_priority(
    performance: *mut c_void,
    priority: u32,
) -> RosuPpError {
    guard(|| {
        let priority = priority_arg(priority)?;
        handle_mut::<Performance>(performance)?.hitresult_priority(priority);

        Ok(RosuPpError::Ok)
    })
}

/// Provide all hitresults through a score state.
///
/// The state takes precedence over all other hitresult values.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
/// - `state` must be a valid pointer to a score state.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_state(
    performance: *mut c_void,
    state: *const ScoreState,
) -> RosuPpError {
    guard(|| {
        let state = *state.as_ref().ok_or(RosuPpError::NullPointer)?;
        handle_mut::<Performance>(performance)?.state(state);

        Ok(RosuPpError::Ok)
    })
}

/// Get the clock rate that will be used.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_get_clock_rate(
    performance: *const c_void,
    out: *mut f64,
) -> RosuPpError {
    guard(|| write_out(out, handle_ref::<Performance>(performance)?.get_clock_rate()))
}

/// Calculate the performance attributes of a play on a beatmap.
///
/// The attributes must be released through `rosu_pp_performance_attributes_free`.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
/// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_calculate(
    performance: *const c_void,
    map: *const c_void,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let performance = handle_ref::<Performance>(performance)?;
        let map = handle_ref::<Beatmap>(map)?;

        write_handle(out, performance.calculate(map)?)
    })
}

/// Calculate the performance attributes based on difficulty attributes.
///
/// Returns `RosuPpError::ConvertError` if a mode was specified that differs
/// from the attributes' mode.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
/// - `attrs` must be a valid pointer to difficulty attributes.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_calculate_from_difficulty(
    performance: *const c_void,
    attrs: *const c_void,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let performance = handle_ref::<Performance>(performance)?;
        let attrs = handle_ref::<DifficultyAttributes>(attrs)?.clone();

        write_handle(out, performance.calculate_from_difficulty(attrs)?)
    })
}

/// Generate the score state that would be used on a beatmap.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
/// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_generate_state(
    performance: *const c_void,
    map: *const c_void,
    out: *mut ScoreState,
) -> RosuPpError {
    guard(|| {
        let performance = handle_ref::<Performance>(performance)?;
        let map = handle_ref::<Beatmap>(map)?;

        write_out(out, performance.generate_state(map)?)
    })
}

/// Generate the score state that would be used based on difficulty attributes.
///
/// # Safety
/// - `performance` must be a valid pointer returned by `rosu_pp_performance_new`.
/// - `attrs` must be a valid pointer to difficulty attributes.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_generate_state_from_difficulty(
    performance: *const c_void,
    attrs: *const c_void,
    out: *mut ScoreState,
) -> RosuPpError {
    guard(|| {
        let performance = handle_ref::<Performance>(performance)?;
        let attrs = handle_ref::<DifficultyAttributes>(attrs)?.clone();

        write_out(out, performance.generate_state_from_difficulty(attrs)?)
    })
}

/// Free performance attributes.
///
/// # Safety
/// - `attrs` must either be `NULL` or a pointer to performance attributes
///   returned by a `rosu_pp_*` function.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_attributes_free(attrs: *mut c_void) {
    free_handle::<PerformanceAttributes>(attrs);
}

/// Extract the values of performance attributes.
///
/// # Safety
/// - `attrs` must be a valid pointer to performance attributes.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_attributes_values(
    attrs: *const c_void,
    out: *mut RosuPpPerformanceAttributes,
) -> RosuPpError {
    guard(|| {
        let attrs = handle_ref::<PerformanceAttributes>(attrs)?;

        write_out(out, attrs.into())
    })
}

/// Extract the difficulty attributes that performance attributes are based on.
///
/// The attributes must be released through `rosu_pp_difficulty_attributes_free`.
///
/// # Safety
/// - `attrs` must be a valid pointer to performance attributes.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_performance_attributes_difficulty(
    attrs: *const c_void,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let attrs = handle_ref::<PerformanceAttributes>(attrs)?;

        write_handle(out, attrs.difficulty_attributes())
    })
}

/// Human-readable representation of performance attributes.
///
/// The string must be released through `rosu_pp_string_free`.
///
/// # Safety
/// - `attrs` must be a valid pointer to performance attributes.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_debug_performance_attributes(
    attrs: *const c_void,
    out: *mut *mut c_char,
) -> RosuPpError {
    guard(|| write_string(out, handle_ref::<PerformanceAttributes>(attrs)?.debug_string()))
}
