use std::{ffi::c_void, os::raw::c_char};

use crate::{
    any::Difficulty,
    model::{
        beatmap::{Beatmap, BeatmapAttributes, BeatmapAttributesBuilder, HitWindows},
        mods::Mods,
    },
};

use super::{
    free_handle, guard, handle_mut, handle_ref, mode_arg, str_arg, write_handle, write_out,
    RosuPpError,
};

/// C representation of [`HitWindows`].
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RosuPpHitWindows {
    pub ar: f64,
    pub od_great: f64,
    /// Only meaningful if `has_od_ok` is `true`.
    pub od_ok: f64,
    pub has_od_ok: bool,
}

impl From<HitWindows> for RosuPpHitWindows {
    fn from(windows: HitWindows) -> Self {
        Self {
            ar: windows.ar,
            od_great: windows.od_great,
            od_ok: windows.od_ok.unwrap_or(0.0),
            has_od_ok: windows.od_ok.is_some(),
        }
    }
}

/// C representation of [`BeatmapAttributes`].
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RosuPpBeatmapAttributes {
    pub ar: f64,
    pub od: f64,
    pub cs: f64,
    pub hp: f64,
    pub clock_rate: f64,
    pub hit_windows: RosuPpHitWindows,
}

impl From<BeatmapAttributes> for RosuPpBeatmapAttributes {
    fn from(attrs: BeatmapAttributes) -> Self {
        Self {
            ar: attrs.ar,
            od: attrs.od,
            cs: attrs.cs,
            hp: attrs.hp,
            clock_rate: attrs.clock_rate,
            hit_windows: attrs.hit_windows.into(),
        }
    }
}

/// Create a beatmap attributes builder.
///
/// If `map` is not `NULL`, the builder is seeded with the map's attributes.
///
/// # Safety
/// - `map` must either be `NULL` or a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_attributes_new(
    map: *const c_void,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let builder = if map.is_null() {
            BeatmapAttributesBuilder::new()
        } else {
            handle_ref::<Beatmap>(map)?.attributes()
        };

        write_handle(out, builder)
    })
}

/// Free a builder created through `rosu_pp_beatmap_attributes_new`.
///
/// # Safety
/// - `builder` must either be `NULL` or a pointer returned by `rosu_pp_beatmap_attributes_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_attributes_free(builder: *mut c_void) {
    free_handle::<BeatmapAttributesBuilder>(builder);
}

/// Specify the mode and whether the map is a convert.
///
/// # Safety
/// - `builder` must be a valid pointer returned by `rosu_pp_beatmap_attributes_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_attributes_mode(
    builder: *mut c_void,
    mode: u32,
    is_convert: bool,
) -> RosuPpError {
    guard(|| {
        handle_mut::<BeatmapAttributesBuilder>(builder)?.mode(mode_arg(mode)?, is_convert);

        Ok(RosuPpError::Ok)
    })
}

/// Specify mods through legacy bits.
///
/// # Safety
/// - `builder` must be a valid pointer returned by `rosu_pp_beatmap_attributes_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_attributes_mods_bits(
    builder: *mut c_void,
    bits: u32,
) -> RosuPpError {
    guard(|| {
        handle_mut::<BeatmapAttributesBuilder>(builder)?.mods(bits);

        Ok(RosuPpError::Ok)
    })
}

/// Specify mods through acronyms such as `"HDDT"`.
///
/// # Safety
/// - `builder` must be a valid pointer returned by `rosu_pp_beatmap_attributes_new`.
/// - `acronyms` must be a valid pointer to a null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_attributes_mods_acronyms(
    builder: *mut c_void,
    acronyms: *const c_char,
) -> RosuPpError {
    guard(|| {
        let acronyms = str_arg(acronyms)?;
        handle_mut::<BeatmapAttributesBuilder>(builder)?.mods_acronyms(acronyms)?;

        Ok(RosuPpError::Ok)
    })
}

/// Specify mods through a mods handle.
///
/// # Safety
/// - `builder` must be a valid pointer returned by `rosu_pp_beatmap_attributes_new`.
/// - `mods` must be a valid pointer returned by `rosu_pp_mods_*`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_attributes_mods(
    builder: *mut c_void,
    mods: *const c_void,
) -> RosuPpError {
    guard(|| {
        let mods = handle_ref::<Mods>(mods)?;
        handle_mut::<BeatmapAttributesBuilder>(builder)?.mods(mods);

        Ok(RosuPpError::Ok)
    })
}

/// Adopt all settings of a difficulty calculator.
///
/// # Safety
/// - `builder` must be a valid pointer returned by `rosu_pp_beatmap_attributes_new`.
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_attributes_difficulty(
    builder: *mut c_void,
    difficulty: *const c_void,
) -> RosuPpError {
    guard(|| {
        let difficulty = handle_ref::<Difficulty>(difficulty)?;
        handle_mut::<BeatmapAttributesBuilder>(builder)?.difficulty(difficulty);

        Ok(RosuPpError::Ok)
    })
}

/// Specify a custom clock rate.
///
/// # Safety
/// - `builder` must be a valid pointer returned by `rosu_pp_beatmap_attributes_new`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_attributes_clock_rate(
    builder: *mut c_void,
    clock_rate: f64,
) -> RosuPpError {
    guard(|| {
        crate::Error::check_range(
            "clock rate",
            clock_rate,
            Difficulty::MIN_CLOCK_RATE,
            Difficulty::MAX_CLOCK_RATE,
        )?;

        handle_mut::<BeatmapAttributesBuilder>(builder)?.clock_rate(clock_rate);

        Ok(RosuPpError::Ok)
    })
}

macro_rules! attribute_setters {
    ( $( $fn_name:ident => $method:ident, )* ) => {
        $(
            #[doc = concat!("Override the `", stringify!($method), "` value.")]
            ///
            /// # Safety
            /// - `builder` must be a valid pointer returned by `rosu_pp_beatmap_attributes_new`.
            #[no_mangle]
            pub unsafe extern "C" fn $fn_name(
                builder: *mut c_void,
                value: f32,
                with_mods: bool,
            ) -> RosuPpError {
                guard(|| {
                    crate::Error::check_range(
                        stringify!($method),
                        f64::from(value),
                        f64::from(Difficulty::MIN_ATTRIBUTE),
                        f64::from(Difficulty::MAX_ATTRIBUTE),
                    )?;

                    handle_mut::<BeatmapAttributesBuilder>(builder)?.$method(value, with_mods);

                    Ok(RosuPpError::Ok)
                })
            }
        )*
    };
}

attribute_setters! {
    rosu_pp_beatmap_attributes_ar => ar,
    rosu_pp_beatmap_attributes_cs => cs,
    rosu_pp_beatmap_attributes_hp => hp,
    rosu_pp_beatmap_attributes_od => od,
}

/// Get the clock rate that will be used.
///
/// # Safety
/// - `builder` must be a valid pointer returned by `rosu_pp_beatmap_attributes_new`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_attributes_get_clock_rate(
    builder: *const c_void,
    out: *mut f64,
) -> RosuPpError {
    guard(|| write_out(out, handle_ref::<BeatmapAttributesBuilder>(builder)?.get_clock_rate()))
}

/// Calculate the beatmap attributes.
///
/// # Safety
/// - `builder` must be a valid pointer returned by `rosu_pp_beatmap_attributes_new`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_beatmap_attributes_build(
    builder: *const c_void,
    out: *mut RosuPpBeatmapAttributes,
) -> RosuPpError {
    guard(|| {
        let attrs = handle_ref::<BeatmapAttributesBuilder>(builder)?.build();

        write_out(out, attrs.into())
    })
}
