//! Mode-specific attribute values.
//!
//! [`RosuPpDifficultyAttributes`] and [`RosuPpPerformanceAttributes`] carry one
//! payload per mode; only the payload whose `has_*` flag is set is
//! populated. The `rosu_pp_*_attributes_{osu,taiko,catch,mania}` functions
//! extract a single payload from an attributes handle and fail with
//! `RosuPpError::ConvertError` if the handle belongs to another mode.
//!
//! [`RosuPpDifficultyAttributes`]: super::difficulty::RosuPpDifficultyAttributes
//! [`RosuPpPerformanceAttributes`]: super::performance::RosuPpPerformanceAttributes

use std::ffi::c_void;

use rosu_pp::{
    catch::{CatchDifficultyAttributes, CatchPerformanceAttributes},
    mania::{ManiaDifficultyAttributes, ManiaPerformanceAttributes},
    osu::{OsuDifficultyAttributes, OsuPerformanceAttributes},
    taiko::{TaikoDifficultyAttributes, TaikoPerformanceAttributes},
};

use crate::any::{DifficultyAttributes, PerformanceAttributes};

use super::{guard, handle_ref, write_out, RosuPpError};

/// Difficulty values of an osu!standard map.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RosuPpOsuDifficultyAttributes {
    /// The difficulty of the aim skill.
    pub aim: f64,
    /// The difficulty of the speed skill.
    pub speed: f64,
    /// The difficulty of the flashlight skill.
    pub flashlight: f64,
    /// The ratio of the aim strain with and without considering sliders.
    pub slider_factor: f64,
    /// The number of clickable objects weighted by difficulty.
    pub speed_note_count: f64,
    /// Weighted sum of aim strains.
    pub aim_difficult_strain_count: f64,
    /// Weighted sum of speed strains.
    pub speed_difficult_strain_count: f64,
    /// The approach rate.
    pub ar: f64,
    /// The health drain rate.
    pub hp: f64,
    pub n_circles: u32,
    pub n_sliders: u32,
    /// The amount of slider ticks and repeats, plus slider heads for
    /// osu!lazer scores without slider accuracy.
    pub n_large_ticks: u32,
    pub n_spinners: u32,
    pub stars: f64,
    pub max_combo: u32,
}

impl From<&OsuDifficultyAttributes> for RosuPpOsuDifficultyAttributes {
    fn from(attrs: &OsuDifficultyAttributes) -> Self {
        Self {
            aim: attrs.aim,
            speed: attrs.speed,
            flashlight: attrs.flashlight,
            slider_factor: attrs.slider_factor,
            speed_note_count: attrs.speed_note_count,
            aim_difficult_strain_count: attrs.aim_difficult_strain_count,
            speed_difficult_strain_count: attrs.speed_difficult_strain_count,
            ar: attrs.ar,
            hp: attrs.hp,
            n_circles: attrs.n_circles,
            n_sliders: attrs.n_sliders,
            n_large_ticks: attrs.n_large_ticks,
            n_spinners: attrs.n_spinners,
            stars: attrs.stars,
            max_combo: attrs.max_combo,
        }
    }
}

/// Difficulty values of an osu!taiko map.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RosuPpTaikoDifficultyAttributes {
    pub stamina: f64,
    pub rhythm: f64,
    pub color: f64,
    /// The perceived hit window for an n300 inclusive of rate-adjusting mods.
    pub great_hit_window: f64,
    pub stars: f64,
    pub max_combo: u32,
    /// Whether the map was a convert i.e. an osu!standard map.
    pub is_convert: bool,
}

impl From<&TaikoDifficultyAttributes> for RosuPpTaikoDifficultyAttributes {
    fn from(attrs: &TaikoDifficultyAttributes) -> Self {
        Self {
            stamina: attrs.stamina,
            rhythm: attrs.rhythm,
            color: attrs.color,
            great_hit_window: attrs.great_hit_window,
            stars: attrs.stars,
            max_combo: attrs.max_combo,
            is_convert: attrs.is_convert,
        }
    }
}

/// Difficulty values of an osu!catch map.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RosuPpCatchDifficultyAttributes {
    pub stars: f64,
    /// The approach rate.
    pub ar: f64,
    pub n_fruits: u32,
    pub n_droplets: u32,
    pub n_tiny_droplets: u32,
    pub max_combo: u32,
    /// Whether the map was a convert i.e. an osu!standard map.
    pub is_convert: bool,
}

impl From<&CatchDifficultyAttributes> for RosuPpCatchDifficultyAttributes {
    fn from(attrs: &CatchDifficultyAttributes) -> Self {
        Self {
            stars: attrs.stars,
            ar: attrs.ar,
            n_fruits: attrs.n_fruits,
            n_droplets: attrs.n_droplets,
            n_tiny_droplets: attrs.n_tiny_droplets,
            max_combo: attrs.max_combo(),
            is_convert: attrs.is_convert,
        }
    }
}

/// Difficulty values of an osu!mania map.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RosuPpManiaDifficultyAttributes {
    pub stars: f64,
    pub n_objects: u32,
    pub n_hold_notes: u32,
    pub max_combo: u32,
    /// Whether the map was a convert i.e. an osu!standard map.
    pub is_convert: bool,
}

impl From<&ManiaDifficultyAttributes> for RosuPpManiaDifficultyAttributes {
    fn from(attrs: &ManiaDifficultyAttributes) -> Self {
        Self {
            stars: attrs.stars,
            n_objects: attrs.n_objects,
            n_hold_notes: attrs.n_hold_notes,
            max_combo: attrs.max_combo,
            is_convert: attrs.is_convert,
        }
    }
}

/// Performance values of an osu!standard score.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RosuPpOsuPerformanceAttributes {
    pub difficulty: RosuPpOsuDifficultyAttributes,
    pub pp: f64,
    pub pp_acc: f64,
    pub pp_aim: f64,
    pub pp_flashlight: f64,
    pub pp_speed: f64,
    /// Misses including an approximated amount of slider breaks.
    pub effective_miss_count: f64,
}

impl From<&OsuPerformanceAttributes> for RosuPpOsuPerformanceAttributes {
    fn from(attrs: &OsuPerformanceAttributes) -> Self {
        Self {
            difficulty: (&attrs.difficulty).into(),
            pp: attrs.pp,
            pp_acc: attrs.pp_acc,
            pp_aim: attrs.pp_aim,
            pp_flashlight: attrs.pp_flashlight,
            pp_speed: attrs.pp_speed,
            effective_miss_count: attrs.effective_miss_count,
        }
    }
}

/// Performance values of an osu!taiko score.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RosuPpTaikoPerformanceAttributes {
    pub difficulty: RosuPpTaikoDifficultyAttributes,
    pub pp: f64,
    pub pp_acc: f64,
    pub pp_difficulty: f64,
    /// Scaled miss count based on total hits.
    pub effective_miss_count: f64,
}

impl From<&TaikoPerformanceAttributes> for RosuPpTaikoPerformanceAttributes {
    fn from(attrs: &TaikoPerformanceAttributes) -> Self {
        Self {
            difficulty: (&attrs.difficulty).into(),
            pp: attrs.pp,
            pp_acc: attrs.pp_acc,
            pp_difficulty: attrs.pp_difficulty,
            effective_miss_count: attrs.effective_miss_count,
        }
    }
}

/// Performance values of an osu!catch score.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RosuPpCatchPerformanceAttributes {
    pub difficulty: RosuPpCatchDifficultyAttributes,
    pub pp: f64,
}

impl From<&CatchPerformanceAttributes> for RosuPpCatchPerformanceAttributes {
    fn from(attrs: &CatchPerformanceAttributes) -> Self {
        Self {
            difficulty: (&attrs.difficulty).into(),
            pp: attrs.pp,
        }
    }
}

/// Performance values of an osu!mania score.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RosuPpManiaPerformanceAttributes {
    pub difficulty: RosuPpManiaDifficultyAttributes,
    pub pp: f64,
    pub pp_difficulty: f64,
}

impl From<&ManiaPerformanceAttributes> for RosuPpManiaPerformanceAttributes {
    fn from(attrs: &ManiaPerformanceAttributes) -> Self {
        Self {
            difficulty: (&attrs.difficulty).into(),
            pp: attrs.pp,
            pp_difficulty: attrs.pp_difficulty,
        }
    }
}

macro_rules! mode_accessors {
    ( $attrs:ident { $( $fn_name:ident: $variant:ident => $out:ty, )* } ) => {
        $(
            #[doc = concat!("Extract the ", stringify!($variant), " values of `", stringify!($attrs), "`.")]
            ///
            /// Returns `RosuPpError::ConvertError` if the attributes belong to
            /// another mode.
            ///
            /// # Safety
            #[doc = concat!("- `attrs` must be a valid pointer to `", stringify!($attrs), "`.")]
            /// - `out` must be a valid pointer to writable memory.
            #[no_mangle]
            pub unsafe extern "C" fn $fn_name(attrs: *const c_void, out: *mut $out) -> RosuPpError {
                guard(|| match handle_ref::<$attrs>(attrs)? {
                    $attrs::$variant(attrs) => write_out(out, <$out>::from(attrs)),
                    _ => Err(RosuPpError::ConvertError),
                })
            }
        )*
    };
}

mode_accessors!(DifficultyAttributes {
    rosu_pp_difficulty_attributes_osu: Osu => RosuPpOsuDifficultyAttributes,
    rosu_pp_difficulty_attributes_taiko: Taiko => RosuPpTaikoDifficultyAttributes,
    rosu_pp_difficulty_attributes_catch: Catch => RosuPpCatchDifficultyAttributes,
    rosu_pp_difficulty_attributes_mania: Mania => RosuPpManiaDifficultyAttributes,
});

mode_accessors!(PerformanceAttributes {
    rosu_pp_performance_attributes_osu: Osu => RosuPpOsuPerformanceAttributes,
    rosu_pp_performance_attributes_taiko: Taiko => RosuPpTaikoPerformanceAttributes,
    rosu_pp_performance_attributes_catch: Catch => RosuPpCatchPerformanceAttributes,
    rosu_pp_performance_attributes_mania: Mania => RosuPpManiaPerformanceAttributes,
});

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn accessor_checks_mode() {
        let attrs = DifficultyAttributes::Catch(CatchDifficultyAttributes::default());
        let handle = ptr::from_ref(&attrs).cast::<c_void>();

        let mut catch = RosuPpCatchDifficultyAttributes::default();
        let code = unsafe { rosu_pp_difficulty_attributes_catch(handle, &mut catch) };
        assert_eq!(code, RosuPpError::Ok);

        let mut osu = RosuPpOsuDifficultyAttributes::default();
        let code = unsafe { rosu_pp_difficulty_attributes_osu(handle, &mut osu) };
        assert_eq!(code, RosuPpError::ConvertError);
    }
}
