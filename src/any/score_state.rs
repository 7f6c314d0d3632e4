use std::cmp;

use rosu_pp::{
    catch::CatchScoreState,
    mania::ManiaScoreState,
    osu::{OsuScoreOrigin, OsuScoreState},
    taiko::TaikoScoreState,
};

use crate::{any::DifficultyAttributes, model::mode::Mode};

/// Aggregation for a score's current state.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ScoreState {
    /// Maximum combo that the score has had so far. **Not** the maximum
    /// possible combo of the map so far.
    ///
    /// Note that for osu!catch only fruits and droplets are considered for
    /// combo.
    ///
    /// Irrelevant for osu!mania.
    pub max_combo: u32,
    /// "Large tick" hits for osu!standard.
    ///
    /// The meaning depends on the kind of score:
    /// - if set on osu!stable, this field is irrelevant and can be `0`
    /// - if set on osu!lazer *with* slider accuracy, this field is the amount
    ///   of hit slider ticks and repeats
    /// - if set on osu!lazer *without* slider accuracy, this field is the
    ///   amount of hit slider heads, ticks, and repeats
    pub osu_large_tick_hits: u32,
    /// "Small ticks" hits for osu!standard.
    ///
    /// Only relevant for osu!lazer scores without slider accuracy. In that
    /// case, this field is the amount of slider tail hits.
    pub osu_small_tick_hits: u32,
    /// Amount of successfully hit slider ends.
    ///
    /// Only relevant for osu!standard in lazer.
    pub slider_end_hits: u32,
    /// Amount of current gekis (n320 for osu!mania).
    pub n_geki: u32,
    /// Amount of current katus (tiny droplet misses for osu!catch / n200 for
    /// osu!mania).
    pub n_katu: u32,
    /// Amount of current 300s (fruits for osu!catch).
    pub n300: u32,
    /// Amount of current 100s (droplets for osu!catch).
    pub n100: u32,
    /// Amount of current 50s (tiny droplets for osu!catch).
    pub n50: u32,
    /// Amount of current misses (fruits + droplets for osu!catch).
    pub misses: u32,
}

impl ScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            max_combo: 0,
            osu_large_tick_hits: 0,
            osu_small_tick_hits: 0,
            slider_end_hits: 0,
            n_geki: 0,
            n_katu: 0,
            n300: 0,
            n100: 0,
            n50: 0,
            misses: 0,
        }
    }

    /// Return the total amount of hits by adding everything up based on the
    /// mode.
    pub const fn total_hits(&self, mode: Mode) -> u32 {
        let total = total_hits(self, mode);

        if total > u32::MAX as u64 {
            u32::MAX
        } else {
            total as u32
        }
    }

    /// Human-readable representation.
    pub fn debug_string(&self) -> String {
        format!("{self:#?}")
    }
}

impl From<ScoreState> for rosu_pp::any::ScoreState {
    fn from(state: ScoreState) -> Self {
        Self {
            max_combo: state.max_combo,
            osu_large_tick_hits: state.osu_large_tick_hits,
            osu_small_tick_hits: state.osu_small_tick_hits,
            slider_end_hits: state.slider_end_hits,
            n_geki: state.n_geki,
            n_katu: state.n_katu,
            n300: state.n300,
            n100: state.n100,
            n50: state.n50,
            misses: state.misses,
        }
    }
}

impl From<rosu_pp::any::ScoreState> for ScoreState {
    fn from(state: rosu_pp::any::ScoreState) -> Self {
        Self {
            max_combo: state.max_combo,
            osu_large_tick_hits: state.osu_large_tick_hits,
            osu_small_tick_hits: state.osu_small_tick_hits,
            slider_end_hits: state.slider_end_hits,
            n_geki: state.n_geki,
            n_katu: state.n_katu,
            n300: state.n300,
            n100: state.n100,
            n50: state.n50,
            misses: state.misses,
        }
    }
}

const fn total_hits(state: &ScoreState, mode: Mode) -> u64 {
    let mut amount = state.n300 as u64 + state.n100 as u64 + state.misses as u64;

    if !matches!(mode, Mode::Taiko) {
        amount += state.n50 as u64;

        if !matches!(mode, Mode::Osu) {
            amount += state.n_katu as u64;

            if matches!(mode, Mode::Mania) {
                amount += state.n_geki as u64;
            }
        }
    }

    amount
}

/// The kind of score that a [`ScoreState`] belongs to.
///
/// Decides which fields count towards accuracy.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ScoreOrigin {
    /// osu!stable score
    #[default]
    Stable = 0,
    /// osu!lazer score with slider accuracy
    WithSliderAcc = 1,
    /// osu!lazer score without slider accuracy, i.e. classic mod
    WithoutSliderAcc = 2,
}

/// Counts beyond this value are clamped before calculating accuracy so the
/// engine's weighted sums stay within `u32`. Tick and slider end hits are
/// additionally capped by the map's maxima.
const MAX_COUNT: u32 = 1 << 20;

/// Calculate the accuracy between `0.0` and `1.0` of a [`ScoreState`].
///
/// The mode is determined by the given attributes. States without any hits
/// have an accuracy of `0.0`.
pub fn calculate_accuracy(
    state: &ScoreState,
    attrs: &DifficultyAttributes,
    origin: ScoreOrigin,
) -> f64 {
    let count = |n: u32| cmp::min(n, MAX_COUNT);

    let acc = match attrs {
        DifficultyAttributes::Osu(attrs) => {
            let n_sliders = count(attrs.n_sliders);
            let n_large_ticks = count(attrs.n_large_ticks);

            let (origin, max_large, max_small, max_ends) = match origin {
                ScoreOrigin::Stable => (OsuScoreOrigin::Stable, 0, 0, 0),
                ScoreOrigin::WithSliderAcc => (
                    OsuScoreOrigin::WithSliderAcc {
                        max_large_ticks: n_large_ticks,
                        max_slider_ends: n_sliders,
                    },
                    n_large_ticks,
                    0,
                    n_sliders,
                ),
                ScoreOrigin::WithoutSliderAcc => (
                    OsuScoreOrigin::WithoutSliderAcc {
                        max_large_ticks: n_sliders + n_large_ticks,
                        max_small_ticks: n_sliders,
                    },
                    n_sliders + n_large_ticks,
                    n_sliders,
                    0,
                ),
            };

            OsuScoreState {
                large_tick_hits: cmp::min(state.osu_large_tick_hits, max_large),
                small_tick_hits: cmp::min(state.osu_small_tick_hits, max_small),
                slider_end_hits: cmp::min(state.slider_end_hits, max_ends),
                n300: count(state.n300),
                n100: count(state.n100),
                n50: count(state.n50),
                misses: count(state.misses),
                ..OsuScoreState::default()
            }
            .accuracy(origin)
        }
        DifficultyAttributes::Taiko(_) => TaikoScoreState {
            n300: count(state.n300),
            n100: count(state.n100),
            misses: count(state.misses),
            ..TaikoScoreState::default()
        }
        .accuracy(),
        DifficultyAttributes::Catch(_) => CatchScoreState {
            fruits: count(state.n300),
            droplets: count(state.n100),
            tiny_droplets: count(state.n50),
            tiny_droplet_misses: count(state.n_katu),
            misses: count(state.misses),
            ..CatchScoreState::default()
        }
        .accuracy(),
        DifficultyAttributes::Mania(_) => ManiaScoreState {
            n320: count(state.n_geki),
            n300: count(state.n300),
            n200: count(state.n_katu),
            n100: count(state.n100),
            n50: count(state.n50),
            misses: count(state.misses),
        }
        .accuracy(origin == ScoreOrigin::Stable),
    };

    // 0/0 for states without hits
    if acc.is_nan() {
        return 0.0;
    }

    acc.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use rosu_pp::{
        catch::CatchDifficultyAttributes, mania::ManiaDifficultyAttributes,
        osu::OsuDifficultyAttributes, taiko::TaikoDifficultyAttributes,
    };

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn accuracy_per_mode() {
        let state = ScoreState {
            n300: 1,
            n100: 1,
            ..ScoreState::new()
        };

        let osu = DifficultyAttributes::Osu(OsuDifficultyAttributes::default());
        assert_close(calculate_accuracy(&state, &osu, ScoreOrigin::Stable), 400.0 / 600.0);

        let taiko = DifficultyAttributes::Taiko(TaikoDifficultyAttributes::default());
        assert_close(calculate_accuracy(&state, &taiko, ScoreOrigin::Stable), 0.75);

        let catch = DifficultyAttributes::Catch(CatchDifficultyAttributes::default());
        let state = ScoreState {
            n300: 1,
            n_katu: 1,
            ..ScoreState::new()
        };
        assert_close(calculate_accuracy(&state, &catch, ScoreOrigin::Stable), 0.5);

        let mania = DifficultyAttributes::Mania(ManiaDifficultyAttributes::default());
        let state = ScoreState {
            n_geki: 1,
            n300: 1,
            ..ScoreState::new()
        };
        assert_close(calculate_accuracy(&state, &mania, ScoreOrigin::Stable), 1.0);
        assert!(calculate_accuracy(&state, &mania, ScoreOrigin::WithSliderAcc) < 1.0);
    }

    #[test]
    fn huge_counts_are_clamped() {
        let state = ScoreState {
            n300: u32::MAX,
            n100: u32::MAX,
            n50: u32::MAX,
            misses: u32::MAX,
            ..ScoreState::new()
        };

        let osu = DifficultyAttributes::Osu(OsuDifficultyAttributes::default());
        let acc = calculate_accuracy(&state, &osu, ScoreOrigin::Stable);

        assert_close(acc, 450.0 / 1200.0);
    }

    #[test]
    fn total_hits_per_mode() {
        let state = ScoreState {
            n_geki: 1,
            n_katu: 2,
            n300: 3,
            n100: 4,
            n50: 5,
            misses: 6,
            ..ScoreState::new()
        };

        assert_eq!(state.total_hits(Mode::Osu), 18);
        assert_eq!(state.total_hits(Mode::Taiko), 13);
        assert_eq!(state.total_hits(Mode::Catch), 20);
        assert_eq!(state.total_hits(Mode::Mania), 21);
    }

    #[test]
    fn debug_string_lists_fields() {
        let state = ScoreState {
            n300: 42,
            ..ScoreState::default()
        };

        assert!(state.debug_string().contains("n300: 42"));
    }
}
