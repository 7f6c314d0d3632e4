use proptest::prelude::*;
use rosu_pp_ffi::{
    any::{
        calculate_accuracy, CatchDifficultyAttributes, ManiaDifficultyAttributes,
        OsuDifficultyAttributes, ScoreOrigin, TaikoDifficultyAttributes,
    },
    DifficultyAttributes, Mode, Performance, ScoreState,
};

use self::common::*;

mod common;

const ORIGINS: [ScoreOrigin; 3] = [
    ScoreOrigin::Stable,
    ScoreOrigin::WithSliderAcc,
    ScoreOrigin::WithoutSliderAcc,
];

fn attributes() -> impl Strategy<Value = DifficultyAttributes> {
    (0..10_000_u32, 0..10_000_u32).prop_flat_map(|(n_sliders, n_large_ticks)| {
        let osu = OsuDifficultyAttributes {
            n_sliders,
            n_large_ticks,
            ..Default::default()
        };

        prop_oneof![
            Just(DifficultyAttributes::Osu(osu)),
            Just(DifficultyAttributes::Taiko(TaikoDifficultyAttributes::default())),
            Just(DifficultyAttributes::Catch(CatchDifficultyAttributes::default())),
            Just(DifficultyAttributes::Mania(ManiaDifficultyAttributes::default())),
        ]
    })
}

fn score_state() -> impl Strategy<Value = ScoreState> {
    (any::<[u32; 5]>(), any::<[u32; 5]>()).prop_map(|(a, b)| ScoreState {
        max_combo: a[0],
        osu_large_tick_hits: a[1],
        osu_small_tick_hits: a[2],
        slider_end_hits: a[3],
        n_geki: a[4],
        n_katu: b[0],
        n300: b[1],
        n100: b[2],
        n50: b[3],
        misses: b[4],
    })
}

proptest! {
    #[test]
    fn empty_state_has_zero_accuracy(attrs in attributes()) {
        let state = ScoreState::new();

        for origin in ORIGINS {
            prop_assert_eq!(calculate_accuracy(&state, &attrs, origin).to_bits(), 0.0_f64.to_bits());
        }
    }

    #[test]
    fn accuracy_is_total(state in score_state(), attrs in attributes()) {
        for origin in ORIGINS {
            let acc = calculate_accuracy(&state, &attrs, origin);

            prop_assert!((0.0..=1.0).contains(&acc), "{acc}");
        }
    }
}

#[test]
fn perfect_generated_state() {
    let map = osu_map();
    let attrs = rosu_pp_ffi::Difficulty::new().calculate(&map).unwrap();

    let mut performance = Performance::new();
    performance.accuracy(100.0).unwrap();
    let state = performance.generate_state(&map).unwrap();

    for origin in ORIGINS {
        assert_eq_float(calculate_accuracy(&state, &attrs, origin), 1.0);
    }

    assert_eq!(state.total_hits(Mode::Osu), N_CIRCLES);
}
