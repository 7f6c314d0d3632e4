use rosu_pp_ffi::{
    Difficulty, Error, HitResultPriority, Mode, Performance, PerformanceAttributes, ScoreState,
};

use self::common::*;

mod common;

#[test]
fn full_accuracy_best_case() {
    let map = osu_map();

    let mut performance = Performance::new();
    performance
        .hitresult_priority(HitResultPriority::BestCase)
        .misses(0)
        .accuracy(100.0)
        .unwrap();

    let state = performance.generate_state(&map).unwrap();

    assert_eq!(state.misses, 0);
    assert_eq!(state.n300, N_CIRCLES);
    assert_eq!(state.n100, 0);
    assert_eq!(state.n50, 0);
    assert_eq!(state.n_katu, 0);
}

#[test]
fn state_overrides_scalars() {
    let map = osu_map();

    let state = ScoreState {
        max_combo: 40,
        n300: 90,
        n100: 8,
        misses: 2,
        ..ScoreState::new()
    };

    let mut performance = Performance::new();
    performance.n300(N_CIRCLES).misses(0).combo(N_CIRCLES).state(state);

    assert_eq!(performance.generate_state(&map).unwrap(), state);

    let with_state = performance.calculate(&map).unwrap();

    let mut performance = Performance::new();
    performance.n300(90).n100(8).misses(2).combo(40);
    let with_scalars = performance.calculate(&map).unwrap();

    assert_eq_float(with_state.pp(), with_scalars.pp());
}

#[test]
fn from_difficulty_matches_full() {
    let map = osu_map();

    let mut performance = Performance::new();
    performance.mods(mods::HD | mods::DT).misses(1).accuracy(97.5).unwrap();

    let full = performance.calculate(&map).unwrap();

    let mut difficulty = Difficulty::new();
    difficulty.mods(mods::HD | mods::DT);
    let attrs = difficulty.calculate(&map).unwrap();

    let from_difficulty = performance.calculate_from_difficulty(attrs).unwrap();

    assert!(matches!(from_difficulty, PerformanceAttributes::Osu(_)));
    assert_eq_float(full.pp(), from_difficulty.pp());
}

#[test]
fn mismatching_mode() {
    let map = osu_map();
    let attrs = Difficulty::new().calculate(&map).unwrap();

    let mut performance = Performance::new();
    performance.mode(Mode::Catch);

    let err = performance.calculate_from_difficulty(attrs).unwrap_err();

    assert!(matches!(err, Error::ModeMismatch { .. }));
    assert_eq!(err.category(), rosu_pp_ffi::ErrorCategory::ModeMismatch);
}

#[test]
fn priorities_are_deterministic() {
    let map = osu_map();

    for priority in [
        HitResultPriority::BestCase,
        HitResultPriority::WorstCase,
        HitResultPriority::Fastest,
    ] {
        let mut performance = Performance::new();
        performance.hitresult_priority(priority).accuracy(93.0).unwrap();

        let first = performance.generate_state(&map).unwrap();
        let second = performance.generate_state(&map).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.total_hits(Mode::Osu), N_CIRCLES);
    }
}
