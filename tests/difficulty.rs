use rosu_pp_ffi::{Difficulty, DifficultyAttributes, Mode, Mods};

use self::common::*;

mod common;

#[test]
fn osu_nomod() {
    let map = osu_map();
    let attrs = Difficulty::new().calculate(&map).unwrap();

    assert!(matches!(attrs, DifficultyAttributes::Osu(_)));
    assert_eq!(attrs.mode(), Mode::Osu);
    assert_eq!(attrs.max_combo(), N_CIRCLES);
    assert!(attrs.stars() > 0.0);
}

#[test]
fn passed_objects_truncate() {
    let map = osu_map();

    let mut difficulty = Difficulty::new();
    difficulty.passed_objects(50);
    assert_eq!(difficulty.calculate(&map).unwrap().max_combo(), 50);

    difficulty.passed_objects(N_CIRCLES + 10);
    assert_eq!(difficulty.calculate(&map).unwrap().max_combo(), N_CIRCLES);
}

#[test]
fn mods_affect_stars() {
    let map = osu_map();

    let nomod = Difficulty::new().calculate(&map).unwrap();

    let mut difficulty = Difficulty::new();
    difficulty.mods(mods::DT);
    let dt = difficulty.calculate(&map).unwrap();

    let mut difficulty = Difficulty::new();
    difficulty.mods(Mods::from_acronyms("DT", Mode::Osu).unwrap());
    let lazer_dt = difficulty.calculate(&map).unwrap();

    assert!(dt.stars() > nomod.stars());
    assert_eq_float(dt.stars(), lazer_dt.stars());
}

#[test]
fn calculate_is_reusable() {
    let map = osu_map();
    let other = rosu_pp_ffi::Beatmap::from_bytes(osu_content(20, 0).as_bytes()).unwrap();

    let mut difficulty = Difficulty::new();
    difficulty.mods(mods::HD | mods::HR);

    let first = difficulty.calculate(&map).unwrap();
    assert_eq!(difficulty.calculate(&other).unwrap().max_combo(), 20);
    assert_eq!(difficulty.calculate(&map).unwrap(), first);
}

#[test]
fn convert_on_calculate() {
    let map = osu_map();

    let mut difficulty = Difficulty::new();
    difficulty.mode(Mode::Taiko);

    let attrs = difficulty.calculate(&map).unwrap();

    assert!(matches!(attrs, DifficultyAttributes::Taiko(_)));
    assert_eq!(map.mode(), Mode::Osu);
}
