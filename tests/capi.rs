#![cfg(feature = "capi")]

use std::{
    ffi::{c_void, CStr, CString},
    os::raw::c_char,
    ptr,
};

use rosu_pp_ffi::{
    capi::{
        attributes::*, beatmap::*, difficulty::*, gradual::*, mode_attributes::*, mods::*,
        performance::*, rosu_pp_string_free, score_state::*, RosuPpError,
    },
    Mode, ScoreState,
};

use self::common::*;

mod common;

fn load_map() -> *mut c_void {
    let content = osu_content(N_CIRCLES, 0);
    let mut map = ptr::null_mut();

    let code = unsafe { rosu_pp_beatmap_from_bytes(content.as_ptr(), content.len(), &mut map) };
    assert_eq!(code, RosuPpError::Ok);
    assert!(!map.is_null());

    map
}

unsafe fn take_string(s: *mut c_char) -> String {
    let owned = CStr::from_ptr(s).to_string_lossy().into_owned();
    rosu_pp_string_free(s);

    owned
}

#[test]
fn null_handles() {
    unsafe {
        let mut out = 0.0;
        assert_eq!(rosu_pp_beatmap_bpm(ptr::null(), &mut out), RosuPpError::NullPointer);

        let mut handle = ptr::null_mut();
        assert_eq!(
            rosu_pp_beatmap_from_path(ptr::null(), &mut handle),
            RosuPpError::NullPointer
        );

        // freeing null is a no-op
        rosu_pp_beatmap_free(ptr::null_mut());
        rosu_pp_mods_free(ptr::null_mut());
        rosu_pp_string_free(ptr::null_mut());
    }
}

#[test]
fn beatmap_lifecycle() {
    unsafe {
        let map = load_map();

        let mut mode = Mode::Mania;
        assert_eq!(rosu_pp_beatmap_mode(map, &mut mode), RosuPpError::Ok);
        assert_eq!(mode, Mode::Osu);

        let mut n_objects = 0;
        assert_eq!(rosu_pp_beatmap_n_objects(map, &mut n_objects), RosuPpError::Ok);
        assert_eq!(n_objects, N_CIRCLES as usize);

        let mut copy = ptr::null_mut();
        assert_eq!(rosu_pp_beatmap_clone(map, &mut copy), RosuPpError::Ok);

        let mut converted = false;
        let code = rosu_pp_beatmap_convert(copy, Mode::Taiko as u32, ptr::null(), &mut converted);
        assert_eq!(code, RosuPpError::Ok);
        assert!(converted);

        let code = rosu_pp_beatmap_convert(copy, Mode::Mania as u32, ptr::null(), &mut converted);
        assert_eq!(code, RosuPpError::Ok);
        assert!(!converted);

        let code = rosu_pp_beatmap_convert(copy, 7, ptr::null(), &mut converted);
        assert_eq!(code, RosuPpError::OutOfRange);

        assert_eq!(rosu_pp_beatmap_mode(map, &mut mode), RosuPpError::Ok);
        assert_eq!(mode, Mode::Osu);

        rosu_pp_beatmap_free(copy);
        rosu_pp_beatmap_free(map);
    }
}

#[test]
fn mods_handle() {
    unsafe {
        let acronyms = CString::new("hdhr").unwrap();
        let mut mods = ptr::null_mut();

        let code = rosu_pp_mods_from_acronyms(acronyms.as_ptr(), Mode::Osu as u32, &mut mods);
        assert_eq!(code, RosuPpError::Ok);

        let mut bits = 0;
        assert_eq!(rosu_pp_mods_bits(mods, &mut bits), RosuPpError::Ok);
        assert_eq!(bits, 8 + 16);

        let dt = CString::new("DT").unwrap();
        let mut inserted = false;
        assert_eq!(rosu_pp_mods_insert(mods, dt.as_ptr(), &mut inserted), RosuPpError::Ok);
        assert!(inserted);
        assert_eq!(rosu_pp_mods_insert(mods, dt.as_ptr(), &mut inserted), RosuPpError::Ok);
        assert!(!inserted);

        let mut clock_rate = 0.0;
        let mut has_value = false;
        let code = rosu_pp_mods_clock_rate(mods, &mut clock_rate, &mut has_value);
        assert_eq!(code, RosuPpError::Ok);
        assert!(has_value);
        assert_eq_float(clock_rate, 1.5);

        let mut s = ptr::null_mut();
        assert_eq!(rosu_pp_mods_acronyms(mods, &mut s), RosuPpError::Ok);
        assert_eq!(take_string(s).len(), 6);

        rosu_pp_mods_free(mods);

        let invalid = CString::new("HD?").unwrap();
        let mut mods = ptr::null_mut();
        let code = rosu_pp_mods_from_acronyms(invalid.as_ptr(), Mode::Osu as u32, &mut mods);
        assert_eq!(code, RosuPpError::InvalidString);
        assert!(mods.is_null());
    }
}

#[test]
fn calculate_through_handles() {
    unsafe {
        let map = load_map();

        let mut difficulty = ptr::null_mut();
        assert_eq!(rosu_pp_difficulty_new(&mut difficulty), RosuPpError::Ok);
        assert_eq!(rosu_pp_difficulty_clock_rate(difficulty, 500.0), RosuPpError::OutOfRange);
        assert_eq!(rosu_pp_difficulty_ar(difficulty, 9.5, false), RosuPpError::Ok);

        let mut diff_attrs = ptr::null_mut();
        let code = rosu_pp_difficulty_calculate(difficulty, map, &mut diff_attrs);
        assert_eq!(code, RosuPpError::Ok);

        let mut values = RosuPpDifficultyAttributes::default();
        assert_eq!(rosu_pp_difficulty_attributes_values(diff_attrs, &mut values), RosuPpError::Ok);
        assert_eq!(values.mode, Mode::Osu);
        assert_eq!(values.max_combo, N_CIRCLES);
        assert!(values.has_osu);
        assert!(!values.has_taiko && !values.has_catch && !values.has_mania);
        assert_eq!(values.osu.n_circles, N_CIRCLES);
        assert!(values.osu.aim > 0.0);

        let mut osu = RosuPpOsuDifficultyAttributes::default();
        assert_eq!(rosu_pp_difficulty_attributes_osu(diff_attrs, &mut osu), RosuPpError::Ok);
        assert_eq!(osu, values.osu);

        let mut mania = RosuPpManiaDifficultyAttributes::default();
        let code = rosu_pp_difficulty_attributes_mania(diff_attrs, &mut mania);
        assert_eq!(code, RosuPpError::ConvertError);

        let mut performance = ptr::null_mut();
        assert_eq!(rosu_pp_performance_new(&mut performance), RosuPpError::Ok);
        assert_eq!(rosu_pp_performance_difficulty(performance, difficulty), RosuPpError::Ok);
        assert_eq!(rosu_pp_performance_accuracy(performance, 101.0), RosuPpError::OutOfRange);
        assert_eq!(rosu_pp_performance_accuracy(performance, 99.0), RosuPpError::Ok);
        assert_eq!(rosu_pp_performance_hitresult_priority(performance, 3), RosuPpError::OutOfRange);

        let mut perf_attrs = ptr::null_mut();
        let code = rosu_pp_performance_calculate_from_difficulty(performance, diff_attrs, &mut perf_attrs);
        assert_eq!(code, RosuPpError::Ok);

        let mut perf_values = RosuPpPerformanceAttributes::default();
        let code = rosu_pp_performance_attributes_values(perf_attrs, &mut perf_values);
        assert_eq!(code, RosuPpError::Ok);
        assert!(perf_values.pp > 0.0);
        assert_eq_float(perf_values.stars, values.stars);
        assert!(perf_values.has_osu);
        assert!(!perf_values.has_taiko && !perf_values.has_catch && !perf_values.has_mania);
        assert_eq_float(perf_values.osu.pp, perf_values.pp);
        assert_eq!(perf_values.osu.difficulty, values.osu);

        let mut s = ptr::null_mut();
        assert_eq!(rosu_pp_debug_performance_attributes(perf_attrs, &mut s), RosuPpError::Ok);
        assert!(take_string(s).starts_with("Osu("));

        assert_eq!(rosu_pp_performance_mode(performance, Mode::Mania as u32), RosuPpError::Ok);
        let mut mismatch = ptr::null_mut();
        let code = rosu_pp_performance_calculate_from_difficulty(performance, diff_attrs, &mut mismatch);
        assert_eq!(code, RosuPpError::ConvertError);
        assert!(mismatch.is_null());

        let mut state = ScoreState::new();
        assert_eq!(rosu_pp_performance_mode(performance, Mode::Osu as u32), RosuPpError::Ok);
        assert_eq!(rosu_pp_performance_generate_state(performance, map, &mut state), RosuPpError::Ok);
        assert_eq!(state.total_hits(Mode::Osu), N_CIRCLES);

        let mut acc = 0.0;
        let code = rosu_pp_score_state_accuracy(&state, diff_attrs, 0, &mut acc);
        assert_eq!(code, RosuPpError::Ok);
        assert!((acc - 0.99).abs() < 0.01);

        let code = rosu_pp_score_state_accuracy(&state, diff_attrs, 3, &mut acc);
        assert_eq!(code, RosuPpError::OutOfRange);

        rosu_pp_performance_attributes_free(perf_attrs);
        rosu_pp_performance_free(performance);
        rosu_pp_difficulty_attributes_free(diff_attrs);
        rosu_pp_difficulty_free(difficulty);
        rosu_pp_beatmap_free(map);
    }
}

#[test]
fn out_of_range_modes() {
    unsafe {
        let mut difficulty = ptr::null_mut();
        assert_eq!(rosu_pp_difficulty_new(&mut difficulty), RosuPpError::Ok);
        assert_eq!(rosu_pp_difficulty_mode(difficulty, 4), RosuPpError::OutOfRange);
        assert_eq!(rosu_pp_difficulty_mode(difficulty, u32::MAX), RosuPpError::OutOfRange);
        assert_eq!(rosu_pp_difficulty_mode(difficulty, Mode::Catch as u32), RosuPpError::Ok);
        rosu_pp_difficulty_free(difficulty);

        let mut mods = ptr::null_mut();
        assert_eq!(rosu_pp_mods_new(9, &mut mods), RosuPpError::OutOfRange);
        assert!(mods.is_null());
    }
}

#[test]
fn catch_values_through_handles() {
    unsafe {
        let map = load_map();

        let mut converted = false;
        let code = rosu_pp_beatmap_convert(map, Mode::Catch as u32, ptr::null(), &mut converted);
        assert_eq!(code, RosuPpError::Ok);
        assert!(converted);

        let code = rosu_pp_beatmap_convert(map, Mode::Catch as u32, ptr::null(), &mut converted);
        assert_eq!(code, RosuPpError::Ok);
        assert!(converted);

        let mut difficulty = ptr::null_mut();
        assert_eq!(rosu_pp_difficulty_new(&mut difficulty), RosuPpError::Ok);

        let mut attrs = ptr::null_mut();
        assert_eq!(rosu_pp_difficulty_calculate(difficulty, map, &mut attrs), RosuPpError::Ok);

        let mut values = RosuPpDifficultyAttributes::default();
        assert_eq!(rosu_pp_difficulty_attributes_values(attrs, &mut values), RosuPpError::Ok);
        assert_eq!(values.mode, Mode::Catch);
        assert!(values.has_catch && !values.has_osu);
        assert!(values.catch.is_convert);
        assert_eq!(values.catch.n_fruits, N_CIRCLES);

        rosu_pp_difficulty_attributes_free(attrs);
        rosu_pp_difficulty_free(difficulty);
        rosu_pp_beatmap_free(map);
    }
}

#[test]
fn gradual_through_handles() {
    unsafe {
        let map = load_map();

        let mut difficulty = ptr::null_mut();
        assert_eq!(rosu_pp_difficulty_new(&mut difficulty), RosuPpError::Ok);

        let mut gradual = ptr::null_mut();
        assert_eq!(rosu_pp_gradual_difficulty_new(difficulty, map, &mut gradual), RosuPpError::Ok);

        // cursors outlive the handles they were created from
        rosu_pp_difficulty_free(difficulty);
        rosu_pp_beatmap_free(map);

        let mut attrs = RosuPpDifficultyAttributes::default();
        assert_eq!(rosu_pp_gradual_difficulty_next(gradual, &mut attrs), RosuPpError::Ok);
        assert_eq!(attrs.max_combo, 1);

        let mut len = 0;
        assert_eq!(rosu_pp_gradual_difficulty_len(gradual, &mut len), RosuPpError::Ok);
        assert_eq!(len, N_CIRCLES as usize - 1);

        assert_eq!(rosu_pp_gradual_difficulty_nth(gradual, usize::MAX, &mut attrs), RosuPpError::Ok);
        assert_eq!(attrs.max_combo, N_CIRCLES);
        assert_eq!(rosu_pp_gradual_difficulty_next(gradual, &mut attrs), RosuPpError::EndOfStream);

        rosu_pp_gradual_difficulty_free(gradual);
    }
}

#[test]
fn beatmap_attributes_builder() {
    unsafe {
        let map = load_map();

        let mut builder = ptr::null_mut();
        assert_eq!(rosu_pp_beatmap_attributes_new(map, &mut builder), RosuPpError::Ok);
        assert_eq!(rosu_pp_beatmap_attributes_mods_bits(builder, mods::DT), RosuPpError::Ok);
        assert_eq!(rosu_pp_beatmap_attributes_ar(builder, 25.0, false), RosuPpError::OutOfRange);

        let mut attrs = RosuPpBeatmapAttributes::default();
        assert_eq!(rosu_pp_beatmap_attributes_build(builder, &mut attrs), RosuPpError::Ok);
        assert_eq_float(attrs.clock_rate, 1.5);
        assert!(attrs.hit_windows.has_od_ok);

        assert_eq!(rosu_pp_beatmap_attributes_mode(builder, Mode::Mania as u32, false), RosuPpError::Ok);
        assert_eq!(rosu_pp_beatmap_attributes_build(builder, &mut attrs), RosuPpError::Ok);
        assert!(!attrs.hit_windows.has_od_ok);

        rosu_pp_beatmap_attributes_free(builder);
        rosu_pp_beatmap_free(map);
    }
}
