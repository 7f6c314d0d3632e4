use std::ffi::c_void;

use crate::{
    any::{Difficulty, GradualDifficulty, GradualPerformance, ScoreState},
    model::beatmap::Beatmap,
};

use super::{
    difficulty::RosuPpDifficultyAttributes, free_handle, guard, handle_mut, handle_ref,
    mode_arg, performance::RosuPpPerformanceAttributes, write_handle, write_out, RosuPpError,
};

/// Create a gradual difficulty calculator.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
/// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_difficulty_new(
    difficulty: *const c_void,
    map: *const c_void,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let difficulty = handle_ref::<Difficulty>(difficulty)?;
        let map = handle_ref::<Beatmap>(map)?;

        write_handle(out, GradualDifficulty::new(difficulty, map)?)
    })
}

/// Create a gradual difficulty calculator for a specific mode.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
/// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_difficulty_new_with_mode(
    difficulty: *const c_void,
    map: *const c_void,
    mode: u32,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let difficulty = handle_ref::<Difficulty>(difficulty)?;
        let map = handle_ref::<Beatmap>(map)?;
        let gradual = GradualDifficulty::new_with_mode(difficulty, map, mode_arg(mode)?)?;

        write_handle(out, gradual)
    })
}

/// Free a gradual difficulty calculator.
///
/// # Safety
/// - `gradual` must either be `NULL` or a pointer returned by `rosu_pp_gradual_difficulty_new*`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_difficulty_free(gradual: *mut c_void) {
    free_handle::<GradualDifficulty>(gradual);
}

/// Process the next hit object.
///
/// Returns `RosuPpError::EndOfStream` if no object was left.
///
/// # Safety
/// - `gradual` must be a valid pointer returned by `rosu_pp_gradual_difficulty_new*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_difficulty_next(
    gradual: *mut c_void,
    out: *mut RosuPpDifficultyAttributes,
) -> RosuPpError {
    guard(|| match handle_mut::<GradualDifficulty>(gradual)?.next() {
        Some(attrs) => write_out(out, (&attrs).into()),
        None => Ok(RosuPpError::EndOfStream),
    })
}

/// Process the next `n + 1` hit objects, or all remaining ones if fewer are left.
///
/// Returns `RosuPpError::EndOfStream` if no object was left.
///
/// # Safety
/// - `gradual` must be a valid pointer returned by `rosu_pp_gradual_difficulty_new*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_difficulty_nth(
    gradual: *mut c_void,
    n: usize,
    out: *mut RosuPpDifficultyAttributes,
) -> RosuPpError {
    guard(|| match handle_mut::<GradualDifficulty>(gradual)?.nth_or_last(n) {
        Some(attrs) => write_out(out, (&attrs).into()),
        None => Ok(RosuPpError::EndOfStream),
    })
}

/// The amount of remaining hit objects.
///
/// # Safety
/// - `gradual` must be a valid pointer returned by `rosu_pp_gradual_difficulty_new*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_difficulty_len(
    gradual: *const c_void,
    out: *mut usize,
) -> RosuPpError {
    guard(|| write_out(out, handle_ref::<GradualDifficulty>(gradual)?.len()))
}

/// Create a gradual performance calculator.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
/// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_performance_new(
    difficulty: *const c_void,
    map: *const c_void,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let difficulty = handle_ref::<Difficulty>(difficulty)?;
        let map = handle_ref::<Beatmap>(map)?;

        write_handle(out, GradualPerformance::new(difficulty, map)?)
    })
}

/// Create a gradual performance calculator for a specific mode.
///
/// # Safety
/// - `difficulty` must be a valid pointer returned by `rosu_pp_difficulty_new`.
/// - `map` must be a valid pointer returned by `rosu_pp_beatmap_from_*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_performance_new_with_mode(
    difficulty: *const c_void,
    map: *const c_void,
    mode: u32,
    out: *mut *mut c_void,
) -> RosuPpError {
    guard(|| {
        let difficulty = handle_ref::<Difficulty>(difficulty)?;
        let map = handle_ref::<Beatmap>(map)?;
        let gradual = GradualPerformance::new_with_mode(difficulty, map, mode_arg(mode)?)?;

        write_handle(out, gradual)
    })
}

/// Free a gradual performance calculator.
///
/// # Safety
/// - `gradual` must either be `NULL` or a pointer returned by `rosu_pp_gradual_performance_new*`.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_performance_free(gradual: *mut c_void) {
    free_handle::<GradualPerformance>(gradual);
}

unsafe fn state_arg(state: *const ScoreState) -> Result<ScoreState, RosuPpError> {
    state.as_ref().copied().ok_or(RosuPpError::NullPointer)
}

/// Process the next hit object and calculate the current performance attributes.
///
/// Returns `RosuPpError::EndOfStream` if no object was left.
///
/// # Safety
/// - `gradual` must be a valid pointer returned by `rosu_pp_gradual_performance_new*`.
/// - `state` and `out` must be valid pointers to readable/writable memory respectively.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_performance_next(
    gradual: *mut c_void,
    state: *const ScoreState,
    out: *mut RosuPpPerformanceAttributes,
) -> RosuPpError {
    guard(|| {
        let state = state_arg(state)?;

        match handle_mut::<GradualPerformance>(gradual)?.next(state) {
            Some(attrs) => write_out(out, (&attrs).into()),
            None => Ok(RosuPpError::EndOfStream),
        }
    })
}

/// Process the next `n + 1` hit objects, or all remaining ones if fewer are
/// left, and calculate the current performance attributes.
///
/// Returns `RosuPpError::EndOfStream` if no object was left.
///
/// # Safety
/// - `gradual` must be a valid pointer returned by `rosu_pp_gradual_performance_new*`.
/// - `state` and `out` must be valid pointers to readable/writable memory respectively.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_performance_nth(
    gradual: *mut c_void,
    state: *const ScoreState,
    n: usize,
    out: *mut RosuPpPerformanceAttributes,
) -> RosuPpError {
    guard(|| {
        let state = state_arg(state)?;

        match handle_mut::<GradualPerformance>(gradual)?.nth(state, n) {
            Some(attrs) => write_out(out, (&attrs).into()),
            None => Ok(RosuPpError::EndOfStream),
        }
    })
}

/// Process all remaining hit objects and calculate the final performance attributes.
///
/// Returns `RosuPpError::EndOfStream` if no object was left.
///
/// # Safety
/// - `gradual` must be a valid pointer returned by `rosu_pp_gradual_performance_new*`.
/// - `state` and `out` must be valid pointers to readable/writable memory respectively.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_performance_last(
    gradual: *mut c_void,
    state: *const ScoreState,
    out: *mut RosuPpPerformanceAttributes,
) -> RosuPpError {
    guard(|| {
        let state = state_arg(state)?;

        match handle_mut::<GradualPerformance>(gradual)?.last(state) {
            Some(attrs) => write_out(out, (&attrs).into()),
            None => Ok(RosuPpError::EndOfStream),
        }
    })
}

/// The amount of remaining hit objects.
///
/// # Safety
/// - `gradual` must be a valid pointer returned by `rosu_pp_gradual_performance_new*`.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_gradual_performance_len(
    gradual: *const c_void,
    out: *mut usize,
) -> RosuPpError {
    guard(|| write_out(out, handle_ref::<GradualPerformance>(gradual)?.len()))
}
