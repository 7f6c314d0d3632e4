use std::{ffi::c_void, os::raw::c_char};

use crate::any::{calculate_accuracy, DifficultyAttributes, ScoreOrigin, ScoreState};

use super::{guard, handle_ref, write_out, write_string, RosuPpError};

/// Create a new empty score state.
#[no_mangle]
pub extern "C" fn rosu_pp_score_state_new() -> ScoreState {
    ScoreState::new()
}

/// Calculate the accuracy between 0 and 1 of a score state.
///
/// `origin` is `0` for osu!stable scores, `1` for osu!lazer scores with slider
/// accuracy, and `2` for osu!lazer scores without.
///
/// # Safety
/// - `state` must be a valid pointer to a score state.
/// - `attrs` must be a valid pointer to difficulty attributes.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_score_state_accuracy(
    state: *const ScoreState,
    attrs: *const c_void,
    origin: u32,
    out: *mut f64,
) -> RosuPpError {
    guard(|| {
        let state = state.as_ref().ok_or(RosuPpError::NullPointer)?;
        let attrs = handle_ref::<DifficultyAttributes>(attrs)?;

        let origin = match origin {
            0 => ScoreOrigin::Stable,
            1 => ScoreOrigin::WithSliderAcc,
            2 => ScoreOrigin::WithoutSliderAcc,
            _ => return Err(RosuPpError::OutOfRange),
        };

        write_out(out, calculate_accuracy(state, attrs, origin))
    })
}

/// Human-readable representation of a score state.
///
/// The string must be released through `rosu_pp_string_free`.
///
/// # Safety
/// - `state` must be a valid pointer to a score state.
/// - `out` must be a valid pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_pp_debug_score_state(
    state: *const ScoreState,
    out: *mut *mut c_char,
) -> RosuPpError {
    guard(|| {
        let state = state.as_ref().ok_or(RosuPpError::NullPointer)?;

        write_string(out, state.debug_string())
    })
}
