use std::cmp;

use crate::{
    any::{Difficulty, PerformanceAttributes, ScoreState},
    error::{Error, Result},
    model::{beatmap::Beatmap, mode::Mode},
};

/// Gradually calculate the performance attributes on maps of any mode.
///
/// After each hit object you can call [`next`] and it will return the
/// resulting current [`PerformanceAttributes`]. To process multiple objects at
/// the once, use [`nth`] instead.
///
/// Both methods require a [`ScoreState`] that contains the current hitresults
/// as well as the maximum combo so far. Since the map could have any mode, all
/// fields of `ScoreState` could be of use and should be updated properly.
///
/// If you only want to calculate difficulty attributes use [`GradualDifficulty`] instead.
///
/// # Example
///
/// ```no_run
/// use rosu_pp_ffi::{Beatmap, Difficulty, GradualPerformance, ScoreState};
///
/// let map = Beatmap::from_path("./resources/2785319.osu").unwrap();
///
/// let mut difficulty = Difficulty::new();
/// difficulty.mods(64); // DT
///
/// let mut gradual = GradualPerformance::new(&difficulty, &map).unwrap();
/// let mut state = ScoreState::new(); // empty state, everything is on 0.
///
/// // The first 10 hitresults are 300s
/// for _ in 0..10 {
///     state.n300 += 1;
///     state.max_combo += 1;
///
///     let performance = gradual.next(state).unwrap();
///     println!("PP: {}", performance.pp());
/// }
///
/// // Then comes a miss.
/// state.misses += 1;
///
/// let performance = gradual.next(state).unwrap();
///
/// // The next 10 objects will be a mixture of 300s, 100s, and 50s.
/// // Notice how all 10 objects will be processed in one go.
/// state.n300 += 2;
/// state.n100 += 7;
/// state.n50 += 1;
///
/// // The `nth` method takes a zero-based value.
/// let performance = gradual.nth(state, 9).unwrap();
///
/// // Skip to the end
/// # /*
/// state.max_combo = ...
/// state.n300 = ...
/// ...
/// # */
/// let final_performance = gradual.last(state).unwrap();
///
/// // Once the final performance has been calculated, attempting to process
/// // further objects will return `None`.
/// assert!(gradual.next(state).is_none());
/// ```
///
/// [`next`]: GradualPerformance::next
/// [`nth`]: GradualPerformance::nth
/// [`GradualDifficulty`]: crate::GradualDifficulty
pub struct GradualPerformance {
    inner: rosu_pp::GradualPerformance,
    mode: Mode,
}

impl GradualPerformance {
    /// Create a [`GradualPerformance`] for a map.
    ///
    /// Uses the mode of the [`Difficulty`] if one was specified, otherwise the
    /// map's mode.
    pub fn new(difficulty: &Difficulty, map: &Beatmap) -> Result<Self> {
        Self::new_with_mode(difficulty, map, difficulty.resolve_mode(map))
    }

    /// Create a [`GradualPerformance`] for a [`Beatmap`] on a specific [`Mode`].
    pub fn new_with_mode(difficulty: &Difficulty, map: &Beatmap, mode: Mode) -> Result<Self> {
        rosu_pp::GradualPerformance::new_with_mode(
            difficulty.construct(),
            &map.inner,
            mode.into(),
        )
        .map(|inner| Self { inner, mode })
        .map_err(|err| Error::Convert(err.to_string()))
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Process the next hit object and calculate the performance attributes
    /// for the resulting score state.
    pub fn next(&mut self, state: ScoreState) -> Option<PerformanceAttributes> {
        self.nth(state, 0)
    }

    /// Process all remaining hit objects and calculate the final performance
    /// attributes.
    pub fn last(&mut self, state: ScoreState) -> Option<PerformanceAttributes> {
        self.nth(state, usize::MAX)
    }

    /// Process everything up to the next `n`th hitobject and calculate the
    /// performance attributes for the resulting score state.
    ///
    /// Note that the count is zero-indexed, so `n=0` will process 1 object,
    /// `n=1` will process 2, and so on. If fewer objects remain, all of them
    /// are processed. Returns `None` only if no object was left.
    pub fn nth(&mut self, state: ScoreState, n: usize) -> Option<PerformanceAttributes> {
        let len = self.inner.len();

        if len == 0 {
            tracing::trace!(mode = %self.mode, "gradual performance exhausted");

            return None;
        }

        self.inner
            .nth(state.into(), cmp::min(n, len - 1))
            .map(PerformanceAttributes::from)
    }

    /// Returns the amount of remaining objects.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
