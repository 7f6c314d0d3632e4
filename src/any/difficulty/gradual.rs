use std::cmp;

use crate::{
    any::{Difficulty, DifficultyAttributes},
    error::{Error, Result},
    model::{beatmap::Beatmap, mode::Mode},
};

/// Gradually calculate the difficulty attributes on maps of any mode.
///
/// Note that this type implements [`Iterator`]. On every call of
/// [`Iterator::next`], the next object will be processed and the
/// [`DifficultyAttributes`] will be updated and returned.
///
/// If you want to calculate performance attributes, use [`GradualPerformance`] instead.
///
/// # Example
///
/// ```no_run
/// use rosu_pp_ffi::{Beatmap, Difficulty, GradualDifficulty};
///
/// let map = Beatmap::from_path("./resources/2785319.osu").unwrap();
///
/// let mut difficulty = Difficulty::new();
/// difficulty.mods(64); // DT
///
/// let mut iter = GradualDifficulty::new(&difficulty, &map).unwrap();
///
/// // the difficulty of the map after the first object
/// let attrs1 = iter.next();
/// // ... after the second object
/// let attrs2 = iter.next();
///
/// // Remaining objects
/// for difficulty in iter {
///     // ...
/// }
/// ```
///
/// [`GradualPerformance`]: crate::GradualPerformance
pub struct GradualDifficulty {
    inner: rosu_pp::GradualDifficulty,
    mode: Mode,
}

impl GradualDifficulty {
    /// Create a [`GradualDifficulty`] for a map.
    ///
    /// Uses the mode of the [`Difficulty`] if one was specified, otherwise the
    /// map's mode.
    pub fn new(difficulty: &Difficulty, map: &Beatmap) -> Result<Self> {
        Self::new_with_mode(difficulty, map, difficulty.resolve_mode(map))
    }

    /// Create a [`GradualDifficulty`] for a [`Beatmap`] on a specific [`Mode`].
    pub fn new_with_mode(difficulty: &Difficulty, map: &Beatmap, mode: Mode) -> Result<Self> {
        rosu_pp::GradualDifficulty::new_with_mode(difficulty.construct(), &map.inner, mode.into())
            .map(|inner| Self { inner, mode })
            .map_err(|err| Error::Convert(err.to_string()))
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Process everything up to the `n`th next object.
    ///
    /// The count is zero-indexed, so `n=0` processes one object. Unlike
    /// [`Iterator::nth`], this stops at the last object if fewer than `n + 1`
    /// objects remain and only returns `None` if no object was left.
    pub fn nth_or_last(&mut self, n: usize) -> Option<DifficultyAttributes> {
        let len = self.inner.len();

        if len == 0 {
            tracing::trace!(mode = %self.mode, "gradual difficulty exhausted");

            return None;
        }

        self.inner
            .nth(cmp::min(n, len - 1))
            .map(DifficultyAttributes::from)
    }
}

impl Iterator for GradualDifficulty {
    type Item = DifficultyAttributes;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(DifficultyAttributes::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n).map(DifficultyAttributes::from)
    }
}

impl ExactSizeIterator for GradualDifficulty {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
