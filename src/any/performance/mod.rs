use crate::{
    any::{Difficulty, DifficultyAttributes, PerformanceAttributes, ScoreState},
    error::{Error, Result},
    model::{beatmap::Beatmap, mode::Mode, mods::ModsInput},
};

pub mod gradual;

/// While generating remaining hitresults, decide how they should be distributed.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum HitResultPriority {
    /// Prioritize good hitresults over bad ones
    #[default]
    BestCase = 0,
    /// Prioritize bad hitresults over good ones
    WorstCase = 1,
    /// Generate hitresults as fast as possible, possibly missing the exact
    /// accuracy
    Fastest = 2,
}

impl From<HitResultPriority> for rosu_pp::any::HitResultPriority {
    fn from(priority: HitResultPriority) -> Self {
        match priority {
            HitResultPriority::BestCase => Self::BestCase,
            HitResultPriority::WorstCase => Self::WorstCase,
            HitResultPriority::Fastest => Self::Fastest,
        }
    }
}

/// Performance calculator on maps of any mode.
///
/// Hitresults are resolved in the following order:
/// 1. a [`ScoreState`] given through [`Performance::state`] is used as is
/// 2. otherwise, specified hit counts are used and missing ones are generated
///    based on the accuracy and the [`HitResultPriority`]
///
/// # Example
///
/// ```no_run
/// use rosu_pp_ffi::{Beatmap, HitResultPriority, Performance};
///
/// let map = Beatmap::from_path("./resources/2785319.osu").unwrap();
///
/// let mut performance = Performance::new();
/// performance
///     .mods(8 + 64) // HDDT
///     .combo(1234)
///     .misses(1)
///     .hitresult_priority(HitResultPriority::WorstCase)
///     .accuracy(98.5)
///     .unwrap();
///
/// let attrs = performance.calculate(&map).unwrap();
///
/// // Reusing the difficulty attributes avoids recalculating them.
/// performance.misses(0);
/// let attrs = performance.calculate_from_difficulty(attrs.into()).unwrap();
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Performance {
    difficulty: Difficulty,
    acc: Option<f64>,
    combo: Option<u32>,
    misses: Option<u32>,
    large_tick_hits: Option<u32>,
    small_tick_hits: Option<u32>,
    slider_end_hits: Option<u32>,
    n300: Option<u32>,
    n100: Option<u32>,
    n50: Option<u32>,
    n_katu: Option<u32>,
    n_geki: Option<u32>,
    state: Option<ScoreState>,
    hitresult_priority: HitResultPriority,
}

impl Performance {
    pub const MIN_ACCURACY: f64 = 0.0;
    pub const MAX_ACCURACY: f64 = 100.0;

    /// Create a new performance calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The difficulty settings that will be used.
    pub const fn get_difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    /// Use the settings of the given [`Difficulty`], replacing all previous
    /// difficulty settings.
    pub fn difficulty(&mut self, difficulty: Difficulty) -> &mut Self {
        self.difficulty = difficulty;

        self
    }

    /// Calculate for the given mode instead of the map's mode.
    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.difficulty.mode(mode);

        self
    }

    /// Specify mods through bits, parsed acronyms, or [`Mods`].
    ///
    /// [`Mods`]: crate::Mods
    pub fn mods(&mut self, mods: impl Into<ModsInput>) -> &mut Self {
        self.difficulty.mods(mods);

        self
    }

    /// Specify mods through acronyms such as `"HDDT"`.
    ///
    /// On error, the previous mods are kept.
    pub fn mods_acronyms(&mut self, acronyms: &str) -> Result<&mut Self> {
        self.difficulty.mods_acronyms(acronyms)?;

        Ok(self)
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub fn passed_objects(&mut self, passed_objects: u32) -> &mut Self {
        self.difficulty.passed_objects(passed_objects);

        self
    }

    /// See [`Difficulty::clock_rate`].
    pub fn clock_rate(&mut self, clock_rate: f64) -> Result<&mut Self> {
        self.difficulty.clock_rate(clock_rate)?;

        Ok(self)
    }

    /// See [`Difficulty::ar`].
    pub fn ar(&mut self, ar: f32, with_mods: bool) -> Result<&mut Self> {
        self.difficulty.ar(ar, with_mods)?;

        Ok(self)
    }

    /// See [`Difficulty::cs`].
    pub fn cs(&mut self, cs: f32, with_mods: bool) -> Result<&mut Self> {
        self.difficulty.cs(cs, with_mods)?;

        Ok(self)
    }

    /// See [`Difficulty::hp`].
    pub fn hp(&mut self, hp: f32, with_mods: bool) -> Result<&mut Self> {
        self.difficulty.hp(hp, with_mods)?;

        Ok(self)
    }

    /// See [`Difficulty::od`].
    pub fn od(&mut self, od: f32, with_mods: bool) -> Result<&mut Self> {
        self.difficulty.od(od, with_mods)?;

        Ok(self)
    }

    /// Adjust patterns as if the HR mod is enabled.
    ///
    /// Only relevant for osu!catch.
    pub fn hardrock_offsets(&mut self, hardrock_offsets: bool) -> &mut Self {
        self.difficulty.hardrock_offsets(hardrock_offsets);

        self
    }

    /// Whether the calculated attributes belong to an osu!lazer or osu!stable
    /// score.
    ///
    /// Defaults to `true`.
    ///
    /// This affects internal accuracy calculation because lazer considers
    /// slider heads for accuracy whereas stable does not.
    pub fn lazer(&mut self, lazer: bool) -> &mut Self {
        self.difficulty.lazer(lazer);

        self
    }

    /// Provide parameters through a [`ScoreState`].
    ///
    /// The state takes precedence over all other hitresult related values.
    pub fn state(&mut self, state: ScoreState) -> &mut Self {
        self.state = Some(state);

        self
    }

    /// Set the accuracy between `0.0` and `100.0`.
    pub fn accuracy(&mut self, acc: f64) -> Result<&mut Self> {
        Error::check_range("accuracy", acc, Self::MIN_ACCURACY, Self::MAX_ACCURACY)?;
        self.acc = Some(acc);

        Ok(self)
    }

    /// Specify the amount of misses of a play.
    pub fn misses(&mut self, misses: u32) -> &mut Self {
        self.misses = Some(misses);

        self
    }

    /// Specify the max combo of the play.
    ///
    /// Irrelevant for osu!mania.
    pub fn combo(&mut self, combo: u32) -> &mut Self {
        self.combo = Some(combo);

        self
    }

    /// Specify how hitresults should be generated.
    ///
    /// Defaults to [`HitResultPriority::BestCase`].
    pub fn hitresult_priority(&mut self, priority: HitResultPriority) -> &mut Self {
        self.hitresult_priority = priority;

        self
    }

    /// Specify the amount of "large tick" hits.
    ///
    /// Only relevant for osu!standard lazer scores. See
    /// [`ScoreState::osu_large_tick_hits`].
    pub fn large_tick_hits(&mut self, large_tick_hits: u32) -> &mut Self {
        self.large_tick_hits = Some(large_tick_hits);

        self
    }

    /// Specify the amount of "small tick" hits.
    ///
    /// Only relevant for osu!standard lazer scores without slider accuracy.
    pub fn small_tick_hits(&mut self, small_tick_hits: u32) -> &mut Self {
        self.small_tick_hits = Some(small_tick_hits);

        self
    }

    /// Specify the amount of hit slider ends.
    ///
    /// Only relevant for osu!standard lazer scores with slider accuracy.
    pub fn slider_end_hits(&mut self, slider_end_hits: u32) -> &mut Self {
        self.slider_end_hits = Some(slider_end_hits);

        self
    }

    /// Specify the amount of 300s of a play.
    pub fn n300(&mut self, n300: u32) -> &mut Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of 100s of a play.
    pub fn n100(&mut self, n100: u32) -> &mut Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of 50s of a play.
    ///
    /// Irrelevant for osu!taiko.
    pub fn n50(&mut self, n50: u32) -> &mut Self {
        self.n50 = Some(n50);

        self
    }

    /// Specify the amount of katus of a play.
    ///
    /// Only relevant for osu!catch for which it represents the amount of tiny
    /// droplet misses and osu!mania for which it repesents the amount of n200.
    pub fn n_katu(&mut self, n_katu: u32) -> &mut Self {
        self.n_katu = Some(n_katu);

        self
    }

    /// Specify the amount of gekis of a play.
    ///
    /// Only relevant for osu!mania for which it repesents the amount of n320.
    pub fn n_geki(&mut self, n_geki: u32) -> &mut Self {
        self.n_geki = Some(n_geki);

        self
    }

    /// The clock rate that will be used, either the custom one or the one
    /// derived from the mods.
    pub fn get_clock_rate(&self) -> f64 {
        self.difficulty.get_clock_rate()
    }

    /// Apply all settings onto the rating engine's calculator.
    fn apply<'map>(&self, mut performance: rosu_pp::Performance<'map>) -> rosu_pp::Performance<'map> {
        performance = performance
            .difficulty(self.difficulty.construct())
            .hitresult_priority(self.hitresult_priority.into());

        if let Some(combo) = self.combo {
            performance = performance.combo(combo);
        }

        if let Some(misses) = self.misses {
            performance = performance.misses(misses);
        }

        if let Some(large_tick_hits) = self.large_tick_hits {
            performance = performance.large_tick_hits(large_tick_hits);
        }

        if let Some(small_tick_hits) = self.small_tick_hits {
            performance = performance.small_tick_hits(small_tick_hits);
        }

        if let Some(slider_end_hits) = self.slider_end_hits {
            performance = performance.slider_end_hits(slider_end_hits);
        }

        if let Some(n300) = self.n300 {
            performance = performance.n300(n300);
        }

        if let Some(n100) = self.n100 {
            performance = performance.n100(n100);
        }

        if let Some(n50) = self.n50 {
            performance = performance.n50(n50);
        }

        if let Some(n_katu) = self.n_katu {
            performance = performance.n_katu(n_katu);
        }

        if let Some(n_geki) = self.n_geki {
            performance = performance.n_geki(n_geki);
        }

        if let Some(acc) = self.acc {
            performance = performance.accuracy(acc);
        }

        // Must come last so it overrides every single hitresult value
        if let Some(state) = self.state {
            performance = performance.state(state.into());
        }

        performance
    }

    fn check_mode(&self, attrs: &DifficultyAttributes) -> Result<()> {
        match self.difficulty.params().mode {
            Some(expected) if expected != attrs.mode() => Err(Error::ModeMismatch {
                expected,
                actual: attrs.mode(),
            }),
            _ => Ok(()),
        }
    }

    /// Calculate the performance attributes of a play on the given map.
    ///
    /// Difficulty attributes are calculated internally. If they are already
    /// available, use [`Performance::calculate_from_difficulty`] instead.
    pub fn calculate(&self, map: &Beatmap) -> Result<PerformanceAttributes> {
        let mode = self.difficulty.resolve_mode(map);
        let map = map.convert_ref(mode, &self.difficulty.engine_mods())?;

        tracing::debug!(
            %mode,
            clock_rate = self.get_clock_rate(),
            state = self.state.is_some(),
            "calculating performance"
        );

        let performance = self.apply(rosu_pp::Performance::new(&*map));

        Ok(performance.calculate().into())
    }

    /// Calculate the performance attributes based on previously calculated
    /// difficulty attributes.
    ///
    /// The attributes must have been calculated for the same map and
    /// difficulty settings. If a mode was specified, it must match the mode
    /// of the attributes.
    pub fn calculate_from_difficulty(
        &self,
        attrs: DifficultyAttributes,
    ) -> Result<PerformanceAttributes> {
        self.check_mode(&attrs)?;

        tracing::debug!(
            mode = %attrs.mode(),
            clock_rate = self.get_clock_rate(),
            state = self.state.is_some(),
            "calculating performance from difficulty attributes"
        );

        let attrs = rosu_pp::any::DifficultyAttributes::from(attrs);
        let performance = self.apply(rosu_pp::Performance::new(attrs));

        Ok(performance.calculate().into())
    }

    /// Create the [`ScoreState`] that would be used for performance
    /// calculation on the given map.
    pub fn generate_state(&self, map: &Beatmap) -> Result<ScoreState> {
        let mode = self.difficulty.resolve_mode(map);
        let map = map.convert_ref(mode, &self.difficulty.engine_mods())?;
        let mut performance = self.apply(rosu_pp::Performance::new(&*map));

        Ok(performance.generate_state().into())
    }

    /// Create the [`ScoreState`] that would be used for performance
    /// calculation based on previously calculated difficulty attributes.
    pub fn generate_state_from_difficulty(
        &self,
        attrs: DifficultyAttributes,
    ) -> Result<ScoreState> {
        self.check_mode(&attrs)?;

        let attrs = rosu_pp::any::DifficultyAttributes::from(attrs);
        let mut performance = self.apply(rosu_pp::Performance::new(attrs));

        Ok(performance.generate_state().into())
    }
}

#[cfg(test)]
mod tests {
    use rosu_pp::{osu::OsuDifficultyAttributes, taiko::TaikoDifficultyAttributes};

    use super::*;

    #[test]
    fn accuracy_range() {
        let mut performance = Performance::new();

        assert!(performance.accuracy(100.5).is_err());
        assert!(performance.accuracy(-1.0).is_err());
        assert_eq!(performance, Performance::new());

        performance.accuracy(95.0).unwrap();
        assert_eq!(performance.acc, Some(95.0));
    }

    #[test]
    fn mode_mismatch() {
        let mut performance = Performance::new();
        performance.mode(Mode::Taiko);

        let attrs = DifficultyAttributes::Osu(OsuDifficultyAttributes::default());
        let err = performance.calculate_from_difficulty(attrs).unwrap_err();

        assert!(matches!(
            err,
            Error::ModeMismatch {
                expected: Mode::Taiko,
                actual: Mode::Osu
            }
        ));

        let attrs = DifficultyAttributes::Taiko(TaikoDifficultyAttributes::default());
        assert!(performance.generate_state_from_difficulty(attrs).is_ok());
    }

    #[test]
    fn delegates_difficulty_settings() {
        let mut performance = Performance::new();
        performance.mods(64).clock_rate(1.2).unwrap();

        assert!((performance.get_clock_rate() - 1.2).abs() < f64::EPSILON);
        assert!(performance.od(30.0, false).is_err());
        assert_eq!(performance.get_difficulty().params().od, None);
    }
}
