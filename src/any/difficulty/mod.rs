use crate::{
    any::DifficultyAttributes,
    error::{Error, Result},
    model::{beatmap::Beatmap, mode::Mode, mods::ModsInput},
};

pub mod gradual;

/// A beatmap attribute that may or may not be adjusted by mods.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModsDependent {
    pub value: f32,
    /// Whether the value already includes the effect of mods.
    pub with_mods: bool,
}

impl ModsDependent {
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            with_mods: false,
        }
    }
}

/// Settings of a [`Difficulty`].
///
/// Unset values fall back to what the beatmap and mods specify.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DifficultyParameters {
    pub mode: Option<Mode>,
    pub mods: Option<ModsInput>,
    pub clock_rate: Option<f64>,
    pub ar: Option<ModsDependent>,
    pub cs: Option<ModsDependent>,
    pub hp: Option<ModsDependent>,
    pub od: Option<ModsDependent>,
    pub passed_objects: Option<u32>,
    pub hardrock_offsets: Option<bool>,
    pub lazer: Option<bool>,
}

/// Difficulty calculator on maps of any mode.
///
/// # Example
///
/// ```no_run
/// use rosu_pp_ffi::{Beatmap, Difficulty, Mode};
///
/// let map = Beatmap::from_path("./resources/2785319.osu").unwrap();
///
/// let mut difficulty = Difficulty::new();
/// difficulty.mode(Mode::Taiko).mods(8 + 64).passed_objects(500);
///
/// let attrs = difficulty.calculate(&map).unwrap();
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Difficulty {
    params: DifficultyParameters,
}

impl Difficulty {
    pub const MIN_CLOCK_RATE: f64 = 0.01;
    pub const MAX_CLOCK_RATE: f64 = 100.0;

    pub const MIN_ATTRIBUTE: f32 = -20.0;
    pub const MAX_ATTRIBUTE: f32 = 20.0;

    /// Create a new difficulty calculator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_params(params: DifficultyParameters) -> Self {
        Self { params }
    }

    pub const fn params(&self) -> &DifficultyParameters {
        &self.params
    }

    /// Calculate for the given mode instead of the map's mode.
    ///
    /// osu!standard maps will be converted if necessary.
    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.params.mode = Some(mode);

        self
    }

    /// Specify mods through bits, parsed acronyms, or [`Mods`].
    ///
    /// [`Mods`]: crate::Mods
    pub fn mods(&mut self, mods: impl Into<ModsInput>) -> &mut Self {
        self.params.mods = Some(mods.into());

        self
    }

    /// Specify mods through acronyms such as `"HDDT"`.
    ///
    /// On error, the previous mods are kept.
    pub fn mods_acronyms(&mut self, acronyms: &str) -> Result<&mut Self> {
        let mods = ModsInput::from_acronyms(acronyms)?;

        Ok(self.mods(mods))
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    ///
    /// If you want to calculate the difficulty after every few objects,
    /// instead of using [`Difficulty`] multiple times with different
    /// `passed_objects`, you should use [`GradualDifficulty`].
    ///
    /// [`GradualDifficulty`]: crate::GradualDifficulty
    pub fn passed_objects(&mut self, passed_objects: u32) -> &mut Self {
        self.params.passed_objects = Some(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(&mut self, clock_rate: f64) -> Result<&mut Self> {
        Error::check_range(
            "clock rate",
            clock_rate,
            Self::MIN_CLOCK_RATE,
            Self::MAX_CLOCK_RATE,
        )?;

        self.params.clock_rate = Some(clock_rate);

        Ok(self)
    }

    fn attribute(name: &'static str, value: f32, with_mods: bool) -> Result<ModsDependent> {
        Error::check_range(
            name,
            f64::from(value),
            f64::from(Self::MIN_ATTRIBUTE),
            f64::from(Self::MAX_ATTRIBUTE),
        )?;

        Ok(ModsDependent { value, with_mods })
    }

    /// Override a beatmap's set AR.
    ///
    /// Only relevant for osu! and osu!catch.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | -20     | 20      |
    pub fn ar(&mut self, ar: f32, with_mods: bool) -> Result<&mut Self> {
        self.params.ar = Some(Self::attribute("ar", ar, with_mods)?);

        Ok(self)
    }

    /// Override a beatmap's set CS.
    ///
    /// Only relevant for osu! and osu!catch.
    ///
    /// See [`Difficulty::ar`] for `with_mods` and the valid range.
    pub fn cs(&mut self, cs: f32, with_mods: bool) -> Result<&mut Self> {
        self.params.cs = Some(Self::attribute("cs", cs, with_mods)?);

        Ok(self)
    }

    /// Override a beatmap's set HP.
    ///
    /// See [`Difficulty::ar`] for `with_mods` and the valid range.
    pub fn hp(&mut self, hp: f32, with_mods: bool) -> Result<&mut Self> {
        self.params.hp = Some(Self::attribute("hp", hp, with_mods)?);

        Ok(self)
    }

    /// Override a beatmap's set OD.
    ///
    /// See [`Difficulty::ar`] for `with_mods` and the valid range.
    pub fn od(&mut self, od: f32, with_mods: bool) -> Result<&mut Self> {
        self.params.od = Some(Self::attribute("od", od, with_mods)?);

        Ok(self)
    }

    /// Adjust patterns as if the HR mod is enabled.
    ///
    /// Only relevant for osu!catch.
    pub fn hardrock_offsets(&mut self, hardrock_offsets: bool) -> &mut Self {
        self.params.hardrock_offsets = Some(hardrock_offsets);

        self
    }

    /// Whether the calculated attributes belong to an osu!lazer or osu!stable
    /// score.
    ///
    /// Defaults to `true`.
    pub fn lazer(&mut self, lazer: bool) -> &mut Self {
        self.params.lazer = Some(lazer);

        self
    }

    /// The clock rate that will be used, either the custom one or the one
    /// derived from the mods.
    pub fn get_clock_rate(&self) -> f64 {
        self.params.clock_rate.unwrap_or_else(|| {
            self.params
                .mods
                .as_ref()
                .map_or(1.0, ModsInput::clock_rate)
        })
    }

    pub(crate) fn engine_mods(&self) -> rosu_pp::GameMods {
        self.params
            .mods
            .as_ref()
            .map_or_else(|| rosu_pp::GameMods::from(0), ModsInput::to_engine)
    }

    /// The mode to calculate on a map.
    pub(crate) fn resolve_mode(&self, map: &Beatmap) -> Mode {
        self.params.mode.unwrap_or_else(|| map.mode())
    }

    /// Build the rating engine's calculator.
    pub(crate) fn construct(&self) -> rosu_pp::Difficulty {
        let DifficultyParameters {
            mode: _,
            ref mods,
            clock_rate,
            ar,
            cs,
            hp,
            od,
            passed_objects,
            hardrock_offsets,
            lazer,
        } = self.params;

        let mut difficulty = rosu_pp::Difficulty::new();

        if let Some(mods) = mods {
            difficulty = difficulty.mods(mods.to_engine());
        }

        if let Some(clock_rate) = clock_rate {
            difficulty = difficulty.clock_rate(clock_rate);
        }

        if let Some(ModsDependent { value, with_mods }) = ar {
            difficulty = difficulty.ar(value, with_mods);
        }

        if let Some(ModsDependent { value, with_mods }) = cs {
            difficulty = difficulty.cs(value, with_mods);
        }

        if let Some(ModsDependent { value, with_mods }) = hp {
            difficulty = difficulty.hp(value, with_mods);
        }

        if let Some(ModsDependent { value, with_mods }) = od {
            difficulty = difficulty.od(value, with_mods);
        }

        if let Some(passed_objects) = passed_objects {
            difficulty = difficulty.passed_objects(passed_objects);
        }

        if let Some(hardrock_offsets) = hardrock_offsets {
            difficulty = difficulty.hardrock_offsets(hardrock_offsets);
        }

        if let Some(lazer) = lazer {
            difficulty = difficulty.lazer(lazer);
        }

        difficulty
    }

    /// Calculate the difficulty attributes of a map.
    ///
    /// If a mode was specified that differs from the map's mode, a converted
    /// copy of the map is used. The map itself is never modified.
    pub fn calculate(&self, map: &Beatmap) -> Result<DifficultyAttributes> {
        let mode = self.resolve_mode(map);
        let map = map.convert_ref(mode, &self.engine_mods())?;

        tracing::debug!(
            %mode,
            clock_rate = self.get_clock_rate(),
            passed_objects = ?self.params.passed_objects,
            "calculating difficulty"
        );

        Ok(self.construct().calculate(&map).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        let mut difficulty = Difficulty::new();

        assert!(difficulty.clock_rate(0.0).is_err());
        assert!(difficulty.clock_rate(101.0).is_err());
        assert!(difficulty.ar(25.0, false).is_err());
        assert!(difficulty.od(-21.0, true).is_err());

        // failed setters leave previous values untouched
        assert_eq!(difficulty.params(), &DifficultyParameters::default());

        difficulty.clock_rate(1.2).unwrap().ar(9.5, true).unwrap();
        assert!(difficulty.clock_rate(500.0).is_err());

        assert_eq!(difficulty.params().clock_rate, Some(1.2));
        assert_eq!(
            difficulty.params().ar,
            Some(ModsDependent {
                value: 9.5,
                with_mods: true
            })
        );
    }

    #[test]
    fn clock_rate_resolution() {
        let mut difficulty = Difficulty::new();
        assert!((difficulty.get_clock_rate() - 1.0).abs() < f64::EPSILON);

        difficulty.mods(64);
        assert!((difficulty.get_clock_rate() - 1.5).abs() < f64::EPSILON);

        difficulty.clock_rate(1.1).unwrap();
        assert!((difficulty.get_clock_rate() - 1.1).abs() < f64::EPSILON);
    }

    #[test]
    fn acronyms_keep_previous_mods_on_error() {
        let mut difficulty = Difficulty::new();
        difficulty.mods(16);

        assert!(difficulty.mods_acronyms("HD!").is_err());
        assert_eq!(difficulty.params().mods, Some(ModsInput::Bits(16)));

        difficulty.mods_acronyms("hd dt").unwrap();
        assert!((difficulty.get_clock_rate() - 1.5).abs() < f64::EPSILON);
    }
}
