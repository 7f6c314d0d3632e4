use std::mem;

use rosu_pp::model::beatmap::{
    BeatmapAttributes as EngineAttributes, BeatmapAttributesBuilder as EngineBuilder,
    HitWindows as EngineHitWindows,
};

use crate::{
    any::difficulty::Difficulty,
    error::Result,
    model::{mode::Mode, mods::ModsInput},
};

use super::Beatmap;

/// Summary struct for a [`Beatmap`]'s attributes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The health drain rate
    pub hp: f64,
    /// The clock rate with respect to mods.
    pub clock_rate: f64,
    /// The hit windows for approach rate and overall difficulty.
    pub hit_windows: HitWindows,
}

impl From<EngineAttributes> for BeatmapAttributes {
    fn from(attrs: EngineAttributes) -> Self {
        Self {
            ar: attrs.ar,
            od: attrs.od,
            cs: attrs.cs,
            hp: attrs.hp,
            clock_rate: attrs.clock_rate,
            hit_windows: attrs.hit_windows.into(),
        }
    }
}

/// AR and OD hit windows
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    /// Hit window for approach rate i.e. `TimePreempt` in milliseconds.
    pub ar: f64,
    /// Hit window for overall difficulty i.e. time to hit a 300 ("Great") in milliseconds.
    pub od_great: f64,
    /// Hit window for overall difficulty i.e. time to hit a 100 ("Ok") in milliseconds.
    ///
    /// `None` for osu!mania.
    pub od_ok: Option<f64>,
}

impl From<EngineHitWindows> for HitWindows {
    fn from(hit_windows: EngineHitWindows) -> Self {
        Self {
            ar: hit_windows.ar,
            od_great: hit_windows.od_great,
            od_ok: hit_windows.od_ok,
        }
    }
}

/// A builder for [`BeatmapAttributes`] and [`HitWindows`].
///
/// Mods are applied the same way as during difficulty calculation, including
/// the settings of `DifficultyAdjust`.
#[derive(Clone, Debug)]
pub struct BeatmapAttributesBuilder {
    inner: EngineBuilder,
}

impl BeatmapAttributesBuilder {
    /// Create a new [`BeatmapAttributesBuilder`].
    ///
    /// The mode will be `Mode::Osu` and attributes are set to `5.0`.
    pub fn new() -> Self {
        Self {
            inner: EngineBuilder::new(),
        }
    }

    fn update(&mut self, f: impl FnOnce(EngineBuilder) -> EngineBuilder) -> &mut Self {
        self.inner = f(mem::take(&mut self.inner));

        self
    }

    /// Use the given [`Beatmap`]'s attributes, mode, and convert status.
    pub fn map(&mut self, map: &Beatmap) -> &mut Self {
        self.update(|inner| inner.map(&map.inner))
    }

    /// Specify the approach rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn ar(&mut self, ar: f32, with_mods: bool) -> &mut Self {
        self.update(|inner| inner.ar(ar, with_mods))
    }

    /// Specify the overall difficulty.
    ///
    /// See [`BeatmapAttributesBuilder::ar`] for `with_mods`.
    pub fn od(&mut self, od: f32, with_mods: bool) -> &mut Self {
        self.update(|inner| inner.od(od, with_mods))
    }

    /// Specify the circle size.
    ///
    /// See [`BeatmapAttributesBuilder::ar`] for `with_mods`.
    pub fn cs(&mut self, cs: f32, with_mods: bool) -> &mut Self {
        self.update(|inner| inner.cs(cs, with_mods))
    }

    /// Specify the drain rate.
    ///
    /// See [`BeatmapAttributesBuilder::ar`] for `with_mods`.
    pub fn hp(&mut self, hp: f32, with_mods: bool) -> &mut Self {
        self.update(|inner| inner.hp(hp, with_mods))
    }

    /// Specify the mods through bits, parsed acronyms, or [`Mods`].
    ///
    /// [`Mods`]: crate::Mods
    pub fn mods(&mut self, mods: impl Into<ModsInput>) -> &mut Self {
        let mods = mods.into().to_engine();

        self.update(|inner| inner.mods(mods))
    }

    /// Specify mods through acronyms such as `"HDDT"`.
    ///
    /// On error, the previous mods are kept.
    pub fn mods_acronyms(&mut self, acronyms: &str) -> Result<&mut Self> {
        let mods = ModsInput::from_acronyms(acronyms)?;

        Ok(self.mods(mods))
    }

    /// Specify a custom clock rate.
    pub fn clock_rate(&mut self, clock_rate: f64) -> &mut Self {
        self.update(|inner| inner.clock_rate(clock_rate))
    }

    /// Specify a [`Mode`] and whether it's a converted map.
    pub fn mode(&mut self, mode: Mode, is_convert: bool) -> &mut Self {
        self.update(|inner| inner.mode(mode.into(), is_convert))
    }

    /// Specify all settings through [`Difficulty`].
    pub fn difficulty(&mut self, difficulty: &Difficulty) -> &mut Self {
        let difficulty = difficulty.construct();

        self.update(|inner| inner.difficulty(&difficulty))
    }

    /// The clock rate that will be used, either the custom one or the one
    /// derived from the mods.
    pub fn get_clock_rate(&self) -> f64 {
        self.build().clock_rate
    }

    /// Calculate the AR and OD hit windows.
    pub fn hit_windows(&self) -> HitWindows {
        self.build().hit_windows
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        self.inner.build().into()
    }
}

impl Default for BeatmapAttributesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Beatmap> for BeatmapAttributesBuilder {
    fn from(map: &Beatmap) -> Self {
        map.attributes()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::mods::Mods;

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn nomod_is_identity() {
        let attrs = BeatmapAttributesBuilder::new().ar(9.0, false).od(8.0, false).build();

        assert_close(attrs.ar, 9.0);
        assert_close(attrs.od, 8.0);
        assert_close(attrs.clock_rate, 1.0);
        assert_close(attrs.hit_windows.ar, 600.0);
        assert!(attrs.hit_windows.od_ok.is_some());
    }

    #[test]
    fn double_time_shortens_windows() {
        let nomod = BeatmapAttributesBuilder::new().ar(9.0, false).od(8.0, false).build();

        let attrs = BeatmapAttributesBuilder::new()
            .ar(9.0, false)
            .od(8.0, false)
            .mods(64)
            .build();

        assert_close(attrs.clock_rate, 1.5);
        assert_close(attrs.hit_windows.ar, nomod.hit_windows.ar / 1.5);
        assert!(attrs.ar > nomod.ar);
        assert!(attrs.hit_windows.od_great < nomod.hit_windows.od_great);
    }

    #[test]
    fn fixed_values_ignore_mods() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(9.0, true)
            .cs(4.0, true)
            .mods(16 + 64)
            .build();

        assert_close(attrs.ar, 9.0);
        assert_close(attrs.cs, 4.0);
    }

    #[test]
    fn hardrock_caps_at_ten() {
        let attrs = BeatmapAttributesBuilder::new()
            .ar(9.0, false)
            .cs(8.0, false)
            .hp(8.0, false)
            .mods(16)
            .build();

        assert_close(attrs.ar, 10.0);
        assert_close(attrs.cs, 10.0);
        assert_close(attrs.hp, 10.0);
    }

    #[test]
    fn difficulty_adjust_overrides() {
        let mods = Mods::from_json(
            r#"[{ "acronym": "DA", "settings": { "approach_rate": 9.8, "overall_difficulty": 2.0 } }]"#,
            Mode::Osu,
            true,
        )
        .unwrap();

        let attrs = BeatmapAttributesBuilder::new()
            .ar(9.0, false)
            .od(8.0, false)
            .mods(mods)
            .build();

        assert_close(attrs.ar, 9.8);
        assert_close(attrs.od, 2.0);
    }

    #[test]
    fn mania_has_no_ok_window() {
        let attrs = BeatmapAttributesBuilder::new()
            .mode(Mode::Mania, false)
            .od(8.0, false)
            .build();

        assert!(attrs.hit_windows.od_ok.is_none());
        assert!(attrs.hit_windows.od_great > 0.0);
    }

    #[test]
    fn custom_clock_rate_wins() {
        let mut builder = BeatmapAttributesBuilder::new();
        builder.mods(64).clock_rate(1.2);

        assert_close(builder.get_clock_rate(), 1.2);
    }

    #[test]
    fn adopts_difficulty_settings() {
        let mut difficulty = Difficulty::new();
        difficulty.mods(64).ar(7.0, true).unwrap();

        let attrs = BeatmapAttributesBuilder::new()
            .ar(9.0, false)
            .difficulty(&difficulty)
            .build();

        assert_close(attrs.clock_rate, 1.5);
        assert_close(attrs.ar, 7.0);
    }
}
