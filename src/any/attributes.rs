use rosu_pp::{
    any::{
        DifficultyAttributes as EngineDifficultyAttributes,
        PerformanceAttributes as EnginePerformanceAttributes,
    },
    catch::{CatchDifficultyAttributes, CatchPerformanceAttributes},
    mania::{ManiaDifficultyAttributes, ManiaPerformanceAttributes},
    osu::{OsuDifficultyAttributes, OsuPerformanceAttributes},
    taiko::{TaikoDifficultyAttributes, TaikoPerformanceAttributes},
};

use crate::model::mode::Mode;

/// The result of a difficulty calculation based on the mode.
#[derive(Clone, Debug, PartialEq)]
pub enum DifficultyAttributes {
    /// osu!standard difficulty calculation result.
    Osu(OsuDifficultyAttributes),
    /// osu!taiko difficulty calculation result.
    Taiko(TaikoDifficultyAttributes),
    /// osu!catch difficulty calculation result.
    Catch(CatchDifficultyAttributes),
    /// osu!mania difficulty calculation result.
    Mania(ManiaDifficultyAttributes),
}

impl DifficultyAttributes {
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Osu(_) => Mode::Osu,
            Self::Taiko(_) => Mode::Taiko,
            Self::Catch(_) => Mode::Catch,
            Self::Mania(_) => Mode::Mania,
        }
    }

    /// The star value.
    pub const fn stars(&self) -> f64 {
        match self {
            Self::Osu(attrs) => attrs.stars,
            Self::Taiko(attrs) => attrs.stars,
            Self::Catch(attrs) => attrs.stars,
            Self::Mania(attrs) => attrs.stars,
        }
    }

    /// The maximum combo of the map.
    pub fn max_combo(&self) -> u32 {
        match self {
            Self::Osu(attrs) => attrs.max_combo,
            Self::Taiko(attrs) => attrs.max_combo,
            Self::Catch(attrs) => attrs.max_combo(),
            Self::Mania(attrs) => attrs.max_combo,
        }
    }

    /// Human-readable representation.
    pub fn debug_string(&self) -> String {
        format!("{self:#?}")
    }
}

impl From<EngineDifficultyAttributes> for DifficultyAttributes {
    fn from(attrs: EngineDifficultyAttributes) -> Self {
        match attrs {
            EngineDifficultyAttributes::Osu(attrs) => Self::Osu(attrs),
            EngineDifficultyAttributes::Taiko(attrs) => Self::Taiko(attrs),
            EngineDifficultyAttributes::Catch(attrs) => Self::Catch(attrs),
            EngineDifficultyAttributes::Mania(attrs) => Self::Mania(attrs),
        }
    }
}

impl From<DifficultyAttributes> for EngineDifficultyAttributes {
    fn from(attrs: DifficultyAttributes) -> Self {
        match attrs {
            DifficultyAttributes::Osu(attrs) => Self::Osu(attrs),
            DifficultyAttributes::Taiko(attrs) => Self::Taiko(attrs),
            DifficultyAttributes::Catch(attrs) => Self::Catch(attrs),
            DifficultyAttributes::Mania(attrs) => Self::Mania(attrs),
        }
    }
}

/// The result of a performance calculation based on the mode.
#[derive(Clone, Debug, PartialEq)]
pub enum PerformanceAttributes {
    /// osu!standard performance calculation result.
    Osu(OsuPerformanceAttributes),
    /// osu!taiko performance calculation result.
    Taiko(TaikoPerformanceAttributes),
    /// osu!catch performance calculation result.
    Catch(CatchPerformanceAttributes),
    /// osu!mania performance calculation result.
    Mania(ManiaPerformanceAttributes),
}

impl PerformanceAttributes {
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Osu(_) => Mode::Osu,
            Self::Taiko(_) => Mode::Taiko,
            Self::Catch(_) => Mode::Catch,
            Self::Mania(_) => Mode::Mania,
        }
    }

    /// The pp value.
    pub const fn pp(&self) -> f64 {
        match self {
            Self::Osu(attrs) => attrs.pp,
            Self::Taiko(attrs) => attrs.pp,
            Self::Catch(attrs) => attrs.pp,
            Self::Mania(attrs) => attrs.pp,
        }
    }

    /// The star value.
    pub const fn stars(&self) -> f64 {
        match self {
            Self::Osu(attrs) => attrs.difficulty.stars,
            Self::Taiko(attrs) => attrs.difficulty.stars,
            Self::Catch(attrs) => attrs.difficulty.stars,
            Self::Mania(attrs) => attrs.difficulty.stars,
        }
    }

    /// The maximum combo of the map.
    pub fn max_combo(&self) -> u32 {
        match self {
            Self::Osu(attrs) => attrs.difficulty.max_combo,
            Self::Taiko(attrs) => attrs.difficulty.max_combo,
            Self::Catch(attrs) => attrs.difficulty.max_combo(),
            Self::Mania(attrs) => attrs.difficulty.max_combo,
        }
    }

    /// The difficulty attributes that were used for the calculation.
    pub fn difficulty_attributes(&self) -> DifficultyAttributes {
        match self {
            Self::Osu(attrs) => DifficultyAttributes::Osu(attrs.difficulty.clone()),
            Self::Taiko(attrs) => DifficultyAttributes::Taiko(attrs.difficulty.clone()),
            Self::Catch(attrs) => DifficultyAttributes::Catch(attrs.difficulty.clone()),
            Self::Mania(attrs) => DifficultyAttributes::Mania(attrs.difficulty.clone()),
        }
    }

    /// Human-readable representation.
    pub fn debug_string(&self) -> String {
        format!("{self:#?}")
    }
}

impl From<EnginePerformanceAttributes> for PerformanceAttributes {
    fn from(attrs: EnginePerformanceAttributes) -> Self {
        match attrs {
            EnginePerformanceAttributes::Osu(attrs) => Self::Osu(attrs),
            EnginePerformanceAttributes::Taiko(attrs) => Self::Taiko(attrs),
            EnginePerformanceAttributes::Catch(attrs) => Self::Catch(attrs),
            EnginePerformanceAttributes::Mania(attrs) => Self::Mania(attrs),
        }
    }
}

impl From<PerformanceAttributes> for DifficultyAttributes {
    fn from(attrs: PerformanceAttributes) -> Self {
        match attrs {
            PerformanceAttributes::Osu(attrs) => Self::Osu(attrs.difficulty),
            PerformanceAttributes::Taiko(attrs) => Self::Taiko(attrs.difficulty),
            PerformanceAttributes::Catch(attrs) => Self::Catch(attrs.difficulty),
            PerformanceAttributes::Mania(attrs) => Self::Mania(attrs.difficulty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_matches_variant() {
        let osu = DifficultyAttributes::Osu(OsuDifficultyAttributes::default());
        let mania = DifficultyAttributes::Mania(ManiaDifficultyAttributes::default());

        assert_eq!(osu.mode(), Mode::Osu);
        assert_eq!(mania.mode(), Mode::Mania);

        let engine = EngineDifficultyAttributes::from(osu.clone());
        assert_eq!(DifficultyAttributes::from(engine), osu);
    }

    #[test]
    fn debug_string_names_variant() {
        let attrs = PerformanceAttributes::Taiko(TaikoPerformanceAttributes::default());

        assert!(attrs.debug_string().starts_with("Taiko("));
        assert_eq!(attrs.difficulty_attributes().mode(), Mode::Taiko);
    }
}
