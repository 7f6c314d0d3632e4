use std::fmt::{Display, Formatter, Result as FmtResult};

use rosu_map::section::general::GameMode;

use crate::error::Error;

/// The four osu! game modes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Osu = 0,
    Taiko = 1,
    Catch = 2,
    Mania = 3,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Osu => "osu",
            Self::Taiko => "taiko",
            Self::Catch => "catch",
            Self::Mania => "mania",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl From<GameMode> for Mode {
    fn from(mode: GameMode) -> Self {
        match mode {
            GameMode::Osu => Self::Osu,
            GameMode::Taiko => Self::Taiko,
            GameMode::Catch => Self::Catch,
            GameMode::Mania => Self::Mania,
        }
    }
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Osu => Self::Osu,
            Mode::Taiko => Self::Taiko,
            Mode::Catch => Self::Catch,
            Mode::Mania => Self::Mania,
        }
    }
}

impl From<rosu_mods::GameMode> for Mode {
    fn from(mode: rosu_mods::GameMode) -> Self {
        match mode {
            rosu_mods::GameMode::Osu => Self::Osu,
            rosu_mods::GameMode::Taiko => Self::Taiko,
            rosu_mods::GameMode::Catch => Self::Catch,
            rosu_mods::GameMode::Mania => Self::Mania,
        }
    }
}

impl From<Mode> for rosu_mods::GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Osu => Self::Osu,
            Mode::Taiko => Self::Taiko,
            Mode::Catch => Self::Catch,
            Mode::Mania => Self::Mania,
        }
    }
}

impl TryFrom<u32> for Mode {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Osu),
            1 => Ok(Self::Taiko),
            2 => Ok(Self::Catch),
            3 => Ok(Self::Mania),
            _ => Err(Error::OutOfRange {
                name: "mode",
                value: f64::from(value),
                min: 0.0,
                max: 3.0,
            }),
        }
    }
}
