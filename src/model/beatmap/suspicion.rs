use std::fmt::{Display, Formatter, Result as FmtResult};

use rosu_pp::model::beatmap::TooSuspicious as EngineTooSuspicious;

/// Reason why [`Beatmap::check_suspicion`] flagged a map.
///
/// [`Beatmap::check_suspicion`]: crate::Beatmap::check_suspicion
#[repr(C)]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum TooSuspicious {
    /// Notes are too dense time-wise.
    Density = 1,
    /// The map seems too long.
    Length = 2,
    /// Too many objects.
    ObjectCount = 3,
    /// General red flag.
    RedFlag = 4,
    /// Too many sliders' positions were suspicious.
    SliderPositions = 5,
    /// Too many sliders had a very high amount of repeats.
    SliderRepeats = 6,
}

impl From<EngineTooSuspicious> for TooSuspicious {
    fn from(sus: EngineTooSuspicious) -> Self {
        match sus {
            EngineTooSuspicious::Density => Self::Density,
            EngineTooSuspicious::Length => Self::Length,
            EngineTooSuspicious::ObjectCount => Self::ObjectCount,
            EngineTooSuspicious::SliderPositions => Self::SliderPositions,
            EngineTooSuspicious::SliderRepeats => Self::SliderRepeats,
            // non-exhaustive upstream
            _ => Self::RedFlag,
        }
    }
}

impl Display for TooSuspicious {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let reason = match self {
            Self::Density => "notes are too dense",
            Self::Length => "map is too long",
            Self::ObjectCount => "too many objects",
            Self::RedFlag => "general red flag",
            Self::SliderPositions => "too many suspicious slider positions",
            Self::SliderRepeats => "too many slider repeats",
        };

        f.write_str(reason)
    }
}
