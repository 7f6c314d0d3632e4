pub use self::{
    attributes::{DifficultyAttributes, PerformanceAttributes},
    difficulty::{Difficulty, DifficultyParameters, ModsDependent, gradual::GradualDifficulty},
    performance::{HitResultPriority, Performance, gradual::GradualPerformance},
    score_state::{ScoreOrigin, ScoreState, calculate_accuracy},
};

pub use rosu_pp::{
    catch::{CatchDifficultyAttributes, CatchPerformanceAttributes},
    mania::{ManiaDifficultyAttributes, ManiaPerformanceAttributes},
    osu::{OsuDifficultyAttributes, OsuPerformanceAttributes},
    taiko::{TaikoDifficultyAttributes, TaikoPerformanceAttributes},
};

mod attributes;
pub mod difficulty;
pub mod performance;
mod score_state;
