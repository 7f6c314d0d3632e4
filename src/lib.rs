//! Calculator orchestration and C bindings for [osu!] difficulty and performance calculation.
//!
//! ## Description
//!
//! `rosu-pp-ffi` wraps the [`rosu-pp`] rating engine with owned, mode-aware builder types
//! that are straightforward to drive from other languages. Mods can be given as acronyms,
//! legacy bits or JSON, beatmaps can be converted between modes, and both one-shot and
//! gradual calculations are available for all four modes.
//!
//! ## Usage
//!
//! ```no_run
//! use rosu_pp_ffi::{Beatmap, Difficulty, Mods, Mode, Performance};
//!
//! let map = Beatmap::from_path("./resources/2785319.osu").unwrap();
//! let mods = Mods::from_acronyms("HDHR", Mode::Osu).unwrap();
//!
//! let mut difficulty = Difficulty::new();
//! difficulty.mods(mods.clone());
//!
//! let diff_attrs = difficulty.calculate(&map).unwrap();
//! let stars = diff_attrs.stars();
//!
//! let mut performance = Performance::new();
//! performance
//!     .mods(mods)
//!     .combo(789)
//!     .misses(2)
//!     .accuracy(99.2)
//!     .unwrap();
//!
//! let pp = performance
//!     .calculate_from_difficulty(diff_attrs)
//!     .unwrap()
//!     .pp();
//!
//! println!("Stars: {stars} | PP: {pp}");
//! ```
//!
//! ## Gradual calculation
//!
//! [`GradualDifficulty`] and [`GradualPerformance`] process a map one hit object at a time
//! and yield the attributes up to the current object after each step.
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | Enables the `capi` feature |
//! | `capi` | Exposes the `rosu_pp_*` C ABI |
//! | `sync` | Makes gradual calculators `Send` | [`rosu-pp`]
//! | `decode-tracing` | Errors encountered during beatmap decoding are logged through `tracing::error`. | [`tracing`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [`rosu-pp`]: https://docs.rs/rosu-pp
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::return_self_not_must_use
)]

#[doc(inline)]
pub use self::{
    any::{
        DifficultyAttributes, PerformanceAttributes, ScoreState,
        difficulty::{Difficulty, gradual::GradualDifficulty},
        performance::{HitResultPriority, Performance, gradual::GradualPerformance},
    },
    error::{Error, ErrorCategory, Result},
    model::{
        beatmap::{Beatmap, BeatmapAttributes, BeatmapAttributesBuilder, HitWindows},
        mode::Mode,
        mods::Mods,
    },
};

/// Types for calculations of any mode.
pub mod any;

/// Types used in and around this crate.
pub mod model;

/// The C ABI.
#[cfg(feature = "capi")]
pub mod capi;

mod error;
