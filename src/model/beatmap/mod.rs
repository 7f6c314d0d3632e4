use std::{borrow::Cow, path::Path};

use rosu_map::section::general::GameMode;

pub use self::{
    attributes::{BeatmapAttributes, BeatmapAttributesBuilder, HitWindows},
    suspicion::TooSuspicious,
};

use crate::{
    error::{Error, Result},
    model::{hit_object::HitObject, mode::Mode, mods::Mods},
};

mod attributes;
mod suspicion;

/// A parsed beatmap.
///
/// Cloning creates an independent copy; converting changes the mode and hit
/// objects in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    pub(crate) inner: rosu_pp::Beatmap,
}

impl Beatmap {
    /// Parse a [`Beatmap`] by providing a path to a `.osu` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        rosu_pp::Beatmap::from_path(path)
            .map(|inner| Self { inner })
            .map_err(Error::from)
    }

    /// Parse a [`Beatmap`] by providing the content of a `.osu` file.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        rosu_pp::Beatmap::from_bytes(bytes)
            .map(|inner| Self { inner })
            .map_err(Error::from)
    }

    /// Convert the map to the given mode.
    ///
    /// Converting to the current mode is a no-op. Only osu!standard maps can
    /// be converted and only once.
    pub fn convert(&mut self, mode: Mode, mods: &Mods) -> Result<()> {
        let from = self.mode();

        if from == mode {
            return Ok(());
        }

        self.inner
            .convert_mut(GameMode::from(mode), &rosu_pp::GameMods::from(mods))
            .map_err(|err| {
                tracing::debug!(%from, to = %mode, "failed to convert beatmap: {err}");

                Error::Convert(err.to_string())
            })
    }

    /// The map in the given mode, converted only if necessary.
    pub(crate) fn convert_ref(
        &self,
        mode: Mode,
        mods: &rosu_pp::GameMods,
    ) -> Result<Cow<'_, rosu_pp::Beatmap>> {
        self.inner
            .convert_ref(GameMode::from(mode), mods)
            .map_err(|err| Error::Convert(err.to_string()))
    }

    pub fn mode(&self) -> Mode {
        self.inner.mode.into()
    }

    /// The beats per minute of the map.
    pub fn bpm(&self) -> f64 {
        self.inner.bpm()
    }

    /// Sum up the duration of all breaks (in milliseconds).
    pub fn total_break_time(&self) -> f64 {
        self.inner.total_break_time()
    }

    pub fn version(&self) -> i32 {
        self.inner.version
    }

    pub fn is_convert(&self) -> bool {
        self.inner.is_convert
    }

    pub fn stack_leniency(&self) -> f32 {
        self.inner.stack_leniency
    }

    pub fn ar(&self) -> f32 {
        self.inner.ar
    }

    pub fn cs(&self) -> f32 {
        self.inner.cs
    }

    pub fn hp(&self) -> f32 {
        self.inner.hp
    }

    pub fn od(&self) -> f32 {
        self.inner.od
    }

    pub fn slider_multiplier(&self) -> f64 {
        self.inner.slider_multiplier
    }

    pub fn slider_tick_rate(&self) -> f64 {
        self.inner.slider_tick_rate
    }

    /// The amount of hit objects.
    pub fn n_objects(&self) -> usize {
        self.inner.hit_objects.len()
    }

    /// The hit object at the given index.
    pub fn hit_object(&self, idx: usize) -> Option<HitObject> {
        self.inner.hit_objects.get(idx).map(HitObject::from)
    }

    /// Iterate over all hit objects in order.
    pub fn hit_objects(&self) -> impl ExactSizeIterator<Item = HitObject> + '_ {
        self.inner.hit_objects.iter().map(HitObject::from)
    }

    /// Check whether hitobjects appear too suspicious for further calculation.
    ///
    /// Sometimes a [`Beatmap`] isn't created for gameplay but rather to test
    /// the limits of osu! itself. Difficulty- and/or performance calculation
    /// should likely be avoided on these maps due to potential performance
    /// issues.
    pub fn check_suspicion(&self) -> Result<(), TooSuspicious> {
        self.inner.check_suspicion().map_err(TooSuspicious::from)
    }

    /// Builder for the map's attributes after applying mods.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        let mut builder = BeatmapAttributesBuilder::new();
        builder.map(self);

        builder
    }
}

impl From<rosu_pp::Beatmap> for Beatmap {
    fn from(inner: rosu_pp::Beatmap) -> Self {
        Self { inner }
    }
}
