use rosu_pp::model::hit_object::{
    HitObject as EngineHitObject, HitObjectKind as EngineHitObjectKind, HoldNote, Slider, Spinner,
};

/// Position of a hit object in osu!pixels.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

/// Read-only view of a beatmap's hit object.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, HitObjectKind::Slider { .. })
    }

    /// Whether the hitobject is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, HitObjectKind::Spinner { .. })
    }

    /// Whether the hitobject is a hold note.
    pub const fn is_hold_note(&self) -> bool {
        matches!(self.kind, HitObjectKind::Hold { .. })
    }

    /// The end time of the object.
    ///
    /// Sliders only know their expected distance so their start time is
    /// returned.
    pub fn end_time(&self) -> f64 {
        match self.kind {
            HitObjectKind::Circle | HitObjectKind::Slider { .. } => self.start_time,
            HitObjectKind::Spinner { duration } | HitObjectKind::Hold { duration } => {
                self.start_time + duration
            }
        }
    }
}

/// Additional data for a [`HitObject`].
///
/// Note that each mode handles hit objects differently.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider {
        repeats: u32,
        /// Negative if the slider has no expected distance.
        expected_dist: f64,
    },
    Spinner {
        duration: f64,
    },
    Hold {
        duration: f64,
    },
}

impl From<&EngineHitObject> for HitObject {
    fn from(h: &EngineHitObject) -> Self {
        let kind = match h.kind {
            EngineHitObjectKind::Circle => HitObjectKind::Circle,
            EngineHitObjectKind::Slider(Slider {
                repeats,
                expected_dist,
                ..
            }) => HitObjectKind::Slider {
                repeats: repeats as u32,
                expected_dist: expected_dist.unwrap_or(-1.0),
            },
            EngineHitObjectKind::Spinner(Spinner { duration, .. }) => {
                HitObjectKind::Spinner { duration }
            }
            EngineHitObjectKind::Hold(HoldNote { duration, .. }) => HitObjectKind::Hold { duration },
        };

        Self {
            pos: Pos {
                x: h.pos.x,
                y: h.pos.y,
            },
            start_time: h.start_time,
            kind,
        }
    }
}
