pub mod beatmap;
pub mod hit_object;
pub mod mode;
pub mod mods;
