use std::fmt::{Display, Formatter, Result as FmtResult};

use rosu_mods::{
    serde::{GameModSeed, GameModsSeed},
    Acronym, GameMod, GameModIntermode, GameMods as GameModsLazer, GameModsIntermode,
};
use serde::de::DeserializeSeed;

use crate::{
    error::{Error, Result},
    model::mode::Mode,
};

/// A set of game mods scoped to a [`Mode`].
///
/// Mods can be created from acronyms, legacy bits, or JSON as serialized by
/// osu!lazer.
///
/// # Example
///
/// ```
/// use rosu_pp_ffi::{Mode, Mods};
///
/// let mods = Mods::from_acronyms("hd hr", Mode::Osu).unwrap();
///
/// assert_eq!(mods.bits(), 8 + 16);
/// assert_eq!(mods.acronyms(), "HDHR");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Mods {
    pub(crate) mods: GameModsLazer,
    mode: Mode,
}

impl Mods {
    /// Create an empty set of mods for the given mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            mods: GameModsLazer::new(),
            mode,
        }
    }

    /// Parse mods from acronyms such as `"HDHR"`, `"hd hr"`, or `"HD,DT"`.
    ///
    /// Parsing is case-insensitive. Acronyms that are unknown or not
    /// available for the mode cause an error.
    pub fn from_acronyms(acronyms: &str, mode: Mode) -> Result<Self> {
        let intermode = parse_acronyms(acronyms)?;

        let mods = intermode
            .try_with_mode(mode.into())
            .filter(|mods| !mods.iter().any(is_unknown))
            .ok_or_else(|| {
                Error::InvalidString(format!("`{acronyms}` contains mods that are invalid for {mode}"))
            })?;

        Ok(Self { mods, mode })
    }

    /// Create mods from legacy bits.
    ///
    /// Bits without a counterpart in the given mode are kept as unknown mods
    /// and can be stripped via [`Mods::remove_unknown_mods`].
    pub fn from_bits(bits: u32, mode: Mode) -> Self {
        Self {
            mods: GameModsIntermode::from_bits(bits).with_mode(mode.into()),
            mode,
        }
    }

    /// Deserialize mods from a JSON list of mods.
    ///
    /// If `deny_unknown_fields` is `true`, any unrecognized field of a mod
    /// causes an error, otherwise such fields are ignored.
    pub fn from_json(json: &str, mode: Mode, deny_unknown_fields: bool) -> Result<Self> {
        let mut d = serde_json::Deserializer::from_str(json);

        let mods = GameModsSeed::Mode {
            mode: mode.into(),
            deny_unknown_fields,
        }
        .deserialize(&mut d)?;

        d.end()?;

        Ok(Self { mods, mode })
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Insert a mod by its acronym.
    ///
    /// Returns `true` if the mod is valid for the mode and was not contained
    /// yet.
    pub fn insert(&mut self, acronym: &str) -> bool {
        let acronym = acronym.trim().to_ascii_uppercase();
        let gamemod = GameMod::new(&acronym, self.mode.into());

        self.insert_mod(gamemod)
    }

    /// Insert a mod given as a JSON object.
    ///
    /// Returns whether the mod is valid for the mode and was not contained
    /// yet.
    pub fn insert_json(&mut self, json: &str, deny_unknown_fields: bool) -> Result<bool> {
        let mut d = serde_json::Deserializer::from_str(json);

        let gamemod = GameModSeed::Mode {
            mode: self.mode.into(),
            deny_unknown_fields,
        }
        .deserialize(&mut d)?;

        d.end()?;

        Ok(self.insert_mod(gamemod))
    }

    fn insert_mod(&mut self, gamemod: GameMod) -> bool {
        if is_unknown(&gamemod) || self.mods.contains_acronym(gamemod.acronym()) {
            return false;
        }

        self.mods.insert(gamemod);

        true
    }

    /// Check whether a mod with the given acronym is contained.
    pub fn contains(&self, acronym: &str) -> bool {
        acronym
            .trim()
            .to_ascii_uppercase()
            .parse::<Acronym>()
            .is_ok_and(|acronym| self.mods.contains_acronym(acronym))
    }

    pub fn clear(&mut self) {
        self.mods = GameModsLazer::new();
    }

    /// Remove all mods that are not known for the mode.
    pub fn remove_unknown_mods(&mut self) {
        self.mods = std::mem::replace(&mut self.mods, GameModsLazer::new())
            .into_iter()
            .filter(|gamemod| !is_unknown(gamemod))
            .collect();
    }

    /// Remove incompatible or redundant mods so that the remaining mods form
    /// a valid combination.
    pub fn sanitize(&mut self) {
        self.mods.sanitize();
    }

    pub fn bits(&self) -> u32 {
        self.mods.bits()
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.len() == 0
    }

    /// Serialize the mods to pretty-printed JSON.
    pub fn json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.mods).map_err(Error::from)
    }

    /// All acronyms concatenated, e.g. `"HDDT"`.
    pub fn acronyms(&self) -> String {
        self.mods
            .iter()
            .map(|gamemod| gamemod.acronym())
            .fold(String::new(), |mut acronyms, acronym| {
                acronyms.push_str(acronym.as_str());

                acronyms
            })
    }

    /// The clock rate of the mods.
    ///
    /// Returns `None` if a mod has a variable clock rate such as `WindUp`.
    pub fn clock_rate(&self) -> Option<f64> {
        self.mods.clock_rate()
    }

    pub(crate) fn contains_intermode(&self, gamemod: GameModIntermode) -> bool {
        self.mods.contains_intermode(gamemod)
    }
}

impl Display for Mods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.acronyms())
    }
}

impl From<Mods> for rosu_pp::GameMods {
    fn from(mods: Mods) -> Self {
        Self::from(mods.mods)
    }
}

impl From<&Mods> for rosu_pp::GameMods {
    fn from(mods: &Mods) -> Self {
        Self::from(mods.mods.clone())
    }
}

fn is_unknown(gamemod: &GameMod) -> bool {
    matches!(
        gamemod,
        GameMod::UnknownOsu(_)
            | GameMod::UnknownTaiko(_)
            | GameMod::UnknownCatch(_)
            | GameMod::UnknownMania(_)
    )
}

/// Split acronyms on whitespace, `,`, and `+` and parse them into
/// mode-independent mods.
pub(crate) fn parse_acronyms(acronyms: &str) -> Result<GameModsIntermode> {
    let mut mods = GameModsIntermode::new();

    let tokens = acronyms
        .split(|c: char| c.is_whitespace() || c == ',' || c == '+')
        .filter(|token| !token.is_empty());

    for token in tokens {
        if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidString(format!(
                "`{token}` is not a valid acronym"
            )));
        }

        for gamemod in GameModsIntermode::from_acronyms(&token.to_ascii_uppercase()).iter() {
            mods.insert(gamemod);
        }
    }

    Ok(mods)
}

/// Mods as accepted by the calculators.
///
/// Bits and acronyms are mode-independent and only resolved once the mode of
/// a calculation is known.
#[derive(Clone, Debug, PartialEq)]
pub enum ModsInput {
    Bits(u32),
    Intermode(GameModsIntermode),
    Lazer(Mods),
}

impl ModsInput {
    /// Parse acronyms without a mode.
    pub fn from_acronyms(acronyms: &str) -> Result<Self> {
        parse_acronyms(acronyms).map(Self::Intermode)
    }

    pub(crate) fn to_engine(&self) -> rosu_pp::GameMods {
        match self {
            Self::Bits(bits) => rosu_pp::GameMods::from(*bits),
            Self::Intermode(mods) => rosu_pp::GameMods::from(mods.clone()),
            Self::Lazer(mods) => rosu_pp::GameMods::from(mods),
        }
    }

    pub(crate) fn clock_rate(&self) -> f64 {
        match self {
            Self::Bits(bits) => GameModsIntermode::from_bits(*bits).legacy_clock_rate(),
            Self::Intermode(mods) => mods.legacy_clock_rate(),
            Self::Lazer(mods) => mods.clock_rate().unwrap_or(1.0),
        }
    }

    fn contains(&self, gamemod: GameModIntermode) -> bool {
        match self {
            Self::Bits(bits) => GameModsIntermode::from_bits(*bits).contains(gamemod),
            Self::Intermode(mods) => mods.contains(gamemod),
            Self::Lazer(mods) => mods.contains_intermode(gamemod),
        }
    }

    pub(crate) fn hr(&self) -> bool {
        self.contains(GameModIntermode::HardRock)
    }

    pub(crate) fn ez(&self) -> bool {
        self.contains(GameModIntermode::Easy)
    }
}

impl Default for ModsInput {
    fn default() -> Self {
        Self::Bits(0)
    }
}

impl From<u32> for ModsInput {
    fn from(bits: u32) -> Self {
        Self::Bits(bits)
    }
}

impl From<GameModsIntermode> for ModsInput {
    fn from(mods: GameModsIntermode) -> Self {
        Self::Intermode(mods)
    }
}

impl From<Mods> for ModsInput {
    fn from(mods: Mods) -> Self {
        Self::Lazer(mods)
    }
}

impl From<&Mods> for ModsInput {
    fn from(mods: &Mods) -> Self {
        Self::Lazer(mods.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acronyms_are_case_insensitive() {
        let lower = Mods::from_acronyms("hd,dt", Mode::Osu).unwrap();
        let upper = Mods::from_acronyms("HD+DT", Mode::Osu).unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 2);
        assert!(lower.contains("hd"));
        assert!(!lower.contains("HR"));
    }

    #[test]
    fn invalid_acronyms() {
        assert!(Mods::from_acronyms("HD-DT", Mode::Osu).is_err());
        assert!(Mods::from_acronyms("XY", Mode::Osu).is_err());
        assert!(Mods::from_acronyms("", Mode::Taiko).unwrap().is_empty());
    }

    #[test]
    fn insert_reports_novelty() {
        let mut mods = Mods::new(Mode::Osu);

        assert!(mods.insert("hd"));
        assert!(!mods.insert("HD"));
        assert!(!mods.insert("XY"));
        assert_eq!(mods.bits(), 8);

        mods.clear();
        assert!(mods.is_empty());
    }

    #[test]
    fn clock_rate() {
        assert_eq!(Mods::new(Mode::Osu).clock_rate(), Some(1.0));
        assert_eq!(
            Mods::from_acronyms("DT", Mode::Osu).unwrap().clock_rate(),
            Some(1.5)
        );
        assert_eq!(ModsInput::Bits(256).clock_rate(), 0.75);
    }

    #[test]
    fn json() {
        let mods = Mods::from_json(
            r#"[{ "acronym": "DT", "settings": { "speed_change": 1.25 } }]"#,
            Mode::Osu,
            true,
        )
        .unwrap();

        assert_eq!(mods.clock_rate(), Some(1.25));
        assert!(mods.json().unwrap().contains("speed_change"));

        assert!(Mods::from_json(
            r#"[{ "acronym": "DT", "settings": { "unknown": 1 } }]"#,
            Mode::Osu,
            true
        )
        .is_err());

        assert!(Mods::from_json(
            r#"[{ "acronym": "DT", "settings": { "unknown": 1 } }]"#,
            Mode::Osu,
            false
        )
        .is_ok());
    }

    #[test]
    fn system_mods_are_known() {
        let mods = Mods::from_acronyms("TD SV2", Mode::Osu).unwrap();
        assert_eq!(mods.len(), 2);

        let mut mods = Mods::new(Mode::Taiko);
        assert!(mods.insert("SV2"));

        let mut mods = Mods::new(Mode::Osu);
        assert!(mods.insert("TD"));
        assert!(mods.contains("TD"));
    }

    #[test]
    fn remove_unknown() {
        // Relax has no mania counterpart
        let mut mods = Mods::from_bits(8 + 128, Mode::Mania);
        mods.remove_unknown_mods();

        assert!(mods.contains("HD"));
        assert!(mods.mods.iter().all(|gamemod| !is_unknown(gamemod)));

        // TouchDevice is a system mod, not an unknown one
        let mut mods = Mods::from_bits(8 + 4, Mode::Osu);
        mods.remove_unknown_mods();

        assert!(mods.contains("HD"));
        assert!(mods.contains("TD"));
    }
}
