//! Asset kinds for PCK entries.
//!
//! The discriminants are persisted by the binary codec and are frozen.

use std::collections::HashMap;
use std::fmt;

use crate::error::PckError;

/// The type tag attached to every packed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum AssetKind {
    /// Player skin image (`*.png`).
    Skin = 0,
    /// Cape image (`*.png`).
    Cape = 1,
    /// Block/item texture (`*.png`).
    Texture = 2,
    /// UI data (`*.fui`).
    UIData = 3,
    /// The "0" info file.
    Info = 4,
    /// `(x16|x32|x64)Info.pck`.
    TexturePackInfo = 5,
    /// `languages.loc` / `localisation.loc`.
    Localisation = 6,
    /// `GameRules.grf`.
    GameRules = 7,
    /// `audio.pck`.
    Audio = 8,
    /// `colours.col`.
    ColourTable = 9,
    /// `GameRules.grh`.
    GameRulesHeader = 10,
    /// `Skins.pck`.
    SkinData = 11,
    /// `models.bin`.
    Models = 12,
    /// `behaviours.bin`.
    Behaviours = 13,
    /// `entityMaterials.bin`.
    Material = 14,
}

lazy_static::lazy_static! {
    /// Filenames that always carry the same kind, keyed by lowercase basename.
    static ref WELL_KNOWN_FILENAMES: HashMap<&'static str, AssetKind> = {
        let mut m = HashMap::new();
        m.insert("0", AssetKind::Info);
        m.insert("languages.loc", AssetKind::Localisation);
        m.insert("localisation.loc", AssetKind::Localisation);
        m.insert("gamerules.grf", AssetKind::GameRules);
        m.insert("audio.pck", AssetKind::Audio);
        m.insert("colours.col", AssetKind::ColourTable);
        m.insert("gamerules.grh", AssetKind::GameRulesHeader);
        m.insert("skins.pck", AssetKind::SkinData);
        m.insert("models.bin", AssetKind::Models);
        m.insert("behaviours.bin", AssetKind::Behaviours);
        m.insert("entitymaterials.bin", AssetKind::Material);
        m.insert("x16info.pck", AssetKind::TexturePackInfo);
        m.insert("x32info.pck", AssetKind::TexturePackInfo);
        m.insert("x64info.pck", AssetKind::TexturePackInfo);
        m
    };
}

impl AssetKind {
    /// Every kind in discriminant order.
    pub const ALL: [AssetKind; 15] = [
        AssetKind::Skin,
        AssetKind::Cape,
        AssetKind::Texture,
        AssetKind::UIData,
        AssetKind::Info,
        AssetKind::TexturePackInfo,
        AssetKind::Localisation,
        AssetKind::GameRules,
        AssetKind::Audio,
        AssetKind::ColourTable,
        AssetKind::GameRulesHeader,
        AssetKind::SkinData,
        AssetKind::Models,
        AssetKind::Behaviours,
        AssetKind::Material,
    ];

    /// Creates an AssetKind from its persisted integer.
    pub fn from_u32(v: u32) -> Option<AssetKind> {
        AssetKind::ALL.get(v as usize).copied()
    }

    /// Returns the persisted integer for this kind.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            AssetKind::Skin => "Skin",
            AssetKind::Cape => "Cape",
            AssetKind::Texture => "Texture",
            AssetKind::UIData => "UIData",
            AssetKind::Info => "Info",
            AssetKind::TexturePackInfo => "TexturePackInfo",
            AssetKind::Localisation => "Localisation",
            AssetKind::GameRules => "GameRules",
            AssetKind::Audio => "Audio",
            AssetKind::ColourTable => "ColourTable",
            AssetKind::GameRulesHeader => "GameRulesHeader",
            AssetKind::SkinData => "SkinData",
            AssetKind::Models => "Models",
            AssetKind::Behaviours => "Behaviours",
            AssetKind::Material => "Material",
        }
    }

    /// The fixed filename this kind is stored under, if it has one.
    pub fn well_known_filename(self) -> Option<&'static str> {
        match self {
            AssetKind::Info => Some("0"),
            AssetKind::Localisation => Some("languages.loc"),
            AssetKind::GameRules => Some("GameRules.grf"),
            AssetKind::Audio => Some("audio.pck"),
            AssetKind::ColourTable => Some("colours.col"),
            AssetKind::GameRulesHeader => Some("GameRules.grh"),
            AssetKind::SkinData => Some("Skins.pck"),
            AssetKind::Models => Some("models.bin"),
            AssetKind::Behaviours => Some("behaviours.bin"),
            AssetKind::Material => Some("entityMaterials.bin"),
            _ => None,
        }
    }

    /// Guesses the kind of an entry from the last component of its name.
    ///
    /// Only fixed filenames are recognized; image assets are ambiguous
    /// between skins, capes and textures and yield `None`.
    pub fn guess_from_filename(name: &str) -> Option<AssetKind> {
        let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
        WELL_KNOWN_FILENAMES
            .get(base.to_ascii_lowercase().as_str())
            .copied()
    }
}

impl TryFrom<u32> for AssetKind {
    type Error = PckError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        AssetKind::from_u32(value).ok_or(PckError::InvalidAssetKind { value })
    }
}

impl From<AssetKind> for u32 {
    fn from(kind: AssetKind) -> u32 {
        kind as u32
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::MAX_ASSET_KIND;

    #[test]
    fn test_discriminants_are_stable() {
        assert_eq!(AssetKind::Skin.as_u32(), 0);
        assert_eq!(AssetKind::Localisation.as_u32(), 6);
        assert_eq!(AssetKind::ColourTable.as_u32(), 9);
        assert_eq!(AssetKind::Material.as_u32(), MAX_ASSET_KIND);
        for (i, kind) in AssetKind::ALL.iter().enumerate() {
            assert_eq!(kind.as_u32() as usize, i);
        }
    }

    #[test]
    fn test_from_u32() {
        assert_eq!(AssetKind::from_u32(12), Some(AssetKind::Models));
        assert_eq!(AssetKind::from_u32(MAX_ASSET_KIND + 1), None);
        assert_eq!(
            AssetKind::try_from(15u32),
            Err(PckError::InvalidAssetKind { value: 15 })
        );
        assert_eq!(AssetKind::try_from(1u32), Ok(AssetKind::Cape));
    }

    #[test]
    fn test_guess_from_filename() {
        assert_eq!(
            AssetKind::guess_from_filename("Data/GameRules.grf"),
            Some(AssetKind::GameRules)
        );
        assert_eq!(
            AssetKind::guess_from_filename("languages.loc"),
            Some(AssetKind::Localisation)
        );
        assert_eq!(
            AssetKind::guess_from_filename("x32Info.pck"),
            Some(AssetKind::TexturePackInfo)
        );
        assert_eq!(AssetKind::guess_from_filename("skins\\dlcskin001.png"), None);
    }

    #[test]
    fn test_well_known_filename_is_recognized() {
        for kind in AssetKind::ALL {
            if let Some(name) = kind.well_known_filename() {
                assert_eq!(AssetKind::guess_from_filename(name), Some(kind));
            }
        }
    }
}
