//! Item catalog wire types.
//!
//! Field renames follow the tarkov.dev GraphQL schema so the catalog
//! response deserializes directly into domain types.

use serde::{Deserialize, Serialize};

/// A purchasable item from the flea market catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable unique id assigned by the upstream catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Lowercase dashed name, used for name-based exclusions.
    pub normalized_name: String,
    /// Icon URL, if the catalog has one.
    #[serde(default)]
    pub icon_link: Option<String>,
    /// Category tags. An item usually carries more than one.
    #[serde(rename = "types")]
    pub categories: Vec<ItemCategory>,
    /// Nominal in-game value ("base price"). Zero means unvalued; the
    /// candidate filter drops such items.
    #[serde(default)]
    pub base_price: u64,
    /// Last observed lowest flea market listing. `None` means the item is
    /// currently unpriced and must not reach the solver.
    #[serde(rename = "lastLowPrice", default)]
    pub flea_price: Option<u64>,
}

impl Item {
    /// Base price minus flea price; how much nominal value a purchase gains.
    pub fn value_diff(&self) -> i64 {
        self.base_price as i64 - self.flea_price.unwrap_or(0) as i64
    }
}

/// Category tags as reported by the upstream catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCategory {
    Ammo,
    AmmoBox,
    Any,
    Armor,
    ArmorPlate,
    Backpack,
    Barter,
    Container,
    Glasses,
    Grenade,
    Gun,
    Headphones,
    Helmet,
    Injectors,
    Keys,
    MarkedOnly,
    Meds,
    Mods,
    NoFlea,
    PistolGrip,
    Preset,
    Provisions,
    Rig,
    Suppressor,
    Wearable,
    /// Forward-compatibility fallback for tags this build does not know.
    #[serde(other)]
    Unknown,
}

impl ItemCategory {
    /// Human-readable label. Bookkeeping tags (`any`, `markedOnly`,
    /// `noFlea`, `Unknown`) have no label and return `None`.
    pub fn pretty_name(&self) -> Option<&'static str> {
        match self {
            Self::Ammo => Some("Ammo"),
            Self::AmmoBox => Some("Ammo box"),
            Self::Armor => Some("Armor"),
            Self::ArmorPlate => Some("Armor plate"),
            Self::Backpack => Some("Backpack"),
            Self::Barter => Some("Barter item"),
            Self::Container => Some("Container"),
            Self::Glasses => Some("Glasses"),
            Self::Grenade => Some("Grenade"),
            Self::Gun => Some("Gun"),
            Self::Headphones => Some("Headphones"),
            Self::Helmet => Some("Helmet"),
            Self::Injectors => Some("Injector"),
            Self::Keys => Some("Key"),
            Self::Meds => Some("Meds"),
            Self::Mods => Some("Mod"),
            Self::PistolGrip => Some("Pistol grip"),
            Self::Preset => Some("Preset"),
            Self::Provisions => Some("Provisions"),
            Self::Rig => Some("Rig"),
            Self::Suppressor => Some("Suppressor"),
            Self::Wearable => Some("Wearable"),
            Self::Any | Self::MarkedOnly | Self::NoFlea | Self::Unknown => None,
        }
    }
}
