/// Identifier of an item template in game content.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only item template lookup.
///
/// The engine only consumes two facts from an item: whether it is ranged
/// (opening strike) and its category (off-hand dual-wield eligibility).
/// Stat contributions are already folded into the combatant's stats by the
/// caller.
pub trait ItemOracle: Send + Sync {
    fn template(&self, id: &ItemId) -> Option<ItemTemplate>;
}

/// Item template with the fields the encounter engine reads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub id: ItemId,
    pub category: ItemCategory,
    /// Ranged weapons grant the pre-combat opening strike.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ranged: bool,
}

impl ItemTemplate {
    pub fn new(id: impl Into<ItemId>, category: ItemCategory, ranged: bool) -> Self {
        Self {
            id: id.into(),
            category,
            ranged,
        }
    }

    pub fn is_weapon(&self) -> bool {
        self.category == ItemCategory::Weapon
    }
}

/// Equipment category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapon,
    Shield,
    Armor,
    Trinket,
}

/// Item oracle with no templates. Every lookup misses, so no combatant
/// qualifies for the opening strike or the off-hand attack.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoItems;

impl ItemOracle for NoItems {
    fn template(&self, _id: &ItemId) -> Option<ItemTemplate> {
        None
    }
}

impl ItemOracle for Vec<ItemTemplate> {
    fn template(&self, id: &ItemId) -> Option<ItemTemplate> {
        self.iter().find(|item| &item.id == id).cloned()
    }
}
