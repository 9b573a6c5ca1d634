/// Equipment slots and their state machine
///
/// A loadout has nine slots: four weapons arranged in a cross, two support
/// slots (repkit, ordnance) and three auxiliaries (class mod, shield,
/// enhancement). Each slot is either empty or holds one item; the only
/// transitions are `assign` and `clear`, and both trigger a re-resolve and
/// repaint in the UI layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::style::Rarity;

/// Which of the four weapon slots, determining the clip shape and the
/// gradient focus corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponPosition {
    /// Left side, middle
    One,
    /// Top center
    Two,
    /// Right side, middle
    Three,
    /// Bottom center
    Four,
}

impl WeaponPosition {
    pub const ALL: [WeaponPosition; 4] = [
        WeaponPosition::One,
        WeaponPosition::Two,
        WeaponPosition::Three,
        WeaponPosition::Four,
    ];

    /// Badge number shown on the slot (1-4).
    pub fn number(&self) -> u8 {
        match self {
            WeaponPosition::One => 1,
            WeaponPosition::Two => 2,
            WeaponPosition::Three => 3,
            WeaponPosition::Four => 4,
        }
    }
}

/// The two support slot kinds. Their clip shapes mirror each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportKind {
    Repkit,
    Ordnance,
}

impl SupportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportKind::Repkit => "repkit",
            SupportKind::Ordnance => "ordnance",
        }
    }

    /// Icon filename in the `slots` asset category.
    pub fn icon_filename(&self) -> &'static str {
        match self {
            SupportKind::Repkit => "repkit.webp",
            SupportKind::Ordnance => "grenade-charges.webp",
        }
    }
}

/// The three auxiliary slot kinds. Plain rectangles, no clip shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxKind {
    ClassMod,
    Shield,
    Enhancement,
}

impl AuxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuxKind::ClassMod => "class-mod",
            AuxKind::Shield => "shield",
            AuxKind::Enhancement => "enhancement",
        }
    }

    /// Icon filename in the `slots` asset category.
    pub fn icon_filename(&self) -> &'static str {
        match self {
            AuxKind::ClassMod => "class-mod.webp",
            AuxKind::Shield => "energy-shield.webp",
            AuxKind::Enhancement => "enhancement.webp",
        }
    }
}

/// Closed set of slot families. Rendering dispatches on this tag instead of
/// comparing type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Weapon(WeaponPosition),
    Support(SupportKind),
    Auxiliary(AuxKind),
}

/// Identity of one slot in the loadout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    Weapon1,
    Weapon2,
    Weapon3,
    Weapon4,
    Repkit,
    Ordnance,
    ClassMod,
    Shield,
    Enhancement,
}

impl SlotId {
    pub const ALL: [SlotId; 9] = [
        SlotId::Weapon1,
        SlotId::Weapon2,
        SlotId::Weapon3,
        SlotId::Weapon4,
        SlotId::Repkit,
        SlotId::Ordnance,
        SlotId::ClassMod,
        SlotId::Shield,
        SlotId::Enhancement,
    ];

    /// The slot's rendering family.
    pub fn kind(&self) -> SlotKind {
        match self {
            SlotId::Weapon1 => SlotKind::Weapon(WeaponPosition::One),
            SlotId::Weapon2 => SlotKind::Weapon(WeaponPosition::Two),
            SlotId::Weapon3 => SlotKind::Weapon(WeaponPosition::Three),
            SlotId::Weapon4 => SlotKind::Weapon(WeaponPosition::Four),
            SlotId::Repkit => SlotKind::Support(SupportKind::Repkit),
            SlotId::Ordnance => SlotKind::Support(SupportKind::Ordnance),
            SlotId::ClassMod => SlotKind::Auxiliary(AuxKind::ClassMod),
            SlotId::Shield => SlotKind::Auxiliary(AuxKind::Shield),
            SlotId::Enhancement => SlotKind::Auxiliary(AuxKind::Enhancement),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotId::Weapon1 => "weapon1",
            SlotId::Weapon2 => "weapon2",
            SlotId::Weapon3 => "weapon3",
            SlotId::Weapon4 => "weapon4",
            SlotId::Repkit => "repkit",
            SlotId::Ordnance => "ordnance",
            SlotId::ClassMod => "class-mod",
            SlotId::Shield => "shield",
            SlotId::Enhancement => "enhancement",
        }
    }
}

/// Weapon categories and their icon filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeaponType {
    Assault,
    Pistol,
    Smg,
    Shotgun,
    Sniper,
    HeavyWeapon,
}

impl WeaponType {
    /// Parse from a lowercase name; unknown names fall back to assault.
    pub fn from_name(name: &str) -> WeaponType {
        match name {
            "pistol" => WeaponType::Pistol,
            "smg" => WeaponType::Smg,
            "shotgun" => WeaponType::Shotgun,
            "sniper" => WeaponType::Sniper,
            "heavy-weapon" => WeaponType::HeavyWeapon,
            _ => WeaponType::Assault,
        }
    }

    /// Icon filename in the `weapons` asset category.
    pub fn icon_filename(&self) -> &'static str {
        match self {
            WeaponType::Assault => "assault.webp",
            WeaponType::Pistol => "pistol.webp",
            WeaponType::Smg => "smg.webp",
            WeaponType::Shotgun => "shotgun.webp",
            WeaponType::Sniper => "sniper.webp",
            WeaponType::HeavyWeapon => "heavy-weapon.webp",
        }
    }
}

/// One equipped item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    #[serde(rename = "weaponType")]
    pub weapon_type: WeaponType,
    pub rarity: Rarity,
    pub manufacturer: String,
}

/// The full loadout: a map from slot to occupant. A slot with no entry is
/// empty. Created with every slot empty.
#[derive(Debug, Clone, Default)]
pub struct Equipment {
    slots: HashMap<SlotId, ItemRef>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item in a slot (Empty|Occupied -> Occupied). Returns the
    /// prior occupant, if any.
    pub fn assign(&mut self, slot: SlotId, item: ItemRef) -> Option<ItemRef> {
        self.slots.insert(slot, item)
    }

    /// Empty a slot (Occupied -> Empty). Returns the prior occupant.
    pub fn clear(&mut self, slot: SlotId) -> Option<ItemRef> {
        self.slots.remove(&slot)
    }

    pub fn get(&self, slot: SlotId) -> Option<&ItemRef> {
        self.slots.get(&slot)
    }

    pub fn is_occupied(&self, slot: SlotId) -> bool {
        self.slots.contains_key(&slot)
    }

    /// The rarity driving the slot's border and gradient: the occupant's
    /// tier, or gray when empty.
    pub fn rarity_of(&self, slot: SlotId) -> Rarity {
        self.slots
            .get(&slot)
            .map(|item| item.rarity)
            .unwrap_or(Rarity::Gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_item(rarity: Rarity) -> ItemRef {
        ItemRef {
            weapon_type: WeaponType::Assault,
            rarity,
            manufacturer: "jakobs".to_string(),
        }
    }

    #[test]
    fn test_new_equipment_is_empty() {
        let equipment = Equipment::new();
        for slot in SlotId::ALL {
            assert!(!equipment.is_occupied(slot));
            assert_eq!(equipment.rarity_of(slot), Rarity::Gray);
        }
    }

    #[test]
    fn test_assign_and_clear_transitions() {
        let mut equipment = Equipment::new();

        // Empty -> Occupied
        assert!(equipment
            .assign(SlotId::Weapon1, demo_item(Rarity::Purple))
            .is_none());
        assert!(equipment.is_occupied(SlotId::Weapon1));
        assert_eq!(equipment.rarity_of(SlotId::Weapon1), Rarity::Purple);

        // Occupied -> Occupied replaces and returns the prior occupant
        let prior = equipment.assign(SlotId::Weapon1, demo_item(Rarity::Orange));
        assert_eq!(prior.unwrap().rarity, Rarity::Purple);

        // Occupied -> Empty
        let cleared = equipment.clear(SlotId::Weapon1);
        assert_eq!(cleared.unwrap().rarity, Rarity::Orange);
        assert!(!equipment.is_occupied(SlotId::Weapon1));
        assert_eq!(equipment.rarity_of(SlotId::Weapon1), Rarity::Gray);

        // Clearing an empty slot is a no-op
        assert!(equipment.clear(SlotId::Weapon1).is_none());
    }

    #[test]
    fn test_slot_kinds() {
        assert_eq!(
            SlotId::Weapon3.kind(),
            SlotKind::Weapon(WeaponPosition::Three)
        );
        assert_eq!(
            SlotId::Ordnance.kind(),
            SlotKind::Support(SupportKind::Ordnance)
        );
        assert_eq!(SlotId::Shield.kind(), SlotKind::Auxiliary(AuxKind::Shield));
    }

    #[test]
    fn test_item_ref_json_keys() {
        let item = demo_item(Rarity::Purple);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"weaponType\":\"assault\""));
        assert!(json.contains("\"rarity\":\"purple\""));
        assert!(json.contains("\"manufacturer\":\"jakobs\""));
    }

    #[test]
    fn test_weapon_type_fallback() {
        assert_eq!(WeaponType::from_name("smg"), WeaponType::Smg);
        assert_eq!(WeaponType::from_name("railgun"), WeaponType::Assault);
    }
}
