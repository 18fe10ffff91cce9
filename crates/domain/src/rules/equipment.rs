//! Starting equipment resolution.

use serde::Serialize;

use crate::entities::{Armor, CharacterClass, Weapon};
use crate::reference::ReferenceData;

/// A class's starting kit resolved against the armor and weapon catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartingEquipment {
    pub weapons: Vec<Weapon>,
    pub armor: Vec<Armor>,
    pub inventory: Vec<String>,
    /// Weapon or armor names with no catalog entry
    pub unmatched: Vec<String>,
}

impl StartingEquipment {
    pub fn armor_bonus(&self) -> i32 {
        self.armor.iter().map(|a| a.armor_bonus).sum()
    }
}

pub fn starting_equipment(
    class: Option<&CharacterClass>,
    reference: &ReferenceData,
) -> StartingEquipment {
    let Some(class) = class else {
        return StartingEquipment::default();
    };

    let mut kit = StartingEquipment {
        inventory: class.starting_inventory.clone(),
        ..Default::default()
    };

    for name in &class.starting_weapons {
        match reference.weapon_named(name) {
            Some(weapon) => kit.weapons.push(weapon.clone()),
            None => kit.unmatched.push(name.clone()),
        }
    }
    for name in &class.starting_armor {
        match reference.armor_named(name) {
            Some(armor) => kit.armor.push(armor.clone()),
            None => kit.unmatched.push(name.clone()),
        }
    }

    kit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ArmorId, ClassId, WeaponId};

    #[test]
    fn resolves_names_and_lists_strays() {
        let reference = ReferenceData {
            weapons: vec![Weapon::new(WeaponId::new(1), "Longsword", "1d8")],
            armor: vec![Armor::new(ArmorId::new(1), "Scale Mail", 5)],
            ..Default::default()
        };
        let fighter = CharacterClass::new(ClassId::new(1), "Fighter", 10, 2, "full")
            .with_starting_weapon("longsword")
            .with_starting_weapon("Trident")
            .with_starting_armor("Scale Mail")
            .with_starting_item("Backpack");

        let kit = starting_equipment(Some(&fighter), &reference);
        assert_eq!(kit.weapons.len(), 1);
        assert_eq!(kit.armor.len(), 1);
        assert_eq!(kit.armor_bonus(), 5);
        assert_eq!(kit.unmatched, vec!["Trident".to_string()]);
        assert_eq!(kit.inventory, vec!["Backpack".to_string()]);
    }

    #[test]
    fn no_class_means_no_kit() {
        let kit = starting_equipment(None, &ReferenceData::default());
        assert_eq!(kit, StartingEquipment::default());
    }
}
