//! Record to domain conversions.
//!
//! Malformed data is never fatal. A record that cannot become an entity is
//! skipped; a bad field inside an otherwise usable record is dropped. Both
//! are reported in [`Converted::skipped`] so the caller can log them.

use std::collections::BTreeMap;

use charforge_domain::{
    Ability, AbilityScores, Alignment, AlignmentId, Armor, ArmorId, BabProgression, CasterType,
    CasterTypeId, CharacterClass, ClassId, DomainError, Feat, FeatId, Race, RaceId, ReferenceData,
    ShopItem, Skill, SkillId, Spell, SpellId, Stat, StatId, Weapon, WeaponId,
    DEFAULT_CASTING_ABILITY, MAX_SPELL_LEVEL,
};
use thiserror::Error;

use crate::records::{
    AlignmentRecord, ArmorRecord, BabProgressionRecord, CasterTypeRecord, ClassRecord,
    FeatRecord, RaceRecord, ReferenceSnapshot, ShopItemRecord, SkillRecord, SpellRecord,
    StatRecord, WeaponRecord,
};

/// A record that could not be turned into a domain entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} {id}: {source}")]
pub struct ConversionError {
    pub kind: &'static str,
    pub id: String,
    #[source]
    pub source: DomainError,
}

impl ConversionError {
    fn new(kind: &'static str, id: impl ToString, source: DomainError) -> Self {
        Self {
            kind,
            id: id.to_string(),
            source,
        }
    }
}

/// Converted value plus everything that was dropped on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Converted<T> {
    pub value: T,
    pub skipped: Vec<String>,
}

// =============================================================================
// Single records
// =============================================================================

/// A race with every well-formed modifier; malformed entries are returned
/// as messages.
pub fn race_from_record(record: RaceRecord) -> Converted<Race> {
    let mut race = Race::new(RaceId::new(record.id), record.name);
    let mut skipped = Vec::new();

    match record.stat_modifiers {
        None | Some(serde_json::Value::Null) => {}
        Some(serde_json::Value::Object(map)) => {
            for (name, value) in map {
                let ability = name.parse::<Ability>();
                let amount = value.as_i64().and_then(|v| i32::try_from(v).ok());
                match (ability, amount) {
                    (Ok(ability), Some(amount)) => race = race.with_modifier(ability, amount),
                    _ => skipped.push(format!(
                        "race {}: ignoring stat modifier {}={}",
                        race.id, name, value
                    )),
                }
            }
        }
        Some(other) => skipped.push(format!(
            "race {}: stat_modifiers is not an object ({})",
            race.id, other
        )),
    }

    Converted {
        value: race,
        skipped,
    }
}

/// A class from its record. A non-positive hit die rejects the record; an
/// unknown casting ability falls back to the default and is reported.
pub fn class_from_record(
    record: ClassRecord,
) -> Result<Converted<CharacterClass>, ConversionError> {
    let hit_die = u8::try_from(record.hit_die)
        .ok()
        .filter(|die| *die > 0)
        .ok_or_else(|| {
            ConversionError::new(
                "class",
                record.id,
                DomainError::validation(format!("hit die {} is not positive", record.hit_die)),
            )
        })?;

    let mut class = CharacterClass::new(
        ClassId::new(record.id),
        record.name,
        hit_die,
        record.skill_points,
        record.bab_progression,
    );
    let mut skipped = Vec::new();

    if let Some(caster_type_id) = record.caster_type_id {
        let casting_ability = match record.casting_stat.map(|name| name.parse::<Ability>()) {
            Some(Ok(ability)) => ability,
            Some(Err(e)) => {
                skipped.push(format!(
                    "class {}: {}; casting with {}",
                    record.id, e, DEFAULT_CASTING_ABILITY
                ));
                DEFAULT_CASTING_ABILITY
            }
            None => DEFAULT_CASTING_ABILITY,
        };
        class = class.with_caster(CasterTypeId::new(caster_type_id), casting_ability);
    }

    class.class_skills = record.class_skills;
    class.starting_weapons = record.starting_weapons;
    class.starting_armor = record.starting_armor;
    class.starting_inventory = record.starting_inventory;
    Ok(Converted {
        value: class,
        skipped,
    })
}

impl From<SkillRecord> for Skill {
    fn from(record: SkillRecord) -> Self {
        Skill::new(
            SkillId::new(record.id),
            record.name,
            StatId::new(record.modifying_stat_id),
        )
    }
}

impl From<StatRecord> for Stat {
    fn from(record: StatRecord) -> Self {
        Stat::new(StatId::new(record.id), record.name)
    }
}

impl From<FeatRecord> for Feat {
    fn from(record: FeatRecord) -> Self {
        Feat::new(FeatId::new(record.id), record.name, record.description)
    }
}

impl From<CasterTypeRecord> for CasterType {
    fn from(record: CasterTypeRecord) -> Self {
        let mut caster = CasterType::new(CasterTypeId::new(record.id));
        for (level, count) in (0..=MAX_SPELL_LEVEL).zip(record.columns()) {
            if let Some(count) = count {
                caster = caster.with_slots(level, count);
            }
        }
        if let Some(name) = record.name {
            caster = caster.with_name(name);
        }
        caster
    }
}

impl TryFrom<SpellRecord> for Spell {
    type Error = ConversionError;

    fn try_from(record: SpellRecord) -> Result<Self, Self::Error> {
        let level = u8::try_from(record.spell_level)
            .ok()
            .filter(|level| *level <= MAX_SPELL_LEVEL)
            .ok_or_else(|| {
                ConversionError::new(
                    "spell",
                    record.id,
                    DomainError::validation(format!(
                        "spell level {} outside 0..=9",
                        record.spell_level
                    )),
                )
            })?;

        let mut spell = Spell::new(SpellId::new(record.id), record.name, level)
            .with_description(record.description);
        spell.class_lists = record.class_lists;
        Ok(spell)
    }
}

/// A BAB row keyed by its id, or by its name when the id is missing.
///
/// Level columns come from the flat keys and the nested `entries` object;
/// columns that are not a level with an integer bonus are dropped and
/// reported.
pub fn bab_progression_from_record(
    record: BabProgressionRecord,
) -> Result<Converted<BabProgression>, ConversionError> {
    let key = match (&record.id, &record.name) {
        (Some(id), _) => id.to_string(),
        (None, Some(name)) => name.clone(),
        (None, None) => {
            return Err(ConversionError::new(
                "bab progression",
                "?",
                DomainError::validation("row has neither id nor name"),
            ))
        }
    };

    let mut progression = BabProgression::new(key);
    if let Some(name) = record.name {
        progression = progression.with_name(name);
    }

    let mut skipped = Vec::new();
    for (column, value) in record.entries.into_iter().chain(record.levels) {
        let level = column.trim().parse::<u8>().ok();
        let bonus = value.as_i64().and_then(|v| i32::try_from(v).ok());
        match (level, bonus) {
            (Some(level), Some(bonus)) => progression = progression.with_entry(level, bonus),
            _ => skipped.push(format!(
                "bab progression {}: ignoring entry {:?}={}",
                progression.key, column, value
            )),
        }
    }

    Ok(Converted {
        value: progression,
        skipped,
    })
}

impl From<AlignmentRecord> for Alignment {
    fn from(record: AlignmentRecord) -> Self {
        Alignment::new(AlignmentId::new(record.id), record.name)
    }
}

impl From<ArmorRecord> for Armor {
    fn from(record: ArmorRecord) -> Self {
        Armor::new(ArmorId::new(record.id), record.name, record.armor_bonus)
            .with_gold_value(record.gold_value)
    }
}

impl From<WeaponRecord> for Weapon {
    fn from(record: WeaponRecord) -> Self {
        Weapon::new(WeaponId::new(record.id), record.name, record.damage)
            .with_gold_value(record.gold_value)
    }
}

impl From<ShopItemRecord> for ShopItem {
    fn from(record: ShopItemRecord) -> Self {
        ShopItem {
            item_type: record.item_type,
            name: record.name,
            gold_value: record.gold_value,
        }
    }
}

// =============================================================================
// Whole snapshot
// =============================================================================

fn collect_fallible<R, T>(records: Vec<R>, skipped: &mut Vec<String>) -> Vec<T>
where
    T: TryFrom<R, Error = ConversionError>,
{
    records
        .into_iter()
        .filter_map(|record| match T::try_from(record) {
            Ok(value) => Some(value),
            Err(e) => {
                skipped.push(e.to_string());
                None
            }
        })
        .collect()
}

/// Keep every record that converts, folding its dropped fields and every
/// rejected record into `skipped`.
fn collect_reported<R, T>(
    records: Vec<R>,
    convert: impl Fn(R) -> Result<Converted<T>, ConversionError>,
    skipped: &mut Vec<String>,
) -> Vec<T> {
    records
        .into_iter()
        .filter_map(|record| match convert(record) {
            Ok(converted) => {
                skipped.extend(converted.skipped);
                Some(converted.value)
            }
            Err(e) => {
                skipped.push(e.to_string());
                None
            }
        })
        .collect()
}

impl ReferenceSnapshot {
    /// Convert every collection. Shop items are not part of the rules data
    /// and are left out; see [`ReferenceSnapshot::shop`].
    pub fn into_reference_data(self) -> Converted<ReferenceData> {
        let mut skipped = Vec::new();

        let races = self
            .races
            .into_iter()
            .map(|record| {
                let converted = race_from_record(record);
                skipped.extend(converted.skipped);
                converted.value
            })
            .collect();

        let bab_progressions =
            collect_reported(self.bab_progressions, bab_progression_from_record, &mut skipped);
        let classes = collect_reported(self.character_classes, class_from_record, &mut skipped);
        let spells = collect_fallible(self.spells, &mut skipped);

        let value = ReferenceData {
            races,
            classes,
            skills: self.skills.into_iter().map(Skill::from).collect(),
            stats: self.stats.into_iter().map(Stat::from).collect(),
            feats: self.feats.into_iter().map(Feat::from).collect(),
            spells,
            caster_types: self.caster_types.into_iter().map(CasterType::from).collect(),
            bab_progressions,
            alignments: self.alignments.into_iter().map(Alignment::from).collect(),
            armor: self.armor.into_iter().map(Armor::from).collect(),
            weapons: self.weapons.into_iter().map(Weapon::from).collect(),
        };

        Converted { value, skipped }
    }

    pub fn shop(&self) -> Vec<ShopItem> {
        self.shop_items.iter().cloned().map(ShopItem::from).collect()
    }
}

/// Ability scores keyed by name, ignoring keys that name no ability.
pub fn ability_scores_from_names(
    stats: &BTreeMap<String, i32>,
) -> Converted<AbilityScores> {
    let mut skipped = Vec::new();
    let value = stats
        .iter()
        .filter_map(|(name, score)| match name.parse::<Ability>() {
            Ok(ability) => Some((ability, *score)),
            Err(e) => {
                skipped.push(e.to_string());
                None
            }
        })
        .collect();
    Converted { value, skipped }
}
