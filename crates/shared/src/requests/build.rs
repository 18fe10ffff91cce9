use serde::{Deserialize, Serialize};

/// One creation choice, applied in order by the creation workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum BuildStep {
    Name {
        name: String,
    },
    Level {
        level: u8,
    },
    Race {
        race_id: i64,
    },
    Class {
        class_id: i64,
    },
    Alignment {
        alignment_id: i64,
    },
    /// Roll all six scores (4d6 drop lowest)
    RollAbilities,
    /// Overwrite one score; `ability` is a name or abbreviation
    AbilityScore {
        ability: String,
        score: i32,
    },
    SkillRank {
        skill_id: i64,
        rank: u8,
    },
    SelectFeat {
        feat_id: i64,
    },
    DeselectFeat {
        feat_id: i64,
    },
}

/// An ordered list of creation choices, read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub steps: Vec<BuildStep>,
}

impl BuildPlan {
    /// Accepts either `{"steps": [...]}` or the bare list of steps.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim_start().starts_with('[') {
            let steps = serde_json::from_str(json)?;
            return Ok(Self { steps });
        }
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plan() {
        let plan = BuildPlan::from_json(
            r#"{"steps": [
                {"step": "name", "name": "Ezren"},
                {"step": "class", "class_id": 7},
                {"step": "roll_abilities"},
                {"step": "ability_score", "ability": "INT", "score": 17},
                {"step": "skill_rank", "skill_id": 3, "rank": 1}
            ]}"#,
        )
        .expect("plan");

        assert_eq!(plan.steps.len(), 5);
        assert_eq!(plan.steps[1], BuildStep::Class { class_id: 7 });
        assert_eq!(plan.steps[2], BuildStep::RollAbilities);
    }

    #[test]
    fn parses_a_bare_list_of_steps() {
        let plan = BuildPlan::from_json(
            r#"[{"step": "level", "level": 3}, {"step": "select_feat", "feat_id": 2}]"#,
        )
        .expect("plan");

        assert_eq!(
            plan.steps,
            vec![
                BuildStep::Level { level: 3 },
                BuildStep::SelectFeat { feat_id: 2 }
            ]
        );
    }

    #[test]
    fn unknown_step_is_an_error() {
        assert!(BuildPlan::from_json(r#"{"steps": [{"step": "teleport"}]}"#).is_err());
    }
}
