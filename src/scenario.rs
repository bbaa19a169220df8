use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, ToolSetError};
use crate::host::{ActiveEffects, Hotbar};
use crate::snapshot::{BlockSnapshot, ItemSnapshot};
use crate::systems::settings::ToolSettings;
use crate::systems::tool_set::ToolSet;

/// A hotbar plus the blocks to evaluate it against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub hotbar: Vec<ItemSnapshot>,
    #[serde(default)]
    pub blocks: Vec<BlockSnapshot>,
    #[serde(default)]
    pub effects: ActiveEffects,
    /// Overrides the settings file when present
    #[serde(default)]
    pub settings: Option<ToolSettings>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockReport {
    pub block: String,
    pub slot: u8,
    pub item: String,
    pub speed: f64,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| ToolSetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ToolSetError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Best slot and cached break speed for every block, in order.
    pub fn evaluate(&self, fallback: &ToolSettings) -> Result<Vec<BlockReport>> {
        let settings = self.settings.clone().unwrap_or_else(|| fallback.clone());
        let hotbar = Hotbar::from_vec(self.hotbar.clone())?;
        let mut tools = ToolSet::new(settings, &self.effects);

        self.blocks
            .iter()
            .map(|block| {
                let best = tools.cached_best_tool(&hotbar, block)?;
                let item = hotbar.slot(best.slot);
                Ok(BlockReport {
                    block: block.id.clone(),
                    slot: best.slot,
                    item: if item.name.is_empty() { "empty".into() } else { item.name.clone() },
                    speed: best.speed,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "hotbar": [
            { "name": "diamond_sword", "material": "DIAMOND" },
            { "name": "iron_pickaxe", "material": "IRON", "speeds": { "stone": 6.0 }, "harvests": ["stone"] },
            { "name": "stone_shovel", "material": "STONE", "speeds": { "dirt": 4.0 } }
        ],
        "blocks": [
            { "id": "stone", "hardness": 1.5 },
            { "id": "dirt", "hardness": 0.5, "tool_not_required": true },
            { "id": "bedrock", "hardness": -1.0 }
        ]
    }"#;

    #[test]
    fn test_evaluate_scenario() {
        let scenario: Scenario = serde_json::from_str(SCENARIO).unwrap();
        let reports = scenario.evaluate(&ToolSettings::default()).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!((reports[0].slot, reports[0].item.as_str()), (1, "iron_pickaxe"));
        assert_eq!((reports[1].slot, reports[1].item.as_str()), (2, "stone_shovel"));
        assert_eq!(reports[2].speed, -1.0);
        // empty hands are the cheapest way to not break bedrock
        assert_eq!(reports[2].item, "empty");
    }

    #[test]
    fn test_embedded_settings_win() {
        let mut scenario: Scenario = serde_json::from_str(SCENARIO).unwrap();
        let mut settings = ToolSettings::default();
        settings.blocks_to_avoid_breaking.insert("stone".into());
        scenario.settings = Some(settings);

        let plain = scenario.evaluate(&ToolSettings::default()).unwrap();
        scenario.settings = None;
        let avoided_by_file = {
            let mut fallback = ToolSettings::default();
            fallback.blocks_to_avoid_breaking.insert("stone".into());
            scenario.evaluate(&fallback).unwrap()
        };
        assert_eq!(plain[0].speed, avoided_by_file[0].speed);
    }

    #[test]
    fn test_repeated_block_reports_cached_pick() {
        let mut scenario: Scenario = serde_json::from_str(SCENARIO).unwrap();
        // same block id, softer state: reported on the first state's terms
        scenario.blocks.push(BlockSnapshot::new("stone", 0.0, true));
        let reports = scenario.evaluate(&ToolSettings::default()).unwrap();

        let last = reports.last().unwrap();
        assert_eq!(last.slot, reports[0].slot);
        assert_eq!(last.item, reports[0].item);
        assert_eq!(last.speed, reports[0].speed);
    }

    #[test]
    fn test_oversized_hotbar() {
        let scenario = Scenario {
            hotbar: vec![ItemSnapshot::named("stick"); 12],
            ..Default::default()
        };
        assert!(matches!(
            scenario.evaluate(&ToolSettings::default()),
            Err(ToolSetError::HotbarOverflow { got: 12, .. })
        ));
    }
}
