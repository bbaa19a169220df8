use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::host::{Block, ToolItem};
use crate::systems::materials::Enchantment;

// ============================================================
// SNAPSHOTS — Plain-data host, for scenarios and inspection
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub id: String,
    pub hardness: f32,
    #[serde(default)]
    pub tool_not_required: bool,
}

impl BlockSnapshot {
    pub fn new(id: &str, hardness: f32, tool_not_required: bool) -> Self {
        Self {
            id: id.to_string(),
            hardness,
            tool_not_required,
        }
    }
}

impl Block for BlockSnapshot {
    fn block_id(&self) -> &str {
        &self.id
    }

    fn hardness(&self) -> f32 {
        self.hardness
    }

    fn tool_not_required(&self) -> bool {
        self.tool_not_required
    }
}

/// One hotbar stack. An empty `name` (or "air") is an empty slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub material: Option<String>,
    /// Destroy speed per block id; anything missing mines at 1.0
    #[serde(default)]
    pub speeds: HashMap<String, f32>,
    #[serde(default)]
    pub harvests: HashSet<String>,
    #[serde(default)]
    pub enchantments: HashMap<Enchantment, u32>,
}

impl ItemSnapshot {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn tool(name: &str, material: &str) -> Self {
        Self {
            name: name.to_string(),
            material: Some(material.to_string()),
            ..Default::default()
        }
    }

    pub fn with_speed(mut self, block_id: &str, speed: f32) -> Self {
        self.speeds.insert(block_id.to_string(), speed);
        self
    }

    pub fn with_harvest(mut self, block_id: &str) -> Self {
        self.harvests.insert(block_id.to_string());
        self
    }

    pub fn with_enchantment(mut self, enchantment: Enchantment, level: u32) -> Self {
        self.enchantments.insert(enchantment, level);
        self
    }
}

impl ToolItem<BlockSnapshot> for ItemSnapshot {
    fn is_empty(&self) -> bool {
        self.name.is_empty() || self.name == "air"
    }

    fn tool_material_name(&self) -> Option<&str> {
        self.material.as_deref()
    }

    fn destroy_speed(&self, block: &BlockSnapshot) -> f32 {
        if self.is_empty() {
            return 1.0;
        }
        self.speeds.get(&block.id).copied().unwrap_or(1.0)
    }

    fn can_harvest(&self, block: &BlockSnapshot) -> bool {
        !self.is_empty() && self.harvests.contains(&block.id)
    }

    fn enchantment_level(&self, enchantment: Enchantment) -> u32 {
        self.enchantments.get(&enchantment).copied().unwrap_or(0)
    }

    fn enchantment_count(&self) -> usize {
        self.enchantments.values().filter(|level| **level > 0).count()
    }
}
