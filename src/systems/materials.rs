use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, ToolSetError};
use crate::host::{Block, ToolItem};

// ============================================================
// MATERIALS & ENCHANTMENTS — What a tool is made of
// ============================================================

/// Tool tiers in the host's declaration order. The ordinal is the cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolMaterial {
    Wood,
    Stone,
    Iron,
    Diamond,
    Gold,
}

impl ToolMaterial {
    /// Ordinal rank, 0 (wood) to 4 (gold)
    pub fn ordinal(&self) -> i32 {
        match self {
            ToolMaterial::Wood => 0,
            ToolMaterial::Stone => 1,
            ToolMaterial::Iron => 2,
            ToolMaterial::Diamond => 3,
            ToolMaterial::Gold => 4,
        }
    }
}

impl FromStr for ToolMaterial {
    type Err = ToolSetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "wood" | "wooden" => Ok(ToolMaterial::Wood),
            "stone" => Ok(ToolMaterial::Stone),
            "iron" => Ok(ToolMaterial::Iron),
            // old name for diamond tools
            "diamond" | "emerald" => Ok(ToolMaterial::Diamond),
            "gold" | "golden" => Ok(ToolMaterial::Gold),
            _ => Err(ToolSetError::UnknownToolMaterial(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enchantment {
    Efficiency,
    Mending,
    SilkTouch,
    Fortune,
}

/// Material cost of a possibly empty item: -1 for non-tools, else 0..=4.
///
/// An identifier we can't rank is a broken host setup, so it bubbles up.
pub fn material_cost<B, I>(item: &I) -> Result<i32>
where
    B: Block + ?Sized,
    I: ToolItem<B>,
{
    match item.tool_material_name() {
        Some(name) if !item.is_empty() => Ok(name.parse::<ToolMaterial>()?.ordinal()),
        _ => Ok(-1),
    }
}

/// Number of enchantments on the item
pub fn enchantment_cost<B, I>(item: &I) -> usize
where
    B: Block + ?Sized,
    I: ToolItem<B>,
{
    if item.is_empty() {
        return 0;
    }
    item.enchantment_count()
}
