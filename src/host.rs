use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolSetError};
use crate::systems::materials::Enchantment;

// ============================================================
// HOST VIEWS — What the game client lets us read
// ============================================================

/// Number of hotbar slots (0-8)
pub const HOTBAR_SIZE: usize = 9;

/// A block type as the host sees it, in its default state.
pub trait Block {
    /// Identity of the block type. Two states of the same block share it.
    fn block_id(&self) -> &str;

    /// Negative means unbreakable.
    fn hardness(&self) -> f32;

    /// True when the block drops without the right tool (dirt, planks...)
    fn tool_not_required(&self) -> bool;
}

/// An item stack sitting in a hotbar slot.
pub trait ToolItem<B: Block + ?Sized> {
    fn is_empty(&self) -> bool;

    /// Host identifier of the tool material ("WOOD", "DIAMOND"...).
    /// `None` when the item isn't a tool at all.
    fn tool_material_name(&self) -> Option<&str>;

    fn destroy_speed(&self, block: &B) -> f32;

    fn can_harvest(&self, block: &B) -> bool;

    fn enchantment_level(&self, enchantment: Enchantment) -> u32;

    /// How many distinct enchantments the item carries
    fn enchantment_count(&self) -> usize;
}

/// Fixed 9-slot hotbar snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotbar<I> {
    slots: [I; HOTBAR_SIZE],
}

impl<I> Hotbar<I> {
    pub fn new(slots: [I; HOTBAR_SIZE]) -> Self {
        Self { slots }
    }

    /// Panics if `index >= HOTBAR_SIZE`, same as indexing the host inventory out of range.
    pub fn slot(&self, index: u8) -> &I {
        &self.slots[index as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &I)> {
        self.slots.iter().enumerate().map(|(i, item)| (i as u8, item))
    }
}

impl<I: Default> Hotbar<I> {
    /// Build from a list shorter than 9, padding the rest with empty items.
    pub fn from_vec(items: Vec<I>) -> Result<Self> {
        if items.len() > HOTBAR_SIZE {
            return Err(ToolSetError::HotbarOverflow {
                got: items.len(),
                max: HOTBAR_SIZE,
            });
        }
        let mut items = items.into_iter();
        let slots = std::array::from_fn(|_| items.next().unwrap_or_default());
        Ok(Self { slots })
    }
}

impl<I: Default> Default for Hotbar<I> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| I::default()),
        }
    }
}

/// Potion effects currently on the player. Amplifier 0 is level I.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffects {
    #[serde(default)]
    pub haste: Option<u8>,
    #[serde(default)]
    pub mining_fatigue: Option<u8>,
}
