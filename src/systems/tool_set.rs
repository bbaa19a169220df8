use std::collections::HashMap;

use crate::error::Result;
use crate::host::{ActiveEffects, Block, Hotbar, ToolItem};
use crate::systems::materials::{enchantment_cost, material_cost, Enchantment};
use crate::systems::potion::potion_multiplier;
use crate::systems::settings::ToolSettings;

// ============================================================
// TOOL SET — Best hotbar tool for any block, with a speed cache
// ============================================================

/// How fast `item` breaks `block`, as 1 / ticks. Returns -1 for unbreakable blocks.
///
/// `honor_efficiency` adds the Efficiency bonus (`level² + 1`) when the item
/// already mines the block faster than bare hands.
pub fn calculate_speed_vs_block<B, I>(item: &I, block: &B, honor_efficiency: bool) -> f64
where
    B: Block + ?Sized,
    I: ToolItem<B>,
{
    let hardness = block.hardness();
    if hardness < 0.0 {
        return -1.0;
    }
    if hardness == 0.0 {
        // instant break with anything, even a zero-speed item
        return f64::INFINITY;
    }

    let mut speed = item.destroy_speed(block);
    if honor_efficiency && speed > 1.0 {
        let level = item.enchantment_level(Enchantment::Efficiency);
        if level > 0 && !item.is_empty() {
            let level = level as f32;
            speed += level * level + 1.0;
        }
    }

    speed /= hardness;
    let right_tool = block.tool_not_required() || (!item.is_empty() && item.can_harvest(block));
    if right_tool {
        (speed / 30.0) as f64
    } else {
        (speed / 100.0) as f64
    }
}

/// Fastest slot for the block. Ties go to the cheaper material, then (eco only)
/// to the item with fewer enchantments. On a full tie the earlier slot stays.
///
/// Eco mode ignores Efficiency so an unenchanted tool can tie with an enchanted one.
pub fn fastest_slot_for<B, I>(hotbar: &Hotbar<I>, block: &B, eco: bool) -> Result<u8>
where
    B: Block + ?Sized,
    I: ToolItem<B>,
{
    let mut best = 0u8;
    let mut value = f64::NEG_INFINITY;
    let mut best_material = i32::MIN;
    let mut best_enchantments = usize::MAX;

    for (slot, item) in hotbar.iter() {
        let speed = calculate_speed_vs_block(item, block, !eco);
        if speed > value {
            value = speed;
            best = slot;
            best_material = material_cost::<B, I>(item)?;
            if eco {
                best_enchantments = enchantment_cost::<B, I>(item);
            }
        } else if speed == value {
            let material = material_cost::<B, I>(item)?;
            if material < best_material {
                best = slot;
                best_material = material;
                if eco {
                    best_enchantments = enchantment_cost::<B, I>(item);
                }
            } else if eco && material == best_material {
                let enchantments = enchantment_cost::<B, I>(item);
                if enchantments < best_enchantments {
                    best = slot;
                    best_enchantments = enchantments;
                }
            }
        }
    }

    Ok(best)
}

/// Slot with the highest level of `enchantment`; raw speed breaks ties, then the earlier slot.
pub fn enchanted_slot_for<B, I>(hotbar: &Hotbar<I>, block: &B, enchantment: Enchantment) -> u8
where
    B: Block + ?Sized,
    I: ToolItem<B>,
{
    let mut best = 0u8;
    let mut best_level = i64::MIN;
    let mut value = f64::NEG_INFINITY;

    for (slot, item) in hotbar.iter() {
        let level = if item.is_empty() {
            0
        } else {
            item.enchantment_level(enchantment) as i64
        };
        let speed = calculate_speed_vs_block(item, block, false);
        if level > best_level || (level == best_level && speed > value) {
            best = slot;
            best_level = level;
            value = speed;
        }
    }

    best
}

/// Pick the slot to mine `block` with: enchantment preferences first
/// (mending, silk touch, fortune), otherwise the fastest tool.
pub fn select_best_slot<B, I>(hotbar: &Hotbar<I>, block: &B, settings: &ToolSettings) -> Result<u8>
where
    B: Block + ?Sized,
    I: ToolItem<B>,
{
    let id = block.block_id();
    let preferred = if settings.use_mending && settings.use_mending_on.contains(id) {
        Some(Enchantment::Mending)
    } else if settings.use_silk_touch && settings.use_silk_touch_on.contains(id) {
        Some(Enchantment::SilkTouch)
    } else if settings.use_fortune && settings.use_fortune_on.contains(id) {
        Some(Enchantment::Fortune)
    } else {
        None
    };

    match preferred {
        Some(enchantment) => {
            let slot = enchanted_slot_for(hotbar, block, enchantment);
            tracing::debug!("[TOOLS] {:?} preferred on {}: slot {}", enchantment, id, slot);
            Ok(slot)
        }
        None => fastest_slot_for(hotbar, block, settings.eco),
    }
}

/// Slot picked for a block type and the break speed it gives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestTool {
    pub slot: u8,
    pub speed: f64,
}

/// Block id -> best tool with the current hotbar.
///
/// Nothing here notices hotbar or settings changes; the owner calls `invalidate`.
#[derive(Debug, Clone, Default)]
pub struct BreakSpeedCache {
    speeds: HashMap<String, BestTool>,
}

impl BreakSpeedCache {
    pub fn get(&self, block_id: &str) -> Option<BestTool> {
        self.speeds.get(block_id).copied()
    }

    pub fn insert(&mut self, block_id: &str, best: BestTool) {
        self.speeds.insert(block_id.to_string(), best);
    }

    pub fn invalidate(&mut self) {
        self.speeds.clear();
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ToolSet {
    settings: ToolSettings,
    potion: f64,
    cache: BreakSpeedCache,
}

impl ToolSet {
    pub fn new(settings: ToolSettings, effects: &ActiveEffects) -> Self {
        let potion = if settings.consider_potion_effects {
            potion_multiplier(effects)
        } else {
            1.0
        };
        Self {
            settings,
            potion,
            cache: BreakSpeedCache::default(),
        }
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// 1.0 when potion effects are ignored
    pub fn potion_multiplier(&self) -> f64 {
        self.potion
    }

    pub fn cache(&self) -> &BreakSpeedCache {
        &self.cache
    }

    pub fn best_slot<B, I>(&self, hotbar: &Hotbar<I>, block: &B) -> Result<u8>
    where
        B: Block + ?Sized,
        I: ToolItem<B>,
    {
        select_best_slot(hotbar, block, &self.settings)
    }

    /// Best slot and its break speed, after avoidance and potion scaling.
    pub fn best_tool<B, I>(&self, hotbar: &Hotbar<I>, block: &B) -> Result<BestTool>
    where
        B: Block + ?Sized,
        I: ToolItem<B>,
    {
        let slot = self.best_slot(hotbar, block)?;
        let speed = calculate_speed_vs_block(hotbar.slot(slot), block, true);
        Ok(BestTool {
            slot,
            speed: speed * self.settings.avoidance_multiplier(block.block_id()) * self.potion,
        })
    }

    pub fn best_destruction_speed<B, I>(&self, hotbar: &Hotbar<I>, block: &B) -> Result<f64>
    where
        B: Block + ?Sized,
        I: ToolItem<B>,
    {
        Ok(self.best_tool(hotbar, block)?.speed)
    }

    /// Cached `best_tool`, keyed by block type only. Slot and speed always
    /// come from the same computation.
    pub fn cached_best_tool<B, I>(&mut self, hotbar: &Hotbar<I>, block: &B) -> Result<BestTool>
    where
        B: Block + ?Sized,
        I: ToolItem<B>,
    {
        let id = block.block_id();
        if let Some(best) = self.cache.get(id) {
            tracing::trace!("[TOOLS] cache hit for {}", id);
            return Ok(best);
        }
        let best = self.best_tool(hotbar, block)?;
        tracing::debug!(
            "[TOOLS] {} -> slot {} at {:.5} (cached {} blocks)",
            id,
            best.slot,
            best.speed,
            self.cache.len() + 1
        );
        self.cache.insert(id, best);
        Ok(best)
    }

    /// Cached break speed with the best hotbar tool
    pub fn strength_vs_block<B, I>(&mut self, hotbar: &Hotbar<I>, block: &B) -> Result<f64>
    where
        B: Block + ?Sized,
        I: ToolItem<B>,
    {
        Ok(self.cached_best_tool(hotbar, block)?.speed)
    }

    /// Call whenever the hotbar contents change
    pub fn invalidate(&mut self) {
        tracing::debug!("[TOOLS] Dropping {} cached speeds", self.cache.len());
        self.cache.invalidate();
    }

    /// Swap in new settings/effects; cached speeds are dropped.
    pub fn reconfigure(&mut self, settings: ToolSettings, effects: &ActiveEffects) {
        *self = Self::new(settings, effects);
    }
}
