//! Hotbar tool selection, world border checks and block interaction
//! events for a pathing bot. The game client is reached only through
//! the read-only views in [`host`].

pub mod error;
pub mod events;
pub mod host;
pub mod scenario;
pub mod snapshot;
pub mod systems;

pub use error::{Result, ToolSetError};
pub use events::{BlockInteractEvent, InteractionKind, InteractionListeners};
pub use host::{ActiveEffects, Block, Hotbar, ToolItem, HOTBAR_SIZE};
pub use systems::materials::{Enchantment, ToolMaterial};
pub use systems::settings::ToolSettings;
pub use systems::tool_set::{calculate_speed_vs_block, select_best_slot, BestTool, BreakSpeedCache, ToolSet};
pub use systems::world_border::{BorderBounds, WorldBorder};
