pub mod materials;
pub mod potion;
pub mod settings;
pub mod tool_set;
pub mod world_border;
