use std::env;
use std::path::PathBuf;

pub struct Config {
    pub scenario_path: PathBuf,
    pub settings_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            scenario_path: env::var("TOOLSET_SCENARIO")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/scenario.json")),
            settings_path: env::var("TOOLSET_SETTINGS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/settings.json")),
        }
    }
}
