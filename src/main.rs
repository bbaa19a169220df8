mod config;

use baritone_tools::scenario::Scenario;
use baritone_tools::ToolSettings;
use config::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load();
    let settings = ToolSettings::load_or_default(&config.settings_path);
    let scenario = Scenario::load(&config.scenario_path)?;

    println!("Scenario: {}", config.scenario_path.display());
    println!("{} blocks against {} hotbar items", scenario.blocks.len(), scenario.hotbar.len());

    for report in scenario.evaluate(&settings)? {
        if report.speed < 0.0 {
            println!("[{}] unbreakable (slot {}: {})", report.block, report.slot, report.item);
        } else {
            println!(
                "[{}] slot {} ({}) -> {:.5}/tick, ~{:.0} ticks",
                report.block,
                report.slot,
                report.item,
                report.speed,
                (1.0 / report.speed).ceil()
            );
        }
    }

    Ok(())
}
