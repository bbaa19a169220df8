use baritone_tools::scenario::Scenario;
use baritone_tools::ToolSettings;
use std::path::PathBuf;

fn data(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

#[test]
fn test_bundled_scenario() {
    let scenario = Scenario::load(&data("scenario.json")).unwrap();
    let settings = ToolSettings::load_or_default(&data("settings.json"));
    assert!(settings.use_silk_touch);

    let reports = scenario.evaluate(&settings).unwrap();
    let slot_for = |id: &str| reports.iter().find(|r| r.block == id).unwrap().slot;

    assert_eq!(slot_for("minecraft:stone"), 1);
    assert_eq!(slot_for("minecraft:obsidian"), 1);
    assert_eq!(slot_for("minecraft:dirt"), 3);
    // silk touch beats the faster pickaxe on glass
    assert_eq!(slot_for("minecraft:glass"), 2);

    let bedrock = reports.iter().find(|r| r.block == "minecraft:bedrock").unwrap();
    assert_eq!(bedrock.speed, -1.0 * 1.2);
}

#[test]
fn test_missing_scenario_is_an_error() {
    assert!(Scenario::load(&data("does_not_exist.json")).is_err());
}
