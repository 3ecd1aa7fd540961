use anyhow::{Context, Result};
use dialoguer::{Confirm, Input};
use inventory_indicators::{
    config::ConfigLoader,
    host::{HostDriver, Scenario, ScenarioPlayer},
    logging::init_logger,
    plugin::InventoryIndicatorsPlugin,
};
use std::path::PathBuf;
use tracing::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    info!("Starting Inventory Indicators v{}", VERSION);

    let config_loader = ConfigLoader::new();
    let mut config = config_loader.load()?;

    if config.is_first_run() {
        config.display_full = Confirm::new()
            .with_prompt("Show the full inventory indicator?")
            .default(config.display_full)
            .interact()?;
        config.display_contain = Confirm::new()
            .with_prompt("Show the item name indicator?")
            .default(config.display_contain)
            .interact()?;

        let names: String = Input::new()
            .with_prompt("Item names to watch for (separate with '.')")
            .allow_empty(true)
            .interact_text()?;
        config.contain_name = Some(names);

        config_loader.save(&config)?;
    }

    info!("Full inventory indicator: {}", if config.display_full { "ENABLED" } else { "DISABLED" });
    info!("Item name indicator: {}", if config.display_contain { "ENABLED" } else { "DISABLED" });
    info!("Watching for: {:?}", config.contain_patterns());

    let scenario_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("scenario.json"));
    let scenario = Scenario::load(&scenario_path)
        .with_context(|| format!("Failed to load scenario {:?}", scenario_path))?;
    info!(
        "Loaded scenario {:?}: {} items, {} frames",
        scenario_path,
        scenario.items.len(),
        scenario.frames.len()
    );

    let mut plugin = InventoryIndicatorsPlugin::new(config, scenario.items);
    plugin.start_up();

    let mut driver = HostDriver::new(&config_loader);
    driver
        .run(&mut plugin, ScenarioPlayer::new(scenario.frames))
        .await?;

    plugin.shut_down();
    info!("Final state: {:?}", plugin.state());
    Ok(())
}
