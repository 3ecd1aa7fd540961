use anyhow::Result;
use std::time::{Duration, SystemTime};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::scenario::ScenarioPlayer;
use crate::config::ConfigLoader;
use crate::inventory::NameResolver;
use crate::overlay::LogSurface;
use crate::plugin::{HostEvent, InventoryIndicatorsPlugin};

/// Drives a plugin the way the game client would
///
/// Game ticks and render passes run on their own intervals but on a single
/// task, so the evaluator and the presenter never run at the same time.
pub struct HostDriver<'a> {
    loader: &'a ConfigLoader,
    config_modified: Option<SystemTime>,
    surface: LogSurface,
}

impl<'a> HostDriver<'a> {
    pub fn new(loader: &'a ConfigLoader) -> Self {
        Self {
            loader,
            config_modified: loader.modified(),
            surface: LogSurface::new(),
        }
    }

    /// Run until the scenario is exhausted or Ctrl+C is pressed
    pub async fn run<R: NameResolver>(
        &mut self,
        plugin: &mut InventoryIndicatorsPlugin<R>,
        mut player: ScenarioPlayer,
    ) -> Result<()> {
        let config = plugin.config();
        let mut game_tick = interval(Duration::from_millis(config.tick_interval_ms.max(1)));
        let mut render_tick = interval(Duration::from_millis(config.render_interval_ms.max(1)));
        game_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
        render_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut ticks: u64 = 0;
        loop {
            tokio::select! {
                _ = game_tick.tick() => {
                    self.reload_config(plugin);

                    let Some(events) = player.next_tick() else {
                        info!("Scenario finished after {} ticks", ticks);
                        break;
                    };
                    for event in events {
                        plugin.handle(event);
                    }
                    ticks += 1;
                    debug!("Tick {}: {:?}", ticks, plugin.state());
                }
                _ = render_tick.tick() => {
                    self.render(plugin);
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted after {} ticks", ticks);
                    break;
                }
            }
        }

        self.render(plugin);
        Ok(())
    }

    fn render<R: NameResolver>(&mut self, plugin: &InventoryIndicatorsPlugin<R>) {
        plugin.render(&mut self.surface);
        self.surface.present();
    }

    /// Forward edits of the config file to the plugin
    fn reload_config<R: NameResolver>(&mut self, plugin: &mut InventoryIndicatorsPlugin<R>) {
        let modified = self.loader.modified();
        if modified == self.config_modified {
            return;
        }
        self.config_modified = modified;

        // Loading a missing file would write defaults over the live settings
        if modified.is_none() {
            warn!("Config file {:?} removed, keeping previous configuration", self.loader.path());
            return;
        }

        match self.loader.load() {
            Ok(config) => plugin.handle(HostEvent::ConfigChanged(config)),
            Err(e) => warn!("Keeping previous configuration: {:#}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::inventory::ItemCatalog;

    fn shark_config() -> Config {
        Config {
            contain_name: Some("shark".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_deleted_config_keeps_live_settings() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::with_path(dir.path().join("config.toml"));
        loader.save(&shark_config()).unwrap();

        let mut driver = HostDriver::new(&loader);
        let mut plugin = InventoryIndicatorsPlugin::new(shark_config(), ItemCatalog::new());

        std::fs::remove_file(loader.path()).unwrap();
        driver.reload_config(&mut plugin);

        assert_eq!(plugin.config().contain_patterns(), "shark");
        assert!(!loader.path().exists());
    }

    #[test]
    fn test_recreated_config_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::with_path(dir.path().join("config.toml"));
        loader.save(&shark_config()).unwrap();

        let mut driver = HostDriver::new(&loader);
        let mut plugin = InventoryIndicatorsPlugin::new(shark_config(), ItemCatalog::new());

        std::fs::remove_file(loader.path()).unwrap();
        driver.reload_config(&mut plugin);

        loader
            .save(&Config {
                contain_name: Some("lobster".to_string()),
                ..Config::default()
            })
            .unwrap();
        driver.reload_config(&mut plugin);

        assert_eq!(plugin.config().contain_patterns(), "lobster");
    }
}
