#[macro_use]
extern crate log;

use std::sync::{Arc, Mutex};
use tray_anchor::{ConfigurationProvider, LogManager, RealShellApi, TrayLocationProvider};

fn main() {
  let configuration_provider = Arc::new(Mutex::new(ConfigurationProvider::new()));
  let _log_manager = LogManager::new_initialised(configuration_provider.clone());
  configuration_provider
    .lock()
    .expect("Failed to log configuration because configuration provider is locked")
    .log_current_config();

  let tray_location_provider = TrayLocationProvider::new(RealShellApi::new());
  let taskbar = tray_location_provider.query_taskbar();
  info!(
    "Taskbar is docked at the [{}] edge of the screen, covering {}",
    taskbar.edge, taskbar.rect
  );
  info!("Work area is {}", taskbar.work_area);
  info!("Tray popups should be anchored at {}", taskbar.anchor());
}
