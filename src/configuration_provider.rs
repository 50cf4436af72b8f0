use crate::files::{FileManager, FileType};
use serde::{Deserialize, Serialize};

pub const FILE_LOGGING_ENABLED: &str = "file_logging_enabled";

const CONFIGURATION_FILE_NAME: &str = "tray-anchor.toml";

#[derive(Debug, Serialize, Deserialize)]
struct Configuration {
  file_logging_enabled: bool,
}

impl Default for Configuration {
  fn default() -> Self {
    Self {
      file_logging_enabled: true,
    }
  }
}

pub struct ConfigurationProvider {
  config: Configuration,
  file_manager: FileManager<Configuration>,
}

impl ConfigurationProvider {
  pub fn new() -> Self {
    let file_manager = FileManager::new(CONFIGURATION_FILE_NAME, FileType::Config);
    let (config, _) = file_manager.load_or_create().expect("Failed to load configuration");

    Self { config, file_manager }
  }

  pub fn log_current_config(&self) {
    debug!("{:?}", self.config);
  }

  pub fn get_bool(&self, name: &str) -> bool {
    match name {
      FILE_LOGGING_ENABLED => self.config.file_logging_enabled,
      &_ => {
        warn!("Failed to get configuration because [{name}] is unknown");

        false
      }
    }
  }

  /// Sets bool value and saves the configuration to file.
  #[allow(clippy::single_match)]
  pub fn set_bool(&mut self, name: &str, value: bool) {
    match name {
      FILE_LOGGING_ENABLED => {
        if self.config.file_logging_enabled != value {
          self.config.file_logging_enabled = value;
          if let Err(err) = self.file_manager.save(&self.config) {
            error!("Failed to save configuration: {}", err);
          }
        }
      }
      &_ => {
        warn!("Failed to save configuration because [{name}] is unknown");
      }
    }
  }
}
