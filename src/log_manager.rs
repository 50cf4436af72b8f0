#![allow(unused_imports)]

use crate::configuration_provider::{ConfigurationProvider, FILE_LOGGING_ENABLED};
use crate::files::{FileType, get_path_to_file};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::sync::{Arc, Mutex};

const LOG_FILE_NAME: &str = "tray-anchor.log";

pub struct LogManager {
  #[allow(unused)]
  configuration_provider: Arc<Mutex<ConfigurationProvider>>,
}

impl LogManager {
  fn new(configuration_provider: Arc<Mutex<ConfigurationProvider>>) -> Self {
    Self { configuration_provider }
  }

  pub fn new_initialised(configuration_provider: Arc<Mutex<ConfigurationProvider>>) -> Self {
    let log_manager = Self::new(configuration_provider);
    log_manager.initialise();

    log_manager
  }

  #[allow(unused_mut)]
  fn initialise(&self) {
    let config = ConfigBuilder::new()
      .set_target_level(LevelFilter::Error)
      .set_thread_level(LevelFilter::Off)
      .build();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
      LevelFilter::Debug,
      config.clone(),
      TerminalMode::Mixed,
      ColorChoice::Auto,
    )];

    #[cfg(not(debug_assertions))]
    if self
      .configuration_provider
      .lock()
      .expect("Log manager failed to read [file_logging_enabled] because configuration provider is locked")
      .get_bool(FILE_LOGGING_ENABLED)
    {
      match get_path_to_file(LOG_FILE_NAME, FileType::Data) {
        Ok(log_path) => match File::create(&log_path) {
          Ok(log_file) => {
            let write_logger = WriteLogger::new(LevelFilter::Trace, config, log_file);
            loggers.push(write_logger);
          }
          Err(err) => {
            eprintln!("Failed to create log file: {}", err);
          }
        },
        Err(err) => {
          eprintln!("Failed to determine log file path: {}", err);
        }
      }
    }

    let count = loggers.len();
    CombinedLogger::init(loggers).expect("Failed to initialise logger");
    info!("Initialised [{}] logger(s)", count);
  }
}
