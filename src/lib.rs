//! Resolves the Windows taskbar's docking edge and the desktop work area to determine the point at which tray
//! popups should be anchored.

#[macro_use]
extern crate log;

mod api;
mod common;
mod configuration_provider;
mod files;
mod log_manager;
mod tray_location_provider;

pub use api::{RealShellApi, ShellApi};
pub use common::{AppBarInfo, AppBarPosition, Point, Rect, ScreenEdge, WindowHandle};
pub use configuration_provider::{ConfigurationProvider, FILE_LOGGING_ENABLED};
pub use files::{FileManager, FileType, get_path_to_file};
pub use log_manager::LogManager;
pub use tray_location_provider::{TASKBAR_CLASS_NAME, TrayLocationProvider};
