use crate::api::ShellApi;
use crate::common::{AppBarInfo, Point, Rect, ScreenEdge};

/// The window class of the primary taskbar. Secondary taskbars use a different class and are not resolved by
/// `query_taskbar`.
pub const TASKBAR_CLASS_NAME: &str = "Shell_TrayWnd";

/// Resolves where on the desktop tray popups should appear by querying the shell for the taskbar's docking edge
/// and the current work area. Every method returns a plain value: failures along the way are logged and degrade to
/// the bottom-docked default rather than surfacing as errors.
pub struct TrayLocationProvider<T: ShellApi> {
  shell_api: T,
}

impl<T: ShellApi + Copy> TrayLocationProvider<T> {
  pub fn new(api: T) -> Self {
    Self { shell_api: api }
  }

  /// Returns the point at which a tray popup should be anchored, derived from the taskbar's docking edge and the
  /// current work area. Queries the shell afresh on every call so that moving the taskbar between calls is picked
  /// up without any invalidation logic.
  pub fn resolve_anchor(&self) -> Point {
    self.query_taskbar().anchor()
  }

  /// Takes a snapshot of the primary taskbar: its docking edge, its bounding rectangle, and the work area around
  /// it.
  pub fn query_taskbar(&self) -> AppBarInfo {
    self.query_app_bar(TASKBAR_CLASS_NAME)
  }

  /// Takes a snapshot of any app bar identified by its window class. If the window cannot be found, or the shell
  /// cannot report where it is docked, the snapshot degrades to an `Undefined` edge and a zero rectangle so that
  /// callers always receive a usable value.
  pub fn query_app_bar(&self, class_name: &str) -> AppBarInfo {
    let (edge, rect) = match self.shell_api.find_window_by_class(class_name) {
      Some(handle) => match self.shell_api.query_app_bar_position(handle) {
        Some(position) => (position.edge, position.rect),
        None => {
          warn!("Failed to query the dock position of app bar {handle}");
          (ScreenEdge::Undefined, Rect::default())
        }
      },
      None => {
        warn!("Failed to find an app bar window with class [{class_name}]");
        (ScreenEdge::Undefined, Rect::default())
      }
    };

    AppBarInfo {
      edge,
      rect,
      work_area: self.shell_api.get_work_area(),
    }
  }
}
