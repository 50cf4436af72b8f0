use crate::common::{AppBarPosition, Rect, WindowHandle};

/// The shell operations the rest of the crate consumes. Implemented by `RealShellApi` for production use and by
/// `MockShellApi` in tests. Every method is a single attempt against ambient OS state; failures surface as `None`
/// or a zero rectangle, never as errors.
pub trait ShellApi {
  /// Locates a top-level window by its class name. Returns `None` if no such window exists.
  fn find_window_by_class(&self, class_name: &str) -> Option<WindowHandle>;
  /// Asks the shell for the dock position of the given app bar window. Returns `None` if the query message is not
  /// answered with success.
  fn query_app_bar_position(&self, handle: WindowHandle) -> Option<AppBarPosition>;
  /// Returns the current desktop work area, or the zero rectangle if it cannot be determined.
  fn get_work_area(&self) -> Rect;
}
