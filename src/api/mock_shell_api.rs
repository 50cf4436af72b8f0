#[cfg(test)]
pub(crate) mod test {
  use crate::api::ShellApi;
  use crate::common::{AppBarPosition, Rect, WindowHandle};
  use std::cell::RefCell;
  use std::collections::HashMap;

  thread_local! {
      static MOCK_STATE: RefCell<MockState> = RefCell::new(MockState::default());
  }

  #[derive(Default, Clone)]
  struct MockState {
    windows_by_class: HashMap<String, WindowHandle>,
    app_bar_positions: HashMap<WindowHandle, AppBarPosition>,
    work_area: Rect,
  }

  /// State is thread-local, so every test starts from an empty desktop: no windows, no app bar answers, and a zero
  /// work area.
  #[derive(Copy, Clone)]
  pub struct MockShellApi;

  impl MockShellApi {
    pub fn new() -> Self {
      Self {}
    }

    pub fn set_window(class_name: &str, handle: WindowHandle) {
      MOCK_STATE.with(|state| {
        state.borrow_mut().windows_by_class.insert(class_name.to_string(), handle);
      });
    }

    pub fn set_app_bar_position(handle: WindowHandle, position: AppBarPosition) {
      MOCK_STATE.with(|state| {
        state.borrow_mut().app_bar_positions.insert(handle, position);
      });
    }

    pub fn set_work_area(work_area: Rect) {
      MOCK_STATE.with(|state| {
        state.borrow_mut().work_area = work_area;
      });
    }

    // Helper method to reset all mock data
    pub fn reset() {
      MOCK_STATE.with(|state| {
        *state.borrow_mut() = MockState::default();
      });
    }
  }

  impl ShellApi for MockShellApi {
    fn find_window_by_class(&self, class_name: &str) -> Option<WindowHandle> {
      MOCK_STATE.with(|state| state.borrow().windows_by_class.get(class_name).copied())
    }

    fn query_app_bar_position(&self, handle: WindowHandle) -> Option<AppBarPosition> {
      MOCK_STATE.with(|state| state.borrow().app_bar_positions.get(&handle).copied())
    }

    fn get_work_area(&self) -> Rect {
      MOCK_STATE.with(|state| state.borrow().work_area)
    }
  }
}
