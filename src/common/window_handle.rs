use std::fmt::Formatter;
use windows::Win32::Foundation::HWND;

/// A simple wrapper around a window handle. Its purpose is to standardise the handle type across the codebase so
/// that the raw pointer inside `HWND` never travels beyond the API layer.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub struct WindowHandle {
  pub hwnd: isize,
}

impl WindowHandle {
  pub fn as_hwnd(&self) -> HWND {
    HWND(self.hwnd as *mut core::ffi::c_void)
  }
}

impl From<HWND> for WindowHandle {
  fn from(value: HWND) -> Self {
    Self { hwnd: value.0 as isize }
  }
}

#[allow(clippy::from_over_into)]
impl Into<HWND> for WindowHandle {
  fn into(self) -> HWND {
    HWND(self.hwnd as *mut core::ffi::c_void)
  }
}

impl std::fmt::Display for WindowHandle {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "w#{}", self.hwnd)
  }
}
