use std::fmt::Display;
use windows::Win32::Foundation::RECT;

/// A rectangle in screen coordinates. Used both for the desktop work area and for app bar bounds. A zero rectangle
/// is the degraded value callers receive when the work area query fails.
#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone, Default)]
pub struct Rect {
  pub left: i32,
  pub top: i32,
  pub right: i32,
  pub bottom: i32,
}

impl Rect {
  pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
    Self {
      top,
      left,
      right,
      bottom,
    }
  }

  pub fn width(&self) -> i32 {
    self.right - self.left
  }

  pub fn height(&self) -> i32 {
    self.bottom - self.top
  }
}

impl From<RECT> for Rect {
  fn from(value: RECT) -> Self {
    Self {
      left: value.left,
      top: value.top,
      right: value.right,
      bottom: value.bottom,
    }
  }
}

#[allow(clippy::from_over_into)]
impl Into<RECT> for Rect {
  fn into(self) -> RECT {
    RECT {
      left: self.left,
      top: self.top,
      right: self.right,
      bottom: self.bottom,
    }
  }
}

impl Display for Rect {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "Rect[({}, {})-({}, {}), width: {}, height: {}]",
      self.left,
      self.top,
      self.right,
      self.bottom,
      self.width(),
      self.height()
    )
  }
}
