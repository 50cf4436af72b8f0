use std::fmt::{Display, Formatter};
use windows::Win32::UI::Shell::{ABE_BOTTOM, ABE_LEFT, ABE_RIGHT, ABE_TOP};

/// An enum representing the side of the screen an app bar is docked to. `Undefined` is reported when the dock
/// position could not be determined; the anchor rule table treats it exactly like `Bottom`, which is where the
/// taskbar lives on a default Windows install.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScreenEdge {
  Left,
  Top,
  Right,
  Bottom,
  #[default]
  Undefined,
}

impl From<u32> for ScreenEdge {
  /// Converts the raw `uEdge` value of an `APPBARDATA` into a `ScreenEdge`. Values outside the `ABE_*` range
  /// collapse to `Undefined`.
  fn from(value: u32) -> Self {
    match value {
      ABE_LEFT => Self::Left,
      ABE_TOP => Self::Top,
      ABE_RIGHT => Self::Right,
      ABE_BOTTOM => Self::Bottom,
      _ => Self::Undefined,
    }
  }
}

impl Display for ScreenEdge {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Left => write!(f, "Left"),
      Self::Top => write!(f, "Top"),
      Self::Right => write!(f, "Right"),
      Self::Bottom => write!(f, "Bottom"),
      Self::Undefined => write!(f, "Undefined"),
    }
  }
}
