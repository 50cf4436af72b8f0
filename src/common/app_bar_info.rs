use crate::common::{Point, Rect, ScreenEdge};
use windows::Win32::UI::Shell::APPBARDATA;

/// The raw result of a successful `ABM_GETTASKBARPOS` query: the edge the app bar is docked to and the app bar's
/// own bounding rectangle, exactly as reported by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppBarPosition {
  pub edge: ScreenEdge,
  pub rect: Rect,
}

impl From<APPBARDATA> for AppBarPosition {
  fn from(value: APPBARDATA) -> Self {
    Self {
      edge: ScreenEdge::from(value.uEdge),
      rect: Rect::from(value.rc),
    }
  }
}

/// A per-request snapshot of an app bar and the desktop around it. Nothing is cached; every query produces a fresh
/// snapshot and degraded defaults (`Undefined` edge, zero rectangles) stand in for anything that could not be
/// determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppBarInfo {
  /// The screen edge the app bar is docked to, or `Undefined` if it could not be determined.
  pub edge: ScreenEdge,
  /// The app bar's own bounding rectangle i.e. the band the taskbar occupies.
  pub rect: Rect,
  /// The desktop work area i.e. the screen excluding the space reserved by app bars.
  pub work_area: Rect,
}

impl AppBarInfo {
  /// Returns the point at which popups for this app bar should be anchored. Left-docked bars anchor at the
  /// bottom-left corner of the work area, inset by 2px; top-docked bars at the top-right corner; everything else,
  /// including `Undefined`, at the bottom-right corner. Always produces a point, even for a zero work area.
  pub fn anchor(&self) -> Point {
    match self.edge {
      ScreenEdge::Left => Point::new(self.work_area.left + 2, self.work_area.bottom),
      ScreenEdge::Top => Point::new(self.work_area.right, self.work_area.top),
      ScreenEdge::Right => Point::new(self.work_area.right, self.work_area.bottom),
      ScreenEdge::Bottom | ScreenEdge::Undefined => Point::new(self.work_area.right, self.work_area.bottom),
    }
  }
}
