use std::fmt::Formatter;
use windows::Win32::Foundation::POINT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Point {
  x: i32,
  y: i32,
}

impl Point {
  pub fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }

  pub fn x(&self) -> i32 {
    self.x
  }

  pub fn y(&self) -> i32 {
    self.y
  }

  pub fn as_point(&self) -> POINT {
    POINT { x: self.x, y: self.y }
  }
}

#[allow(clippy::from_over_into)]
impl Into<POINT> for &Point {
  fn into(self) -> POINT {
    POINT { x: self.x, y: self.y }
  }
}

impl std::fmt::Display for Point {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_creates_point_with_correct_coordinates() {
    let point = Point::new(-10, 20);

    assert_eq!(point.x(), -10);
    assert_eq!(point.y(), 20);
  }

  #[test]
  fn as_point_converts_to_windows_point_correctly() {
    let point = Point::new(15, 25);
    let windows_point = point.as_point();

    assert_eq!(windows_point.x, 15);
    assert_eq!(windows_point.y, 25);
  }

  #[test]
  fn display_formats_point_correctly() {
    let point = Point::new(7, 14);

    assert_eq!(format!("{}", point), "(7, 14)");
  }
}
