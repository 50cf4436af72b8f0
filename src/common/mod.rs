mod app_bar_info;
mod point;
mod rect;
mod screen_edge;
mod test_utils;
mod window_handle;

pub use app_bar_info::*;
pub use point::*;
pub use rect::*;
pub use screen_edge::*;
pub use window_handle::*;

#[allow(unused_imports)]
#[cfg(test)]
pub use test_utils::*;
