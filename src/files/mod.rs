mod file_manager;
mod file_type;

pub use crate::files::file_manager::*;
pub use crate::files::file_type::*;
