#![cfg(test)]

use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
  TempDir::new().expect("Failed to create temporary directory")
}
