//! Profile document store adapters

mod file_repo;
mod memory_repo;

pub use file_repo::{FileProfileRepository, DEFAULT_PROFILES_FILE};
pub use memory_repo::InMemoryProfileRepository;
