mod file_progress_session;

pub use file_progress_session::{FileProgressSessionRepository, DEFAULT_PROGRESS_FILE};
