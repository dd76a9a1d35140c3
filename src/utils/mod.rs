pub mod case;
pub mod environment;
pub mod paths;
pub mod terminal;

pub use case::to_lower_camel_case;
pub use environment::{LOG_DIR_ENV, get_log_dir};
pub use paths::{is_chat_log_file, validate_file_size};
pub use terminal::sanitize_for_terminal;
