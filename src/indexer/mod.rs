//! Indexing for directories of chat logs
//!
//! - [`discovery`] walks a directory tree and collects `.txt` chat logs
//! - [`builder`] parses them in parallel and merges their messages newest-first
//!
//! The parser is stateless, so each file is parsed independently on the rayon pool.
//! Per-file failures are tolerated up to a 50% failure rate; see [`builder`] for the
//! exact policy.

pub mod builder;
pub mod discovery;

pub use builder::build_index;
pub use discovery::discover_chat_logs;
