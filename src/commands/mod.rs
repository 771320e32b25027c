//! Command implementations
//!
//! Each command is a module with an execute function that takes the loaded
//! catalog and parsed CLI args and writes its report to the given writer.

pub mod categories;
pub mod config;
pub mod recent;
pub mod search;
pub mod show;

// Re-export execute functions for convenience
pub use categories::execute as categories;
pub use config::execute as config;
pub use recent::execute as recent;
pub use search::execute as search;
pub use show::execute as show;
