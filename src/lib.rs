// Library side of compound-finder; main.rs is a thin driver over these modules
// and the integration tests use them directly

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod reporter;
pub mod solver;
pub mod source;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use config::{LineSeparator, SearchConfig, SplitBounds, WordSource};
pub use errors::{ConfigError, SourceError};
pub use solver::{
    Decomposition, WordIndex, decompose, find_longest_decomposable_word,
    find_longest_decomposition, is_decomposable,
};
pub use wordlist::split_words;
