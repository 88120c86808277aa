//! Shared helpers: paths, encoding, token estimation

pub mod encoding;
pub mod hashing;
pub mod paths;
pub mod tokens;

pub use encoding::{decode_text, read_file_text};
pub use hashing::content_hash;
pub use paths::normalize_path;
pub use tokens::{count_tokens, HeuristicEstimator, TokenEstimator};
