//! repo-prompt: turn a public repository into one LLM-ready prompt artifact
//!
//! Ingests a repository's file tree through one of two interchangeable
//! strategies (provider tree API or shallow clone), filters files through
//! a single eligibility policy, and assembles a selected subset into a
//! concatenated text artifact with an approximate token count.

pub mod cli;
pub mod config;
pub mod domain;
pub mod fetch;
pub mod render;
pub mod scan;
pub mod utils;

pub use config::{Config, Strategy};
pub use domain::{RepoRef, RetrievedFile};
pub use fetch::{get_repository_files, IngestionError};
pub use render::{assemble, AssembleOptions};
