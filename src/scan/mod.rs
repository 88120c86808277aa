//! File eligibility and filesystem traversal

pub mod eligibility;
pub mod walk;

pub use eligibility::EligibilityPolicy;
pub use walk::walk_repository;
