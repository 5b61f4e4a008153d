//! # Snapshot Testing Support
//!
//! Utilities for testing the block parser via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a tree as an indented outline, one node per
//!   line, for `insta` inline snapshots
//! - **`invariants`**: structural checks every built tree must pass (no empty
//!   blocks, no text under the root, children allowed by the grammar)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
