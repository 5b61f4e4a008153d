//! # Block Parsing
//!
//! Turns the lines of a help file into a tree of typed blocks.
//!
//! ## Phases
//!
//! 1. **Build** (`builder`): a single left-to-right scan. For every line the
//!    builder computes a [`Context`], opens as many nested blocks as the
//!    grammar's start predicates allow, stores the line (blank lines are only
//!    context), then closes as many blocks as the end predicates ask for.
//!
//! 2. **Clean** (`clean`): empty blocks are removed bottom-up, then any text
//!    left directly under the root is dropped.
//!
//! ## Modules
//!
//! - **`types`**: `BlockType` and the owned `Node` tree
//! - **`context`**: the per-line `Context` seen by predicates
//! - **`builder`**: `TreeBuilder` and the `build` entry point
//! - **`clean`**: the post-build cleaner
//!
//! ## Key Invariants
//!
//! - `contained` order is the tie-break when several blocks could open
//! - After the last line the open path collapses to the root
//! - Cleaning twice gives the same tree as cleaning once

pub mod builder;
pub mod clean;
pub mod context;
pub mod types;

pub use builder::{TreeBuilder, build, build_with_report};
pub use clean::{CleanReport, clean, clean_with_report};
pub use context::Context;
pub use types::{BlockType, Node};
