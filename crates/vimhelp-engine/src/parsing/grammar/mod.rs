//! # Block Grammars
//!
//! A grammar is plain data: one [`BlockDef`] per [`BlockType`], holding the
//! predicates that open and close a block, the ordered list of block types it
//! may contain, and how its content is rendered. The tree builder and the
//! renderer are generic over it.
//!
//! ## Modules
//!
//! - **`helpers`**: line predicates and rewrites shared by the dialects
//! - **`usr`**: user manual pages (`usr_01.txt` .. `usr_90.txt`)
//! - **`help`**: every other help file
//! - **`usr_toc`**: the user manual table of contents page
//! - **`toc`**: the sidebar table of contents, derived from `usr_toc`

pub mod help;
pub mod helpers;
pub mod toc;
pub mod usr;
pub mod usr_toc;

use std::collections::HashMap;

use thiserror::Error;

use super::blocks::{BlockType, Context};
use super::render::{RenderContext, RenderError};

pub type Predicate = fn(&Context<'_>) -> bool;
pub type LineTransform = fn(&str) -> String;
pub type BlockTransform = fn(Vec<String>) -> Vec<String>;
pub type WrapFn = fn(&[String], &RenderContext<'_>) -> Result<String, RenderError>;

/// How the rendered content of a block is turned into its final markup.
#[derive(Debug, Clone, Copy)]
pub enum Wrapper {
    /// Join with a space and wrap in this tag.
    Tag(&'static str),
    /// Join with a space and wrap in this tag with these attributes.
    TagWith(&'static str, &'static [(&'static str, &'static str)]),
    /// Build the markup from the rendered strings.
    With(WrapFn),
}

#[derive(Debug, Clone)]
pub struct BlockDef {
    pub start: Predicate,
    pub end: Predicate,
    /// Block types that may open inside this one, in priority order.
    pub contained: Vec<BlockType>,
    /// Applied to each escaped text line directly under this block.
    pub transform_lines: Option<LineTransform>,
    /// Applied to the rendered children before inline parsing and wrapping.
    pub transform_block: Option<BlockTransform>,
    pub inline_parsing: bool,
    pub wrapper: Wrapper,
}

impl BlockDef {
    pub fn new(start: Predicate, end: Predicate, wrapper: Wrapper) -> Self {
        Self {
            start,
            end,
            contained: Vec::new(),
            transform_lines: None,
            transform_block: None,
            inline_parsing: true,
            wrapper,
        }
    }

    pub fn contains(mut self, blocks: &[BlockType]) -> Self {
        self.contained = blocks.to_vec();
        self
    }

    pub fn lines(mut self, transform: LineTransform) -> Self {
        self.transform_lines = Some(transform);
        self
    }

    pub fn block(mut self, transform: BlockTransform) -> Self {
        self.transform_block = Some(transform);
        self
    }

    /// Disable inline formatting for this block's content.
    pub fn raw(mut self) -> Self {
        self.inline_parsing = false;
        self
    }

    /// A leaf block only ever holds text.
    pub fn is_leaf(&self) -> bool {
        self.contained.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("grammar `{grammar}` has no definition for its root block `{root}`")]
    MissingRoot { grammar: &'static str, root: BlockType },

    #[error("grammar `{grammar}`: block `{parent}` contains `{child}`, which is not defined")]
    MissingBlock {
        grammar: &'static str,
        parent: BlockType,
        child: BlockType,
    },
}

/// A validated set of block definitions.
///
/// Construction checks that the root and every contained block type are
/// defined, so lookups from the root downwards cannot miss.
#[derive(Debug, Clone)]
pub struct Grammar {
    name: &'static str,
    root: BlockType,
    blocks: HashMap<BlockType, BlockDef>,
}

impl Grammar {
    pub fn new(
        name: &'static str,
        root: BlockType,
        blocks: impl IntoIterator<Item = (BlockType, BlockDef)>,
    ) -> Result<Self, GrammarError> {
        let grammar = Self {
            name,
            root,
            blocks: blocks.into_iter().collect(),
        };
        grammar.validate()?;
        Ok(grammar)
    }

    fn validate(&self) -> Result<(), GrammarError> {
        if !self.blocks.contains_key(&self.root) {
            return Err(GrammarError::MissingRoot {
                grammar: self.name,
                root: self.root,
            });
        }

        let mut kinds: Vec<_> = self.blocks.keys().copied().collect();
        kinds.sort();
        for parent in kinds {
            for child in &self.blocks[&parent].contained {
                if !self.blocks.contains_key(child) {
                    return Err(GrammarError::MissingBlock {
                        grammar: self.name,
                        parent,
                        child: *child,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn root(&self) -> BlockType {
        self.root
    }

    pub fn get(&self, kind: BlockType) -> Option<&BlockDef> {
        self.blocks.get(&kind)
    }

    /// Definition of a block type reachable from the root.
    ///
    /// Validation guarantees the root and every contained type are present.
    pub(crate) fn block(&self, kind: BlockType) -> &BlockDef {
        &self.blocks[&kind]
    }

    /// Swap one definition for a variant, revalidating the result.
    pub fn with_block(mut self, kind: BlockType, def: BlockDef) -> Result<Self, GrammarError> {
        self.blocks.insert(kind, def);
        self.validate()?;
        Ok(self)
    }

    /// Mutate an existing definition in place.
    pub fn map_block(mut self, kind: BlockType, f: impl FnOnce(&mut BlockDef)) -> Self {
        if let Some(def) = self.blocks.get_mut(&kind) {
            f(def);
        }
        self
    }
}
