pub mod corpus;
pub mod corrections;
pub mod dialect;
pub mod io;
pub mod parsing;
pub mod xref;


// Re-export key types for easier usage
pub use corpus::{Corpus, CorpusError, PageLink, RenderedDocument, SourceDocument};
pub use corrections::{Correction, Edit, LineRange};
pub use dialect::{Dialect, Grammars};
pub use io::IoError;
pub use xref::{CrossReference, TagIndex, TitleIndex};
