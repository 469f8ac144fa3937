pub mod collection;
pub mod document;
pub mod eval;
pub mod index;
pub mod search;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

pub use document::{DocId, Document, TermView};
pub use index::{InvertedIndex, Posting};
pub use search::{boolean_search, vector_space_search, SearchOptions};
