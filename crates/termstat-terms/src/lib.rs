//! Identifier decomposition and term ranking.
//!
//! `split_identifier` breaks an identifier into sub-words, `TermFilter`
//! normalizes them and decides which count, `TermCounter` accumulates the
//! accepted terms, and `rank` produces the ordered top-N list.

mod counter;
mod filter;
mod ranker;
mod tokenizer;

pub use counter::TermCounter;
pub use filter::{Rejection, TermFilter, Verdict, normalize};
pub use ranker::{compare, rank};
pub use tokenizer::{split_camel_case, split_identifier};
