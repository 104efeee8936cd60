//! Unicode primitives: interval-set codepoint ranges, a compressed
//! multi-stage trie for property lookup, and a normalization engine
//! covering NFC/NFD/NFKC/NFKD, case folding, and grapheme cluster
//! iteration.
//!
//! This crate implements the *algorithms* — set algebra, trie
//! compression, decomposition/reordering/composition, Quick_Check, case
//! folding, and grapheme boundary rules — over a small
//! [`tables::DefaultTables`] dataset covering exactly what this crate's
//! own tests exercise. A production deployment would generate its
//! [`tables`] implementation from the Unicode Character Database at
//! build time and feed it through [`trie::Trie`] / [`varint`] for
//! compact storage; that data pipeline is out of scope here.

/// Copy-on-write packed `u24` arrays backing [`codepointset::CodepointSet`].
pub mod uint24;

/// Runtime-dispatched fixed-bit-width packed integer storage.
pub mod packed;

/// Interval-list codepoint sets and their algebra.
pub mod codepointset;

/// First-difference varint codec for interval streams.
pub mod varint;

/// Multi-stage, page-deduplicated lookup trie.
pub mod trie;

/// Unicode property name normalization and resolution.
pub mod names;

/// The external table trait surface, plus a small hand-curated dataset.
pub mod tables;

/// Normalization Forms C/D/KC/KD.
pub mod normalize;

/// Case-insensitive comparison and case conversion.
pub mod case;

/// Grapheme cluster iteration.
pub mod grapheme;

/// Thin classification predicates (General_Category, alphabetic, whitespace).
pub mod properties;

pub use self::codepointset::CodepointSet;
pub use self::grapheme::{graphemes, Grapheme};
pub use self::normalize::{nfc, nfd, nfkc, nfkd};
pub use self::tables::{DefaultTables, GeneralCategory, NormalizationForm};
pub use self::trie::{Trie, TrieBuilder};
