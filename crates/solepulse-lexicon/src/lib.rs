//! solepulse-lexicon
//!
//! Rule-based sentiment scoring tuned for short social-media text: a valence
//! lexicon with a sneaker-slang overlay, plus intensity rules for boosters,
//! negation, capitalisation, contrastive "but" and exclamation marks.

pub mod analyzer;
mod lexicon;

pub use analyzer::{LexiconAnalyzer, PolarityScores};
