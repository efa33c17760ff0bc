//! Turn curated gene annotations into short natural-language gene descriptions
//!
//! The crate selects one authoritative annotation per gene and term based on
//! evidence code priority, renders term labels into template sentences and
//! summarizes ortholog lists into a single orthology sentence.
//!
//! See [`SentenceGenerator`] for the main entry point of the sentence pipeline.
use core::fmt::Debug;
use thiserror::Error;

pub mod annotations;
pub mod config;
pub mod ontology;
pub mod orthology;
pub mod parser;
pub mod sentence;
pub mod services;
pub mod term;
pub mod trimming;
mod utils;

pub use annotations::{Annotation, AnnotationSet, AnnotationSource, Aspect, EvidenceGroups};
pub use config::GenerationConfig;
pub use ontology::{Ontology, OntologyProvider};
pub use orthology::{OrthologCandidate, OrthologRecord};
pub use sentence::{Sentence, SentenceGenerator};
pub use term::{OntologyTerm, TermId};
pub use utils::concatenate_words_with_oxford_comma;

const DEFAULT_NUM_PARENTS: usize = 4;
const DEFAULT_NUM_TERMS: usize = 50_000;
const MAX_ORTHOLOGS_IN_SENTENCE: usize = 3;

/// Main Error type for this crate
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenedescError {
    /// Indicates that a term does not exist in the ontology
    #[error("term does not exist")]
    DoesNotExist,
    /// The template map has no prefix/postfix entry for the requested sentence.
    ///
    /// This is a configuration gap and not recoverable at runtime
    #[error(
        "no sentence template for aspect {aspect}, evidence group {evidence_group}, \
         qualifier {qualifier:?}"
    )]
    MissingTemplate {
        /// aspect letter of the requested sentence
        aspect: String,
        /// evidence group of the requested sentence
        evidence_group: String,
        /// qualifier of the requested sentence
        qualifier: String,
    },
    /// Failed to open a file
    #[error("cannot open file {0}")]
    CannotOpenFile(String),
    /// Failed to parse a line of input data
    #[error("invalid data: {0}")]
    InvalidInput(String),
    /// The generation config is malformed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// An external lookup (popularity, gene class) failed
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Shortcut for `Result<T, GenedescError>`
pub type GenedescResult<T> = Result<T, GenedescError>;
