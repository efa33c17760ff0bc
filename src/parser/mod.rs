//! Parsing the flat-file exports gene descriptions are built from
//!
//! - [`obo`]: ontology `[Term]` stanzas
//! - [`gaf`]: gene association files (GAF 2.x)
//! - [`orthology`]: WormBase orthology blocks
//! - [`genes`]: WormBase gene id lists

/// Module to parse OBO ontology files
pub(crate) mod obo;

/// Module to parse gene association files
pub mod gaf;

/// Module to parse WormBase orthology files
pub mod orthology;

/// Module to parse WormBase `geneIDs` files
pub mod genes;
