//! Gene annotations to ontology terms
//!
//! This module contains the [`Annotation`] record, the per-gene
//! [`AnnotationSet`] and the [`select`] function that collapses competing
//! annotations of a gene to the same term into a single one.
//!
//! The underlying principle for all annotations is the same:
//! - Each annotation links one gene to one ontology term
//! - The annotation carries the evidence code that supports it
//! - Evidence codes are ranked by a [`PriorityMap`] and classified into
//!   groups by [`EvidenceGroups`]
use core::fmt::Debug;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ontology::OntologyProvider;
use crate::parser;
use crate::term::TermId;
use crate::{GenedescError, GenedescResult, Ontology};

mod evidence;
mod selector;
pub use evidence::{EvidenceGroups, EXPERIMENTAL_GROUPS};
pub use selector::{select, select_with_priority, PriorityMap};

/// The aspect (or data type) of an annotation
///
/// Serializes to the single letter used in annotation files and templates.
#[derive(Debug, Hash, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Aspect {
    /// Gene Ontology molecular function
    #[serde(rename = "F")]
    MolecularFunction,
    /// Gene Ontology biological process
    #[serde(rename = "P")]
    BiologicalProcess,
    /// Gene Ontology cellular component
    #[serde(rename = "C")]
    CellularComponent,
    /// Disease Ontology associations
    #[serde(rename = "D")]
    Disease,
    /// Anatomy expression patterns
    #[serde(rename = "A")]
    Expression,
}

impl Aspect {
    /// Returns the single-letter code of the aspect
    pub fn as_letter(&self) -> &'static str {
        match self {
            Aspect::MolecularFunction => "F",
            Aspect::BiologicalProcess => "P",
            Aspect::CellularComponent => "C",
            Aspect::Disease => "D",
            Aspect::Expression => "A",
        }
    }
}

impl TryFrom<&str> for Aspect {
    type Error = GenedescError;

    fn try_from(value: &str) -> GenedescResult<Self> {
        let aspect = match value.trim() {
            "F" => Aspect::MolecularFunction,
            "P" => Aspect::BiologicalProcess,
            "C" => Aspect::CellularComponent,
            "D" => Aspect::Disease,
            "A" => Aspect::Expression,
            other => return Err(GenedescError::InvalidInput(format!("unknown aspect: {other}"))),
        };
        Ok(aspect)
    }
}

impl Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_letter())
    }
}

/// A single annotation of a gene to an ontology term
///
/// Annotations are immutable records as parsed from association files.
/// The uniqueness key for selection is `(gene_id, term_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    /// The annotated gene, e.g. `WB:WBGene00000001`
    pub gene_id: String,
    /// The ontology term
    pub term_id: TermId,
    /// Qualifier such as `NOT` or `contributes_to`, empty if none
    pub qualifier: String,
    /// Supporting reference, e.g. `PMID:12345`
    pub reference: String,
    /// Evidence code, e.g. `IDA`
    pub evidence_code: String,
    /// Aspect of the annotation
    pub aspect: Aspect,
    /// Annotation extension, empty if none
    pub annotation_extension: String,
    /// Label of the term at the time of parsing
    pub term_label: String,
    /// Whether the term was obsolete at the time of parsing
    pub is_obsolete: bool,
}

impl Annotation {
    /// Constructs a new [`Annotation`] with empty qualifier, reference and extension
    ///
    /// # Errors
    ///
    /// [`GenedescError::InvalidInput`] if `term_id` is not a valid [`TermId`]
    pub fn new(
        gene_id: &str,
        term_id: &str,
        evidence_code: &str,
        aspect: Aspect,
    ) -> GenedescResult<Self> {
        Ok(Annotation {
            gene_id: gene_id.to_string(),
            term_id: TermId::try_from(term_id)?,
            qualifier: String::new(),
            reference: String::new(),
            evidence_code: evidence_code.to_string(),
            aspect,
            annotation_extension: String::new(),
            term_label: String::new(),
            is_obsolete: false,
        })
    }

    /// Fills `term_label` and `is_obsolete` from the ontology
    pub fn resolve<O: OntologyProvider + ?Sized>(mut self, ontology: &O) -> Self {
        self.term_label = ontology.label_or_id(self.term_id.as_str()).to_string();
        self.is_obsolete = ontology.is_obsolete(self.term_id.as_str());
        self
    }
}

/// Supplies selected annotations for a gene
///
/// This is implemented by [`AnnotationSet`] and used by the ortholog
/// selectors to count annotations of orthologous genes.
pub trait AnnotationSource {
    /// Returns the selected (non-obsolete) annotations of a gene
    fn annotations(&self, gene_id: &str, priority: &PriorityMap) -> Vec<Annotation>;
}

/// All annotations of a species, grouped by gene
///
/// # Examples
///
/// ```
/// use genedesc::annotations::{Annotation, AnnotationSet, PriorityMap};
/// use genedesc::{AnnotationSource, Aspect};
///
/// let mut set = AnnotationSet::default();
/// for code in ["IEA", "IDA"] {
///     let aspect = Aspect::CellularComponent;
///     set.insert(Annotation::new("WB:WBGene00000001", "GO:0005737", code, aspect).unwrap());
/// }
///
/// let priority = PriorityMap::new(&["IDA", "IEA"]);
/// let selected = set.annotations("WB:WBGene00000001", &priority);
/// assert_eq!(selected.len(), 1);
/// assert_eq!(selected[0].evidence_code, "IDA");
/// ```
#[derive(Debug, Default, Clone)]
pub struct AnnotationSet {
    genes: Vec<String>,
    by_gene: HashMap<String, Vec<Annotation>>,
}

impl AnnotationSet {
    /// Parses a GAF file and resolves term labels and obsolescence from the ontology
    ///
    /// # Errors
    ///
    /// - [`GenedescError::CannotOpenFile`] if the file cannot be opened
    /// - [`GenedescError::InvalidInput`] if a line is malformed
    pub fn from_gaf<P: AsRef<Path>>(path: P, ontology: &Ontology) -> GenedescResult<Self> {
        let mut set = AnnotationSet::default();
        for annotation in parser::gaf::read_gaf_file(path)? {
            set.insert(annotation.resolve(ontology));
        }
        debug!("Loaded annotations for {} genes", set.genes.len());
        Ok(set)
    }

    /// Adds an annotation
    pub fn insert(&mut self, annotation: Annotation) {
        match self.by_gene.get_mut(&annotation.gene_id) {
            Some(annotations) => annotations.push(annotation),
            None => {
                self.genes.push(annotation.gene_id.clone());
                self.by_gene.insert(annotation.gene_id.clone(), vec![annotation]);
            }
        }
    }

    /// Returns the number of annotated genes
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if no gene is annotated
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Iterates the ids of all annotated genes in insertion order
    pub fn genes(&self) -> impl Iterator<Item = &str> {
        self.genes.iter().map(String::as_str)
    }

    /// Returns all raw annotations of a gene without any selection
    pub fn raw_annotations(&self, gene_id: &str) -> &[Annotation] {
        self.by_gene.get(gene_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns at most one annotation per term for the gene, see [`select`]
    pub fn annotations_for_gene(
        &self,
        gene_id: &str,
        include_obsolete: bool,
        priority: &PriorityMap,
    ) -> Vec<Annotation> {
        select_with_priority(self.raw_annotations(gene_id), include_obsolete, priority)
    }

    /// Same as [`AnnotationSet::annotations_for_gene`], restricted to a single aspect
    pub fn annotations_for_gene_and_aspect(
        &self,
        gene_id: &str,
        aspect: Aspect,
        include_obsolete: bool,
        priority: &PriorityMap,
    ) -> Vec<Annotation> {
        let same_aspect = self
            .raw_annotations(gene_id)
            .iter()
            .filter(|annotation| annotation.aspect == aspect);
        select_with_priority(same_aspect, include_obsolete, priority)
    }

    /// Removes annotations to blacklisted terms and to all their descendants
    ///
    /// Returns the number of removed annotations
    pub fn remove_blacklisted(&mut self, blacklist: &[TermId], ontology: &Ontology) -> usize {
        let mut excluded: HashSet<TermId> = HashSet::new();
        for term in blacklist {
            excluded.insert(term.clone());
            excluded.extend(ontology.descendants(term.as_str()));
        }
        let mut removed = 0;
        for annotations in self.by_gene.values_mut() {
            let before = annotations.len();
            annotations.retain(|annotation| !excluded.contains(&annotation.term_id));
            removed += before - annotations.len();
        }
        debug!("Removed {} blacklisted annotations", removed);
        removed
    }
}

impl AnnotationSource for AnnotationSet {
    fn annotations(&self, gene_id: &str, priority: &PriorityMap) -> Vec<Annotation> {
        self.annotations_for_gene(gene_id, false, priority)
    }
}
