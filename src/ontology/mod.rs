//! In-memory ontology and the [`OntologyProvider`] capability
//!
//! Sentence generation only needs a few things from an ontology: the label
//! of a term, whether it is obsolete, its ancestors and optionally its
//! information content. These are described by the [`OntologyProvider`]
//! trait so that callers can plug in any ontology implementation.
//! [`Ontology`] is the implementation shipped with this crate and is
//! usually built from an OBO file.
use core::fmt::Debug;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::debug;

use crate::parser;
use crate::term::{OntologyTerm, TermId};
use crate::{GenedescError, GenedescResult};

mod termarena;
use termarena::Arena;

/// Read-only view of an ontology as needed for sentence generation
///
/// All lookups are infallible. Unknown terms have no label, no ancestors
/// and are not obsolete.
pub trait OntologyProvider {
    /// Returns the display label of a term, if the term is known
    fn label(&self, term_id: &str) -> Option<&str>;

    /// Returns the display label of a term or the term id itself
    /// if no label is defined
    fn label_or_id<'a>(&'a self, term_id: &'a str) -> &'a str {
        self.label(term_id).unwrap_or(term_id)
    }

    /// Returns all ancestors of the term (not including the term itself)
    fn ancestors(&self, term_id: &str) -> HashSet<TermId>;

    /// Returns `true` if the term is flagged as obsolete
    fn is_obsolete(&self, term_id: &str) -> bool;

    /// Returns the information content of the term
    ///
    /// Term trimming prefers specific terms with a high information content.
    /// Without information content, all covering terms weigh the same.
    fn information_content(&self, _term_id: &str) -> Option<f64> {
        None
    }
}

/// `Ontology` holds all terms of a single OBO ontology
///
/// # Examples
///
/// ```
/// use genedesc::{Ontology, OntologyProvider, OntologyTerm, TermId};
///
/// let mut ontology = Ontology::default();
/// let entity = TermId::try_from("GO:0110165").unwrap();
/// ontology.insert_term(OntologyTerm::new(entity, "cellular anatomical entity"));
/// ontology.insert_term(OntologyTerm::new(TermId::try_from("GO:0005737").unwrap(), "cytoplasm"));
/// ontology.add_parent("GO:0110165", "GO:0005737").unwrap();
/// ontology.create_cache();
///
/// assert_eq!(ontology.label_or_id("GO:0005737"), "cytoplasm");
/// assert_eq!(ontology.label_or_id("GO:9999999"), "GO:9999999");
/// assert!(ontology.ancestors("GO:0005737").contains("GO:0110165"));
/// ```
///
/// # Construction
///
/// 1. construct an empty Ontology [`Ontology::default`]
/// 2. Add all terms [`Ontology::insert_term`]
/// 3. Connect terms to their parents [`Ontology::add_parent`]
/// 4. Cache all ancestor connections and the information content
///    [`Ontology::create_cache`]
///
/// [`Ontology::from_obo`] does all of the above from an OBO file.
#[derive(Default)]
pub struct Ontology {
    terms: Arena,
    children: HashMap<TermId, Vec<TermId>>,
    all_parents: HashMap<TermId, HashSet<TermId>>,
    information_content: HashMap<TermId, f64>,
}

impl Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ontology with {} terms", self.terms.len())
    }
}

impl Ontology {
    /// Builds the ontology from an OBO file
    ///
    /// # Errors
    ///
    /// - [`GenedescError::CannotOpenFile`] if the file cannot be read
    /// - [`GenedescError::InvalidInput`] if a term id or parent id is malformed
    pub fn from_obo<P: AsRef<Path>>(path: P) -> GenedescResult<Self> {
        let mut ontology = Ontology::default();
        parser::obo::read_obo_file(path, &mut ontology)?;
        Ok(ontology)
    }

    /// Builds the ontology from the content of an OBO file
    ///
    /// # Errors
    ///
    /// [`GenedescError::InvalidInput`] if a term id or parent id is malformed
    pub fn from_obo_str(content: &str) -> GenedescResult<Self> {
        let mut ontology = Ontology::default();
        parser::obo::parse_obo(content, &mut ontology)?;
        Ok(ontology)
    }

    /// Returns the number of terms in the ontology
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the ontology has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.len() == 0
    }

    /// Returns the [`OntologyTerm`] with the given id
    pub fn term(&self, term_id: &str) -> Option<&OntologyTerm> {
        self.terms.get(term_id)
    }

    /// Iterates all terms in arbitrary order
    pub fn terms(&self) -> impl Iterator<Item = &OntologyTerm> {
        self.terms.values()
    }

    /// Adds a term to the ontology, replacing a term with the same id
    pub fn insert_term(&mut self, term: OntologyTerm) {
        self.terms.insert(term);
    }

    /// Connects a term to its parent
    ///
    /// # Errors
    ///
    /// [`GenedescError::DoesNotExist`] if either term is missing
    pub fn add_parent(&mut self, parent_id: &str, child_id: &str) -> GenedescResult<()> {
        if !self.terms.contains(parent_id) {
            return Err(GenedescError::DoesNotExist);
        }
        let parent = TermId::try_from(parent_id)?;
        let child = self
            .terms
            .get_mut(child_id)
            .ok_or(GenedescError::DoesNotExist)?;
        child.add_parent(parent.clone());
        let child = child.id().clone();

        let children = self.children.entry(parent).or_default();
        if !children.contains(&child) {
            children.push(child);
        }
        Ok(())
    }

    /// Caches the ancestors of every term and calculates the information
    /// content
    ///
    /// Call this once after all terms and parent connections were added.
    /// Lookups of ancestors still work without the cache, but are
    /// recalculated on every call. The information content is only
    /// available after this call.
    pub fn create_cache(&mut self) {
        let term_ids = self.terms.keys();
        debug!("Caching ancestors of {} terms", term_ids.len());
        let mut cache = HashMap::with_capacity(term_ids.len());
        for id in term_ids {
            let ancestors = self.collect_ancestors(id.as_str());
            cache.insert(id, ancestors);
        }
        self.all_parents = cache;
        self.calculate_information_content();
    }

    /// Calculates the information content of every term from the structure
    /// of the ontology
    ///
    /// The information content of a term is
    /// `-ln((leaves / subsumers + 1) / (max_leaves + 1))`
    ///
    /// - `leaves`: the number of leaves below the term, counted once per
    ///   path that reaches them
    /// - `subsumers`: the number of ancestors, including the term itself
    /// - `max_leaves`: the number of leaves below the root of the term. For
    ///   terms below several roots, the largest root counts
    ///
    /// Root terms have an information content of `0`, leaves the highest
    /// value of their subgraph.
    pub fn calculate_information_content(&mut self) {
        let mut leaves: HashMap<TermId, u64> = HashMap::with_capacity(self.terms.len());
        for id in self.terms.keys() {
            self.count_leaves(&id, &mut leaves);
        }

        let mut max_leaves: HashMap<TermId, u64> = HashMap::with_capacity(self.terms.len());
        for root in self.roots() {
            let root_leaves = leaves.get(root.id()).copied().unwrap_or_default();
            let subgraph = self.descendants(root.id().as_str());
            for id in subgraph.into_iter().chain(std::iter::once(root.id().clone())) {
                let max = max_leaves.entry(id).or_default();
                *max = (*max).max(root_leaves);
            }
        }

        let mut information_content = HashMap::with_capacity(max_leaves.len());
        for (id, max) in max_leaves {
            let num_leaves = leaves.get(&id).copied().unwrap_or_default();
            let subsumers = self.ancestors(id.as_str()).len() + 1;
            let ratio = num_leaves as f64 / subsumers as f64;
            let ic = -((ratio + 1.0) / (max as f64 + 1.0)).ln();
            information_content.insert(id, ic);
        }
        debug!("Calculated information content of {} terms", information_content.len());
        self.information_content = information_content;
    }

    /// Returns the direct children of a term
    pub fn children(&self, term_id: &str) -> impl Iterator<Item = &TermId> {
        self.children.get(term_id).into_iter().flatten()
    }

    /// Returns the direct parents of a term
    pub fn parents(&self, term_id: &str) -> impl Iterator<Item = &TermId> {
        self.terms
            .get(term_id)
            .into_iter()
            .flat_map(|term| term.parents().iter())
    }

    /// Returns all descendants of a term (not including the term itself)
    pub fn descendants(&self, term_id: &str) -> HashSet<TermId> {
        let mut res = HashSet::new();
        let mut queue: Vec<&TermId> = self.children(term_id).collect();
        while let Some(child) = queue.pop() {
            if res.insert(child.clone()) {
                queue.extend(self.children(child.as_str()));
            }
        }
        res
    }

    /// Returns all terms without parents
    pub fn roots(&self) -> impl Iterator<Item = &OntologyTerm> {
        self.terms.values().filter(|term| term.parents().is_empty())
    }

    fn count_leaves(&self, term_id: &TermId, cache: &mut HashMap<TermId, u64>) -> u64 {
        if let Some(count) = cache.get(term_id) {
            return *count;
        }
        // marks the term as visited
        cache.insert(term_id.clone(), 0);
        let mut count: u64 = 0;
        for child in self.children(term_id.as_str()) {
            let below = self.count_leaves(child, cache);
            count = count.saturating_add(below.max(1));
        }
        cache.insert(term_id.clone(), count);
        count
    }

    fn collect_ancestors(&self, term_id: &str) -> HashSet<TermId> {
        let mut res = HashSet::new();
        let mut queue: Vec<&TermId> = self.parents(term_id).collect();
        while let Some(parent) = queue.pop() {
            if res.insert(parent.clone()) {
                queue.extend(self.parents(parent.as_str()));
            }
        }
        res
    }
}

impl OntologyProvider for Ontology {
    fn label(&self, term_id: &str) -> Option<&str> {
        self.terms.get(term_id).map(OntologyTerm::name)
    }

    fn ancestors(&self, term_id: &str) -> HashSet<TermId> {
        match self.all_parents.get(term_id) {
            Some(ancestors) => ancestors.clone(),
            None => self.collect_ancestors(term_id),
        }
    }

    fn is_obsolete(&self, term_id: &str) -> bool {
        self.terms
            .get(term_id)
            .map(OntologyTerm::is_obsolete)
            .unwrap_or(false)
    }

    fn information_content(&self, term_id: &str) -> Option<f64> {
        self.information_content.get(term_id).copied()
    }
}
