//! Ontology terms and their identifiers
//!
//! A [`TermId`] identifies a term of any OBO-style ontology used for gene
//! descriptions (`GO:0005737`, `WBbt:0005762`, `DOID:4` ...). An
//! [`OntologyTerm`] holds the display name, obsolescence flag and direct
//! `is_a` parents of a term. Terms are assembled while scanning an OBO file
//! with a [`TermBuilder`].
use core::fmt::Debug;
use std::borrow::Borrow;
use std::fmt::Display;

use smallvec::SmallVec;

use crate::{GenedescError, GenedescResult, DEFAULT_NUM_PARENTS};

/// The direct parents of a term
///
/// Most terms have very few parents, so they are stored inline
pub type TermParents = SmallVec<[TermId; DEFAULT_NUM_PARENTS]>;

/// Identifier of an ontology term, e.g. `GO:0005737`
///
/// The identifier must consist of a non-empty prefix and a non-empty
/// local part, separated by `:`.
///
/// # Examples
///
/// ```
/// use genedesc::TermId;
///
/// let id = TermId::try_from("GO:0005737").unwrap();
/// assert_eq!(id.prefix(), "GO");
/// assert_eq!(id.to_string(), "GO:0005737");
///
/// assert!(TermId::try_from("0005737").is_err());
/// ```
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TermId {
    inner: String,
}

impl TermId {
    /// Returns the ontology prefix of the id, e.g. `GO`
    pub fn prefix(&self) -> &str {
        self.inner
            .split_once(':')
            .map(|(prefix, _)| prefix)
            .unwrap_or_default()
    }

    /// Returns the id as `&str`
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl TryFrom<&str> for TermId {
    type Error = GenedescError;
    fn try_from(s: &str) -> GenedescResult<Self> {
        let s = s.trim();
        match s.split_once(':') {
            Some((prefix, local)) if !prefix.is_empty() && !local.is_empty() => Ok(TermId {
                inner: s.to_string(),
            }),
            _ => Err(GenedescError::InvalidInput(format!("invalid term id: {s}"))),
        }
    }
}

impl TryFrom<String> for TermId {
    type Error = GenedescError;
    fn try_from(s: String) -> GenedescResult<Self> {
        TermId::try_from(s.as_str())
    }
}

impl AsRef<str> for TermId {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<str> for TermId {
    fn borrow(&self) -> &str {
        &self.inner
    }
}

impl Debug for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TermId({})", self)
    }
}

impl Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl PartialEq<str> for TermId {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for TermId {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

/// A single term of an ontology
///
/// Terms are read-only once they are part of an [`crate::Ontology`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyTerm {
    id: TermId,
    name: String,
    is_obsolete: bool,
    parents: TermParents,
}

impl OntologyTerm {
    /// Constructs a new, non-obsolete term without parents
    pub fn new(id: TermId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            is_obsolete: false,
            parents: TermParents::new(),
        }
    }

    /// The [`TermId`] of the term
    pub fn id(&self) -> &TermId {
        &self.id
    }

    /// The display name of the term, e.g. `cytoplasm`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the term is flagged as `is_obsolete: true`
    pub fn is_obsolete(&self) -> bool {
        self.is_obsolete
    }

    /// The direct `is_a` parents of the term
    pub fn parents(&self) -> &TermParents {
        &self.parents
    }

    pub(crate) fn add_parent(&mut self, parent: TermId) {
        if !self.parents.contains(&parent) {
            self.parents.push(parent);
        }
    }
}

/// Accumulates the fields of a single OBO `[Term]` stanza
///
/// Fields can arrive in any order. The builder only produces an
/// [`OntologyTerm`] once both `id` and `name` have been set.
///
/// # Examples
///
/// ```
/// use genedesc::term::TermBuilder;
///
/// let mut builder = TermBuilder::default();
/// builder.name("cytoplasm");
/// assert!(!builder.is_complete());
///
/// builder.id("GO:0005737").unwrap();
/// builder.is_a("GO:0110165").unwrap();
/// let term = builder.build().unwrap();
/// assert_eq!(term.name(), "cytoplasm");
/// assert_eq!(term.parents().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TermBuilder {
    id: Option<TermId>,
    name: Option<String>,
    is_obsolete: bool,
    parents: TermParents,
}

impl TermBuilder {
    /// Sets the id of the term
    ///
    /// # Errors
    ///
    /// [`GenedescError::InvalidInput`] if the id is not a valid [`TermId`]
    pub fn id(&mut self, id: &str) -> GenedescResult<&mut Self> {
        self.id = Some(TermId::try_from(id)?);
        Ok(self)
    }

    /// Sets the display name of the term
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.trim().to_string());
        self
    }

    /// Sets the obsolescence flag, `"true"` marks the term as obsolete
    pub fn obsolete(&mut self, flag: &str) -> &mut Self {
        self.is_obsolete = flag.trim() == "true";
        self
    }

    /// Adds a direct `is_a` parent
    ///
    /// # Errors
    ///
    /// [`GenedescError::InvalidInput`] if the parent is not a valid [`TermId`]
    pub fn is_a(&mut self, parent: &str) -> GenedescResult<&mut Self> {
        let parent = TermId::try_from(parent)?;
        if !self.parents.contains(&parent) {
            self.parents.push(parent);
        }
        Ok(self)
    }

    /// Returns the id, if it was set already
    pub fn term_id(&self) -> Option<&TermId> {
        self.id.as_ref()
    }

    /// Returns `true` if both required fields are present
    pub fn is_complete(&self) -> bool {
        self.id.is_some() && self.name.is_some()
    }

    /// Freezes the builder into an [`OntologyTerm`]
    ///
    /// Returns `None` unless both `id` and `name` were set
    pub fn build(self) -> Option<OntologyTerm> {
        match (self.id, self.name) {
            (Some(id), Some(name)) => Some(OntologyTerm {
                id,
                name,
                is_obsolete: self.is_obsolete,
                parents: self.parents,
            }),
            _ => None,
        }
    }
}
