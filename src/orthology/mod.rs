//! Orthologs and the sentences that summarize them
//!
//! Orthology data comes in two shapes:
//!
//! - [`OrthologCandidate`]: a raw prediction as read from an orthology file,
//!   with the list of methods that predicted it
//! - [`OrthologRecord`]: an ortholog with the display properties that are
//!   needed to render a sentence (name, gene family, gene class)
//!
//! [`best`] contains the selectors that narrow down all candidates of a gene
//! to the best ones, [`sentences`] contains the policies that turn a list of
//! orthologs into a single sentence.
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::parser;
use crate::GenedescResult;

pub mod best;
pub mod sentences;

/// A predicted ortholog, as listed in an orthology file
///
/// # Examples
///
/// ```
/// use genedesc::OrthologCandidate;
///
/// let candidate = OrthologCandidate::new("HGNC:5", "A1BG", "Ensembl Compara;Panther;OMA");
/// assert_eq!(candidate.method_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrthologCandidate {
    gene_id: String,
    symbol: String,
    methods: Vec<String>,
}

impl OrthologCandidate {
    /// Constructs a new candidate from the `;` separated list of methods
    pub fn new(gene_id: &str, symbol: &str, methods: &str) -> Self {
        Self {
            gene_id: gene_id.to_string(),
            symbol: symbol.to_string(),
            methods: methods
                .split(';')
                .map(str::trim)
                .filter(|method| !method.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// The gene id of the ortholog, e.g. `HGNC:5`
    pub fn gene_id(&self) -> &str {
        &self.gene_id
    }

    /// The gene symbol of the ortholog, e.g. `A1BG`
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The methods that predicted the ortholog
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// The number of methods that predicted the ortholog
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

/// An ortholog with the properties used for rendering sentences
///
/// Family information is only used if `name`, `family_id` and
/// `family_name` are all present and not empty.
///
/// # Examples
///
/// ```
/// use genedesc::OrthologRecord;
///
/// let record = OrthologRecord::new("HGNC:1100", "BRCA1")
///     .with_name("BRCA1 DNA repair associated");
/// assert_eq!(record.display_name(), "BRCA1 (BRCA1 DNA repair associated)");
///
/// let unnamed = OrthologRecord::new("HGNC:1101", "BRCA2");
/// assert_eq!(unnamed.display_name(), "BRCA2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrthologRecord {
    /// The gene id of the ortholog
    pub gene_id: String,
    /// The gene symbol of the ortholog
    pub symbol: String,
    /// The full name of the ortholog
    pub name: Option<String>,
    /// The symbol of the gene family the ortholog belongs to
    pub family_id: Option<String>,
    /// The name of the gene family the ortholog belongs to
    pub family_name: Option<String>,
    /// The gene class of the ortholog, if known upfront
    pub class_label: Option<String>,
}

impl OrthologRecord {
    /// Constructs a new record without name, family or class
    pub fn new(gene_id: &str, symbol: &str) -> Self {
        Self {
            gene_id: gene_id.to_string(),
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }

    /// Sets the full name of the ortholog
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Sets the gene family of the ortholog
    pub fn with_family(mut self, family_id: &str, family_name: &str) -> Self {
        self.family_id = Some(family_id.to_string());
        self.family_name = Some(family_name.to_string());
        self
    }

    /// Sets the gene class of the ortholog
    pub fn with_class(mut self, class_label: &str) -> Self {
        self.class_label = Some(class_label.to_string());
        self
    }

    /// Returns `symbol (name)` or just the symbol if the name is missing
    /// or not suitable for display
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() && is_human_ortholog_name_valid(name) => {
                format!("{} ({})", self.symbol, rename_human_ortholog_name(name))
            }
            _ => self.symbol.clone(),
        }
    }

    /// Returns `family_id` and `family_name` if name and family are all
    /// present and not empty
    pub(crate) fn family(&self) -> Option<(&str, &str)> {
        match (&self.name, &self.family_id, &self.family_name) {
            (Some(name), Some(id), Some(family))
                if !name.is_empty() && !id.is_empty() && !family.is_empty() =>
            {
                Some((id, family))
            }
            _ => None,
        }
    }
}

impl From<&OrthologCandidate> for OrthologRecord {
    fn from(candidate: &OrthologCandidate) -> Self {
        OrthologRecord::new(candidate.gene_id(), candidate.symbol())
    }
}

/// Returns `false` for placeholder names of uncharacterized human proteins
///
/// ```
/// use genedesc::orthology::is_human_ortholog_name_valid;
///
/// assert!(is_human_ortholog_name_valid("BRCA1 DNA repair associated"));
/// assert!(!is_human_ortholog_name_valid("Human Uncharacterized Protein C1orf43"));
/// ```
pub fn is_human_ortholog_name_valid(name: &str) -> bool {
    !name
        .to_lowercase()
        .contains("human uncharacterized protein")
}

/// Shortens a human gene name for display
///
/// Replaces `" family member "` by a single space and removes a trailing
/// `kDa` unit.
///
/// ```
/// use genedesc::orthology::rename_human_ortholog_name;
///
/// assert_eq!(rename_human_ortholog_name("solute carrier family member 5"), "solute carrier 5");
/// assert_eq!(rename_human_ortholog_name("heat shock protein, 70 kDa"), "heat shock protein, 70");
/// assert_eq!(rename_human_ortholog_name("cleavage factor 25 kDa"), "cleavage factor 25");
/// ```
pub fn rename_human_ortholog_name(name: &str) -> String {
    let renamed = name.replace(" family member ", " ");
    let stripped = renamed
        .strip_suffix(", kDa")
        .or_else(|| renamed.strip_suffix(" kDa"));
    match stripped {
        Some(s) => s.to_string(),
        None => renamed,
    }
}

/// Abbreviates the genus of a species name
///
/// The first word is replaced by its initial and a `.` if it is longer
/// than two characters.
///
/// ```
/// use genedesc::orthology::abbreviate_species_name;
///
/// assert_eq!(abbreviate_species_name("Caenorhabditis briggsae"), "C. briggsae");
/// assert_eq!(abbreviate_species_name("C. briggsae"), "C. briggsae");
/// ```
pub fn abbreviate_species_name(species: &str) -> String {
    let mut words: Vec<String> = species.split(' ').map(str::to_string).collect();
    if let Some(first) = words.first_mut() {
        if first.chars().count() > 2 {
            if let Some(initial) = first.chars().next() {
                *first = format!("{initial}.");
            }
        }
    }
    words.join(" ")
}

/// All ortholog candidates of a species, grouped by gene and ortholog species
///
/// Species keep the order in which they appear in the orthology file.
#[derive(Debug, Default, Clone)]
pub struct OrthologyData {
    genes: HashMap<String, Vec<(String, Vec<OrthologCandidate>)>>,
}

impl OrthologyData {
    /// Reads a WormBase orthology file
    ///
    /// # Errors
    ///
    /// - [`crate::GenedescError::CannotOpenFile`] if the file cannot be opened
    /// - [`crate::GenedescError::InvalidInput`] if an ortholog row is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> GenedescResult<Self> {
        parser::orthology::read_orthology_file(path)
    }

    /// Reads WormBase orthology data from a reader
    ///
    /// # Errors
    ///
    /// [`crate::GenedescError::InvalidInput`] if an ortholog row is malformed
    pub fn from_reader<R: Read>(reader: R) -> GenedescResult<Self> {
        parser::orthology::parse_orthology(reader)
    }

    /// Adds a candidate ortholog of `species` to the gene
    pub fn insert(&mut self, gene_id: &str, species: &str, candidate: OrthologCandidate) {
        let species_list = self.genes.entry(gene_id.to_string()).or_default();
        match species_list.iter_mut().find(|(name, _)| name == species) {
            Some((_, candidates)) => candidates.push(candidate),
            None => species_list.push((species.to_string(), vec![candidate])),
        }
    }

    /// Returns the number of genes with orthology data
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if there is no orthology data
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns all ortholog candidates of the gene in `species`
    pub fn orthologs(&self, gene_id: &str, species: &str) -> &[OrthologCandidate] {
        self.genes
            .get(gene_id)
            .and_then(|species_list| species_list.iter().find(|(name, _)| name == species))
            .map(|(_, candidates)| candidates.as_slice())
            .unwrap_or_default()
    }

    /// Iterates the species that have orthologs of the gene
    pub fn species(&self, gene_id: &str) -> impl Iterator<Item = &str> {
        self.genes
            .get(gene_id)
            .into_iter()
            .flatten()
            .map(|(name, _)| name.as_str())
    }
}
