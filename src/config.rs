//! Configuration of sentence generation
//!
//! The configuration is read from a JSON file. Every field is optional and
//! falls back to the WormBase defaults of [`GenerationConfig::default`].
//!
//! ```json
//! {
//!     "evidence_codes_priority": ["EXP", "IDA", "IEA"],
//!     "evidence_groups": {"EXP": "EXPERIMENTAL", "IDA": "EXPERIMENTAL", "IEA": "ELECTRONIC"},
//!     "templates": [
//!         {"aspect": "F", "group": "EXPERIMENTAL", "prefix": "exhibits"},
//!         {"aspect": "F", "group": "ELECTRONIC", "prefix": "is predicted to have"}
//!     ],
//!     "truncate_others_generic_word": "several",
//!     "truncate_others_aspect_words": {"F": "functions"},
//!     "max_num_terms": 3,
//!     "rename_cell": false
//! }
//! ```
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotations::{Aspect, EvidenceGroups, PriorityMap};
use crate::sentence::PrepostfixTemplateMap;
use crate::{GenedescError, GenedescResult};

const TEXTPRESSO_URL: &str =
    "https://textpressocentral.org:18080/v1/textpresso/api/get_documents_count";

const DEFAULT_PRIORITY: [&str; 23] = [
    "EXP", "IDA", "IPI", "IMP", "IGI", "IEP", "HTP", "HDA", "HMP", "HGI", "HEP", "IC", "TAS",
    "ISS", "ISO", "ISA", "ISM", "IGC", "IBA", "IBD", "IKR", "IRD", "IEA",
];

const DEFAULT_GROUPS: [(&str, &str); 23] = [
    ("EXP", "EXPERIMENTAL"),
    ("IDA", "EXPERIMENTAL"),
    ("IPI", "EXPERIMENTAL"),
    ("IMP", "EXPERIMENTAL"),
    ("IGI", "EXPERIMENTAL"),
    ("IEP", "EXPERIMENTAL"),
    ("HTP", "HIGH_THROUGHPUT_EXPERIMENTAL"),
    ("HDA", "HIGH_THROUGHPUT_EXPERIMENTAL"),
    ("HMP", "HIGH_THROUGHPUT_EXPERIMENTAL"),
    ("HGI", "HIGH_THROUGHPUT_EXPERIMENTAL"),
    ("HEP", "HIGH_THROUGHPUT_EXPERIMENTAL"),
    ("IC", "CURATOR"),
    ("TAS", "CURATOR"),
    ("ISS", "COMPUTATIONAL"),
    ("ISO", "COMPUTATIONAL"),
    ("ISA", "COMPUTATIONAL"),
    ("ISM", "COMPUTATIONAL"),
    ("IGC", "COMPUTATIONAL"),
    ("IBA", "PHYLOGENETIC"),
    ("IBD", "PHYLOGENETIC"),
    ("IKR", "PHYLOGENETIC"),
    ("IRD", "PHYLOGENETIC"),
    ("IEA", "ELECTRONIC"),
];

// aspect, group, qualifier, prefix
const DEFAULT_TEMPLATES: [(Aspect, &str, &str, &str); 18] = [
    (Aspect::MolecularFunction, "EXPERIMENTAL", "", "exhibits"),
    (Aspect::MolecularFunction, "HIGH_THROUGHPUT_EXPERIMENTAL", "", "exhibits"),
    (Aspect::MolecularFunction, "EXPERIMENTAL", "contributes_to", "contributes to"),
    (Aspect::MolecularFunction, "CURATOR", "", "is predicted to have"),
    (Aspect::MolecularFunction, "COMPUTATIONAL", "", "is predicted to have"),
    (Aspect::MolecularFunction, "PHYLOGENETIC", "", "is predicted to have"),
    (Aspect::MolecularFunction, "ELECTRONIC", "", "is predicted to have"),
    (Aspect::BiologicalProcess, "EXPERIMENTAL", "", "is involved in"),
    (Aspect::BiologicalProcess, "HIGH_THROUGHPUT_EXPERIMENTAL", "", "is involved in"),
    (Aspect::BiologicalProcess, "CURATOR", "", "is predicted to be involved in"),
    (Aspect::BiologicalProcess, "COMPUTATIONAL", "", "is predicted to be involved in"),
    (Aspect::BiologicalProcess, "PHYLOGENETIC", "", "is predicted to be involved in"),
    (Aspect::BiologicalProcess, "ELECTRONIC", "", "is predicted to be involved in"),
    (Aspect::CellularComponent, "EXPERIMENTAL", "", "localizes to"),
    (Aspect::CellularComponent, "EXPERIMENTAL", "colocalizes_with", "colocalizes with"),
    (Aspect::CellularComponent, "COMPUTATIONAL", "", "is predicted to localize to"),
    (Aspect::CellularComponent, "PHYLOGENETIC", "", "is predicted to localize to"),
    (Aspect::CellularComponent, "ELECTRONIC", "", "is predicted to localize to"),
];

/// A single sentence template as listed in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// The aspect letter, e.g. `F`
    pub aspect: Aspect,
    /// The evidence group, e.g. `EXPERIMENTAL`
    pub group: String,
    /// The qualifier, empty for unqualified annotations
    #[serde(default)]
    pub qualifier: String,
    /// Text before the term list
    pub prefix: String,
    /// Text after the term list
    #[serde(default)]
    pub postfix: String,
}

/// Endpoints and credentials of the external services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Document count endpoint of Textpresso
    pub textpresso_url: String,
    /// API token for Textpresso
    pub textpresso_api_token: Option<String>,
    /// Base URL of the WormBase REST API
    pub wormbase_rest_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            textpresso_url: TEXTPRESSO_URL.to_string(),
            textpresso_api_token: None,
            wormbase_rest_url: "http://rest.wormbase.org".to_string(),
        }
    }
}

/// All settings of a generation run
///
/// The configuration is immutable once loaded.
///
/// # Examples
///
/// ```
/// use genedesc::{Aspect, GenerationConfig};
///
/// let config = GenerationConfig::from_json(r#"{
///     "evidence_codes_priority": ["IDA", "IEA"],
///     "evidence_groups": {"IDA": "EXPERIMENTAL", "IEA": "ELECTRONIC"},
///     "templates": [{"aspect": "C", "group": "EXPERIMENTAL", "prefix": "localizes to"}]
/// }"#).unwrap();
///
/// assert_eq!(config.priority_map().rank("IDA"), Some(1));
/// assert!(config.template_map().contains(Aspect::CellularComponent, "EXPERIMENTAL", ""));
/// assert_eq!(config.truncate_others_generic_word, "several");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Evidence codes, highest priority first
    pub evidence_codes_priority: Vec<String>,
    /// Evidence group of every evidence code
    pub evidence_groups: EvidenceGroups,
    /// Sentence templates
    pub templates: Vec<TemplateEntry>,
    /// Word to indicate that only some terms are listed, e.g. `several`
    pub truncate_others_generic_word: String,
    /// Noun for the terms of an aspect, e.g. `functions`
    pub truncate_others_aspect_words: HashMap<Aspect, String>,
    /// Maximum number of terms in a single sentence before terms are trimmed
    pub max_num_terms: usize,
    /// Render `the cell` as `widely` (for expression sentences)
    pub rename_cell: bool,
    /// External service settings
    pub services: ServiceConfig,
    #[serde(skip)]
    priority_map: PriorityMap,
    #[serde(skip)]
    template_map: PrepostfixTemplateMap,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let templates = DEFAULT_TEMPLATES
            .iter()
            .map(|(aspect, group, qualifier, prefix)| TemplateEntry {
                aspect: *aspect,
                group: group.to_string(),
                qualifier: qualifier.to_string(),
                prefix: prefix.to_string(),
                postfix: String::new(),
            })
            .collect();
        let aspect_words = [
            (Aspect::MolecularFunction, "functions"),
            (Aspect::BiologicalProcess, "processes"),
            (Aspect::CellularComponent, "structures"),
            (Aspect::Expression, "tissues"),
            (Aspect::Disease, "diseases"),
        ];
        let mut config = Self {
            evidence_codes_priority: DEFAULT_PRIORITY.iter().map(|c| c.to_string()).collect(),
            evidence_groups: DEFAULT_GROUPS.into_iter().collect(),
            templates,
            truncate_others_generic_word: "several".to_string(),
            truncate_others_aspect_words: aspect_words
                .into_iter()
                .map(|(aspect, word)| (aspect, word.to_string()))
                .collect(),
            max_num_terms: 3,
            rename_cell: false,
            services: ServiceConfig::default(),
            priority_map: PriorityMap::default(),
            template_map: PrepostfixTemplateMap::default(),
        };
        // the default templates have no duplicates
        if let Ok(templates) = build_template_map(&config.templates) {
            config.template_map = templates;
        }
        config.priority_map = PriorityMap::new(&config.evidence_codes_priority);
        config
    }
}

impl GenerationConfig {
    /// Reads the configuration from a JSON file
    ///
    /// # Errors
    ///
    /// - [`GenedescError::CannotOpenFile`] if the file cannot be opened
    /// - [`GenedescError::InvalidConfig`] if the file is not valid
    pub fn from_file<P: AsRef<Path>>(path: P) -> GenedescResult<Self> {
        let filename = path.as_ref().display().to_string();
        let file = File::open(path).map_err(|_| GenedescError::CannotOpenFile(filename.clone()))?;
        let reader = BufReader::new(file);
        let config: GenerationConfig = serde_json::from_reader(reader)
            .map_err(|err| GenedescError::InvalidConfig(format!("{filename}: {err}")))?;
        debug!("Loaded configuration from {}", filename);
        config.finalize()
    }

    /// Reads the configuration from a JSON string
    ///
    /// # Errors
    ///
    /// [`GenedescError::InvalidConfig`] if the JSON is not valid
    pub fn from_json(json: &str) -> GenedescResult<Self> {
        let config: GenerationConfig = serde_json::from_str(json)
            .map_err(|err| GenedescError::InvalidConfig(err.to_string()))?;
        config.finalize()
    }

    /// The evidence code ranking
    pub fn priority_map(&self) -> &PriorityMap {
        &self.priority_map
    }

    /// The sentence templates
    pub fn template_map(&self) -> &PrepostfixTemplateMap {
        &self.template_map
    }

    /// The noun used for omitted terms of an aspect, `entities` if undefined
    pub fn aspect_word(&self, aspect: Aspect) -> &str {
        self.truncate_others_aspect_words
            .get(&aspect)
            .map(String::as_str)
            .unwrap_or("entities")
    }

    fn finalize(mut self) -> GenedescResult<Self> {
        if self.max_num_terms == 0 {
            return Err(GenedescError::InvalidConfig(
                "max_num_terms must be at least 1".to_string(),
            ));
        }
        self.template_map = build_template_map(&self.templates)?;
        self.priority_map = PriorityMap::new(&self.evidence_codes_priority);
        Ok(self)
    }
}

fn build_template_map(entries: &[TemplateEntry]) -> GenedescResult<PrepostfixTemplateMap> {
    let mut templates = PrepostfixTemplateMap::default();
    for entry in entries {
        let replaced = templates.insert(
            entry.aspect,
            &entry.group,
            &entry.qualifier,
            &entry.prefix,
            &entry.postfix,
        );
        if replaced.is_some() {
            return Err(GenedescError::InvalidConfig(format!(
                "duplicate template for {} {} {:?}",
                entry.aspect, entry.group, entry.qualifier
            )));
        }
    }
    Ok(templates)
}
