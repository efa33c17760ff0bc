use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Evidence groups that count as experimental evidence
pub const EXPERIMENTAL_GROUPS: [&str; 2] = ["EXPERIMENTAL", "HIGH_THROUGHPUT_EXPERIMENTAL"];

/// Classifies evidence codes into evidence groups
///
/// e.g. `IDA` -> `EXPERIMENTAL`, `IBA` -> `PHYLOGENETIC`.
///
/// # Examples
///
/// ```
/// use genedesc::EvidenceGroups;
///
/// let groups: EvidenceGroups = [("IDA", "EXPERIMENTAL"), ("IEA", "ELECTRONIC")]
///     .into_iter()
///     .collect();
/// assert_eq!(groups.group("IDA"), Some("EXPERIMENTAL"));
/// assert!(groups.is_experimental("IDA"));
/// assert!(!groups.is_experimental("IEA"));
/// assert!(!groups.is_experimental("ND"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceGroups {
    groups: HashMap<String, String>,
}

impl EvidenceGroups {
    /// Returns the evidence group of an evidence code
    pub fn group(&self, evidence_code: &str) -> Option<&str> {
        self.groups.get(evidence_code).map(String::as_str)
    }

    /// Returns `true` if the evidence code belongs to an experimental group
    pub fn is_experimental(&self, evidence_code: &str) -> bool {
        self.group(evidence_code)
            .map(|group| EXPERIMENTAL_GROUPS.contains(&group))
            .unwrap_or(false)
    }

    /// Adds or replaces the group of an evidence code
    pub fn insert(&mut self, evidence_code: &str, group: &str) {
        self.groups
            .insert(evidence_code.to_string(), group.to_string());
    }

    /// Returns the number of classified evidence codes
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no evidence code is classified
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for EvidenceGroups {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut groups = EvidenceGroups::default();
        for (code, group) in iter {
            groups.insert(code, group);
        }
        groups
    }
}
