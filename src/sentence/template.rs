use std::collections::HashMap;

use crate::annotations::Aspect;
use crate::{GenedescError, GenedescResult};

/// The fixed text around the term list of a sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    /// Text before the terms, e.g. `exhibits`
    pub prefix: String,
    /// Text after the terms, may be empty
    pub postfix: String,
}

/// Sentence templates keyed by aspect, evidence group and qualifier
///
/// # Examples
///
/// ```
/// use genedesc::sentence::PrepostfixTemplateMap;
/// use genedesc::Aspect;
///
/// let mut templates = PrepostfixTemplateMap::default();
/// templates.insert(Aspect::MolecularFunction, "EXPERIMENTAL", "", "exhibits", "");
///
/// let template = templates.get(Aspect::MolecularFunction, "EXPERIMENTAL", "").unwrap();
/// assert_eq!(template.prefix, "exhibits");
///
/// assert!(templates.get(Aspect::MolecularFunction, "EXPERIMENTAL", "NOT").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrepostfixTemplateMap {
    templates: HashMap<(Aspect, String, String), Template>,
}

impl PrepostfixTemplateMap {
    /// Adds a template and returns the template it replaced, if any
    pub fn insert(
        &mut self,
        aspect: Aspect,
        evidence_group: &str,
        qualifier: &str,
        prefix: &str,
        postfix: &str,
    ) -> Option<Template> {
        self.templates.insert(
            (aspect, evidence_group.to_string(), qualifier.to_string()),
            Template {
                prefix: prefix.to_string(),
                postfix: postfix.to_string(),
            },
        )
    }

    /// Returns the template of a sentence
    ///
    /// # Errors
    ///
    /// [`GenedescError::MissingTemplate`] if no template is defined
    pub fn get(
        &self,
        aspect: Aspect,
        evidence_group: &str,
        qualifier: &str,
    ) -> GenedescResult<&Template> {
        self.templates
            .get(&(aspect, evidence_group.to_string(), qualifier.to_string()))
            .ok_or_else(|| GenedescError::MissingTemplate {
                aspect: aspect.to_string(),
                evidence_group: evidence_group.to_string(),
                qualifier: qualifier.to_string(),
            })
    }

    /// Returns `true` if a template is defined
    pub fn contains(&self, aspect: Aspect, evidence_group: &str, qualifier: &str) -> bool {
        self.get(aspect, evidence_group, qualifier).is_ok()
    }

    /// Returns the number of templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` if there are no templates
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
