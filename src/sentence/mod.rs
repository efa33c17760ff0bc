//! Composing sentences from term lists and templates
//!
//! A sentence consists of a prefix (e.g. `exhibits`), a list of term labels
//! joined with an oxford comma and an optional postfix. The prefix and
//! postfix are defined per aspect, evidence group and qualifier in a
//! [`PrepostfixTemplateMap`].
use std::collections::HashSet;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::annotations::{Annotation, Aspect};
use crate::ontology::OntologyProvider;
use crate::term::TermId;
use crate::trimming::trim_terms;
use crate::utils::{dedup_stable, strip_last_chars, OrderedGroups};
use crate::{concatenate_words_with_oxford_comma, GenedescResult, GenerationConfig};

mod template;
pub use template::{PrepostfixTemplateMap, Template};

const DEFAULT_NUM_SENTENCE_TERMS: usize = 4;

/// The terms of a single sentence, in input order
pub type SentenceTerms = SmallVec<[TermId; DEFAULT_NUM_SENTENCE_TERMS]>;

/// A single generated sentence
///
/// The `text` is fully determined by the other fields and the term labels
/// at the time of construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Text before the terms, as defined in the template
    pub prefix: String,
    /// The terms of the sentence
    pub term_ids: SentenceTerms,
    /// Text after the terms, as defined in the template
    pub postfix: String,
    /// The rendered sentence
    pub text: String,
    /// Aspect of all terms
    pub aspect: Aspect,
    /// Evidence group of all annotations
    pub evidence_group: String,
    /// Qualifier of all annotations
    pub qualifier: String,
    /// `true` if the terms were replaced by common ancestors
    pub terms_merged: bool,
    /// Extra text between prefix and terms, e.g. ` several functions, including`
    pub additional_prefix: String,
    /// Labels of terms that stand for more than one annotated term
    pub ancestors_covering_multiple_terms: HashSet<String>,
}

fn is_cell(term_name: &str) -> bool {
    term_name == "the cell" || term_name == "the Cell"
}

/// Renders the text of a sentence
///
/// - term names are sorted
/// - with `rename_cell`, `the cell` alone becomes `widely` and the last
///   three characters (the preposition) of the prefix are removed. Next to
///   other terms, `the cell` is dropped and the prefix is extended by
///   `several tissues including` unless there is an additional prefix
/// - the remaining names in `ancestors_with_multiple_children` get a
///   ` (multiple)` suffix
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use genedesc::sentence::compose_sentence;
///
/// let multiple: HashSet<String> = ["binding".to_string()].into_iter().collect();
/// let terms = ["lipid binding", "binding", "kinase activity"];
/// let text = compose_sentence("exhibits", "", &terms, "", &multiple, false);
/// assert_eq!(text, "exhibits binding (multiple), kinase activity, and lipid binding");
///
/// let text = compose_sentence("is expressed in", "", &["the cell"], "", &HashSet::new(), true);
/// assert_eq!(text, "is expressed widely");
/// ```
pub fn compose_sentence<S: AsRef<str>>(
    prefix: &str,
    additional_prefix: &str,
    term_names: &[S],
    postfix: &str,
    ancestors_with_multiple_children: &HashSet<String>,
    rename_cell: bool,
) -> String {
    let mut full_prefix = format!("{prefix}{additional_prefix} ");

    let mut sorted: Vec<&str> = term_names.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();

    if rename_cell && sorted.iter().any(|name| is_cell(name)) {
        if sorted.len() == 1 {
            full_prefix = strip_last_chars(&full_prefix, 3).to_string();
            sorted = vec!["widely"];
        } else {
            if additional_prefix.is_empty() {
                full_prefix.push_str("several tissues including ");
            }
            sorted.retain(|name| !is_cell(name));
        }
    }

    let names: Vec<String> = sorted
        .into_iter()
        .map(|name| {
            if ancestors_with_multiple_children.contains(name) {
                format!("{name} (multiple)")
            } else {
                name.to_string()
            }
        })
        .collect();

    let postfix = if postfix.is_empty() {
        String::new()
    } else {
        format!(" {postfix}")
    };

    format!(
        "{}{}{}",
        full_prefix,
        concatenate_words_with_oxford_comma(&names),
        postfix
    )
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Builds sentences for the annotations of a gene
///
/// The generator combines an ontology for term labels and ancestors with a
/// [`GenerationConfig`] that holds templates, evidence groups and
/// truncation settings.
///
/// ```mermaid
/// flowchart LR
///     A[Annotations] -->|select| B[one annotation per term]
///     B -->|group| C["(aspect, evidence group, qualifier)"]
///     C -->|trim_terms| D[covering terms]
///     D -->|build_sentence| E[Sentence]
///     T[PrepostfixTemplateMap] --> E
///     O[OntologyProvider] --> D
///     O --> E
/// ```
///
/// # Examples
///
/// ```
/// use genedesc::{Aspect, GenerationConfig, Ontology, SentenceGenerator, TermId};
/// use std::collections::HashSet;
///
/// let ontology = Ontology::from_obo_str(
///     "[Term]\nid: GO:0005737\nname: cytoplasm\n\n[Term]\nid: GO:0005634\nname: nucleus\n",
/// ).unwrap();
/// let config = GenerationConfig::default();
/// let generator = SentenceGenerator::new(&ontology, &config);
///
/// let terms = [
///     TermId::try_from("GO:0005737").unwrap(),
///     TermId::try_from("GO:0005634").unwrap(),
/// ];
/// let aspect = Aspect::CellularComponent;
/// let sentence = generator
///     .build_sentence(&terms, aspect, "EXPERIMENTAL", "", false, false, &HashSet::new())
///     .unwrap()
///     .unwrap();
/// assert_eq!(sentence.text, "localizes to the cytoplasm and nucleus");
/// ```
pub struct SentenceGenerator<'a, O: OntologyProvider + ?Sized> {
    ontology: &'a O,
    config: &'a GenerationConfig,
}

impl<'a, O: OntologyProvider + ?Sized> SentenceGenerator<'a, O> {
    /// Constructs a new generator
    pub fn new(ontology: &'a O, config: &'a GenerationConfig) -> Self {
        Self { ontology, config }
    }

    /// Builds a single sentence
    ///
    /// Returns `Ok(None)` if `term_ids` is empty.
    ///
    /// With `add_others`, the sentence states that only some of the
    /// terms are listed, e.g. `exhibits several functions, including ...`
    ///
    /// # Errors
    ///
    /// [`crate::GenedescError::MissingTemplate`] if the config has no template
    /// for the combination of aspect, evidence group and qualifier
    #[allow(clippy::too_many_arguments)]
    pub fn build_sentence(
        &self,
        term_ids: &[TermId],
        aspect: Aspect,
        evidence_group: &str,
        qualifier: &str,
        terms_merged: bool,
        add_others: bool,
        ancestors_with_multiple_children: &HashSet<String>,
    ) -> GenedescResult<Option<Sentence>> {
        if term_ids.is_empty() {
            return Ok(None);
        }
        let template = self
            .config
            .template_map()
            .get(aspect, evidence_group, qualifier)?;

        let mut additional_prefix = String::new();
        if add_others {
            additional_prefix = format!(
                " {} {}, including",
                self.config.truncate_others_generic_word,
                self.config.aspect_word(aspect)
            );
        }
        if aspect == Aspect::CellularComponent {
            additional_prefix.push_str(" the");
        }

        let labels: Vec<&str> = term_ids
            .iter()
            .map(|id| self.ontology.label_or_id(id.as_str()))
            .collect();
        let text = compose_sentence(
            &template.prefix,
            &additional_prefix,
            &labels,
            &template.postfix,
            ancestors_with_multiple_children,
            self.config.rename_cell,
        );
        trace!("Built sentence: {}", text);

        Ok(Some(Sentence {
            prefix: template.prefix.clone(),
            term_ids: term_ids.iter().cloned().collect(),
            postfix: template.postfix.clone(),
            text,
            aspect,
            evidence_group: evidence_group.to_string(),
            qualifier: qualifier.to_string(),
            terms_merged,
            additional_prefix,
            ancestors_covering_multiple_terms: ancestors_with_multiple_children.clone(),
        }))
    }

    /// Builds one sentence per aspect, evidence group and qualifier
    ///
    /// The annotations are expected to be selected already (see
    /// [`crate::annotations::select`]). Annotations with an evidence code
    /// that has no evidence group are ignored. Groups with more than
    /// `max_num_terms` terms are trimmed to covering ancestors.
    ///
    /// Sentences are returned in the order in which their group first
    /// appears in `annotations`.
    ///
    /// # Errors
    ///
    /// [`crate::GenedescError::MissingTemplate`] if the config has no template
    /// for one of the groups
    pub fn sentences(&self, annotations: &[Annotation]) -> GenedescResult<Vec<Sentence>> {
        let mut groups: OrderedGroups<(Aspect, &str, &str), TermId> = OrderedGroups::default();
        for annotation in annotations {
            let Some(group) = self.config.evidence_groups.group(&annotation.evidence_code) else {
                trace!(
                    "No evidence group for {} of {}",
                    annotation.evidence_code,
                    annotation.term_id
                );
                continue;
            };
            groups.push(
                (annotation.aspect, group, annotation.qualifier.as_str()),
                annotation.term_id.clone(),
            );
        }

        let mut sentences = Vec::with_capacity(groups.len());
        for ((aspect, group, qualifier), term_ids) in groups.into_groups() {
            let term_ids = dedup_stable(term_ids);
            let trimmed = trim_terms(&term_ids, self.ontology, self.config.max_num_terms);
            if let Some(sentence) = self.build_sentence(
                &trimmed.term_ids,
                aspect,
                group,
                qualifier,
                trimmed.terms_merged,
                trimmed.terms_omitted,
                &trimmed.ancestors_covering_multiple_terms,
            )? {
                sentences.push(sentence);
            }
        }
        debug!("Built {} sentences", sentences.len());
        Ok(sentences)
    }
}
