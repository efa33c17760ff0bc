//! Reducing long term lists to a few covering ancestors
//!
//! When a gene has more annotations in one sentence than fit in a readable
//! sentence, the terms are replaced by a small number of common ancestors
//! that cover as many of the input terms as possible.
//!
//! 1. [`common_ancestors`] collects every ancestor of the terms and the
//!    terms it covers
//! 2. [`find_set_covering`] greedily picks the ancestors that cover the most
//!    terms, weighted by their information content
//! 3. [`trim_terms`] does both and reports which of the selected ancestors
//!    cover more than one original term
use std::collections::HashSet;

use tracing::debug;

use crate::ontology::OntologyProvider;
use crate::term::TermId;
use crate::utils::OrderedGroups;

/// An ancestor term together with the input terms it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveringTerm {
    /// The id of the ancestor
    pub id: TermId,
    /// The label of the ancestor
    pub label: String,
    /// The input terms that are descendants of (or equal to) the ancestor
    pub covered: HashSet<TermId>,
}

/// The result of [`trim_terms`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrimmedTerms {
    /// `true` if the terms were replaced by covering ancestors
    pub terms_merged: bool,
    /// The terms to use in the sentence
    pub term_ids: Vec<TermId>,
    /// Labels of the selected terms that cover more than one input term
    pub ancestors_covering_multiple_terms: HashSet<String>,
    /// `true` if some input terms are not covered by the selected terms
    pub terms_omitted: bool,
}

/// Returns every ancestor of the terms that covers more than one of them,
/// plus the terms themselves
///
/// Ancestors are reflexive, every term covers itself.
///
/// The result is ordered by the first input term that reaches an ancestor.
pub fn common_ancestors<O: OntologyProvider + ?Sized>(
    term_ids: &[TermId],
    ontology: &O,
) -> Vec<CoveringTerm> {
    let mut groups: OrderedGroups<TermId, TermId> = OrderedGroups::default();
    for term_id in term_ids {
        groups.push(term_id.clone(), term_id.clone());
        let mut ancestors: Vec<TermId> = ontology.ancestors(term_id.as_str()).into_iter().collect();
        ancestors.sort();
        for ancestor in ancestors {
            groups.push(ancestor, term_id.clone());
        }
    }

    groups
        .into_groups()
        .into_iter()
        .filter(|(ancestor, covered)| covered.len() > 1 || covered.first() == Some(ancestor))
        .map(|(id, covered)| CoveringTerm {
            label: ontology.label_or_id(id.as_str()).to_string(),
            covered: covered.into_iter().collect(),
            id,
        })
        .collect()
}

/// Greedy solution of the set covering problem
///
/// Every step picks the subset that covers the most elements that are not
/// covered yet, multiplied by the value of the subset if `values` are given.
/// Ties are broken by the label of the subset. Stops once all elements are
/// covered, every subset was picked or `max_num_subsets` is reached.
///
/// Returns `None` if `values` does not have the same length as `subsets`
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use genedesc::trimming::{find_set_covering, CoveringTerm};
/// use genedesc::TermId;
///
/// let subset = |id: &str, label: &str, covered: &[&str]| CoveringTerm {
///     id: TermId::try_from(id).unwrap(),
///     label: label.to_string(),
///     covered: covered.iter().map(|c| TermId::try_from(*c).unwrap()).collect(),
/// };
/// let subsets = vec![
///     subset("GO:1", "a", &["GO:10", "GO:11"]),
///     subset("GO:2", "b", &["GO:10", "GO:11", "GO:12"]),
///     subset("GO:3", "c", &["GO:13"]),
/// ];
/// let picked = find_set_covering(&subsets, None, Some(2)).unwrap();
/// let picked: Vec<&str> = picked.iter().map(|s| s.id.as_str()).collect();
/// assert_eq!(picked, vec!["GO:2", "GO:3"]);
/// ```
pub fn find_set_covering<'a>(
    subsets: &'a [CoveringTerm],
    values: Option<&[f64]>,
    max_num_subsets: Option<usize>,
) -> Option<Vec<&'a CoveringTerm>> {
    if let Some(values) = values {
        if values.len() != subsets.len() {
            return None;
        }
    }
    let universe: HashSet<&TermId> = subsets.iter().flat_map(|s| s.covered.iter()).collect();
    let mut included: HashSet<&TermId> = HashSet::new();
    let mut selected: Vec<&CoveringTerm> = Vec::new();

    while selected.len() < subsets.len()
        && included.len() < universe.len()
        && max_num_subsets.map_or(true, |max| selected.len() < max)
    {
        let mut best: Option<(f64, &CoveringTerm)> = None;
        for (idx, subset) in subsets.iter().enumerate() {
            let new_elements = subset
                .covered
                .iter()
                .filter(|term| !included.contains(term))
                .count() as f64;
            let effect = match values {
                Some(values) => values[idx] * new_elements,
                None => new_elements,
            };
            best = match best {
                Some((best_effect, best_subset))
                    if best_effect > effect
                        || (best_effect == effect && best_subset.label <= subset.label) =>
                {
                    Some((best_effect, best_subset))
                }
                _ => Some((effect, subset)),
            };
        }
        let Some((_, subset)) = best else {
            break;
        };
        included.extend(subset.covered.iter());
        selected.push(subset);
    }
    Some(selected)
}

/// Replaces the terms by at most `max_terms` covering ancestors
///
/// Terms are left untouched if there are no more than `max_terms` of them.
///
/// Covering terms are weighted by their information content
/// ([`OntologyProvider::information_content`]), so that specific ancestors
/// win over general ones. If the ontology has no information content for
/// some of the candidates, all candidates weigh the same and root terms
/// only cover themselves.
///
/// # Examples
///
/// ```
/// use genedesc::trimming::trim_terms;
/// use genedesc::{Ontology, TermId};
///
/// let ontology = Ontology::from_obo_str(
///     "[Term]\nid: GO:1\nname: root\n\n\
///      [Term]\nid: GO:2\nname: binding\nis_a: GO:1\n\n\
///      [Term]\nid: GO:3\nname: protein binding\nis_a: GO:2\n\n\
///      [Term]\nid: GO:4\nname: receptor binding\nis_a: GO:3\n\n\
///      [Term]\nid: GO:5\nname: enzyme binding\nis_a: GO:3\n\n\
///      [Term]\nid: GO:6\nname: lipid binding\nis_a: GO:2\n",
/// ).unwrap();
/// let terms: Vec<TermId> = ["GO:4", "GO:5"]
///     .iter()
///     .map(|t| TermId::try_from(*t).unwrap())
///     .collect();
///
/// let trimmed = trim_terms(&terms, &ontology, 1);
/// assert!(trimmed.terms_merged);
/// assert_eq!(trimmed.term_ids, vec![TermId::try_from("GO:3").unwrap()]);
/// assert!(trimmed.ancestors_covering_multiple_terms.contains("protein binding"));
/// ```
pub fn trim_terms<O: OntologyProvider + ?Sized>(
    term_ids: &[TermId],
    ontology: &O,
    max_terms: usize,
) -> TrimmedTerms {
    if term_ids.len() <= max_terms {
        return TrimmedTerms {
            terms_merged: false,
            term_ids: term_ids.to_vec(),
            ancestors_covering_multiple_terms: HashSet::new(),
            terms_omitted: false,
        };
    }
    let mut candidates = common_ancestors(term_ids, ontology);
    let values: Option<Vec<f64>> = candidates
        .iter()
        .map(|candidate| ontology.information_content(candidate.id.as_str()))
        .collect();
    if values.is_none() {
        debug!("No information content, trimming with unweighted terms");
        candidates.retain(|candidate| {
            candidate.covered.contains(&candidate.id)
                || !ontology.ancestors(candidate.id.as_str()).is_empty()
        });
    }
    let selected =
        find_set_covering(&candidates, values.as_deref(), Some(max_terms)).unwrap_or_default();

    let covered: HashSet<&TermId> = selected.iter().flat_map(|s| s.covered.iter()).collect();
    let terms_omitted = term_ids.iter().any(|term| !covered.contains(term));
    debug!(
        "Trimmed {} terms to {} covering terms",
        term_ids.len(),
        selected.len()
    );

    TrimmedTerms {
        terms_merged: true,
        term_ids: selected.iter().map(|s| s.id.clone()).collect(),
        ancestors_covering_multiple_terms: selected
            .iter()
            .filter(|s| s.covered.len() > 1)
            .map(|s| s.label.clone())
            .collect(),
        terms_omitted,
    }
}
