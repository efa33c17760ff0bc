//! Selection of one authoritative annotation per gene and term
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::trace;

use crate::annotations::Annotation;

/// Ranks evidence codes by priority
///
/// Built from an ordered list of evidence codes, highest priority first.
/// The last code has rank `0` and every earlier code has a strictly higher
/// rank. If a code is listed more than once, its first position counts.
///
/// # Examples
///
/// ```
/// use genedesc::annotations::PriorityMap;
///
/// let priority = PriorityMap::new(&["EXP", "IDA", "IEA"]);
/// assert_eq!(priority.rank("EXP"), Some(2));
/// assert_eq!(priority.rank("IEA"), Some(0));
/// assert_eq!(priority.rank("ND"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityMap {
    ranks: HashMap<String, usize>,
}

impl PriorityMap {
    /// Constructs a new [`PriorityMap`] from evidence codes, highest priority first
    pub fn new<S: AsRef<str>>(priority_order: &[S]) -> Self {
        let mut ranks = HashMap::with_capacity(priority_order.len());
        let len = priority_order.len();
        for (idx, code) in priority_order.iter().enumerate() {
            ranks
                .entry(code.as_ref().to_string())
                .or_insert(len - idx - 1);
        }
        Self { ranks }
    }

    /// Returns the rank of an evidence code or `None` if the code is not recognized
    pub fn rank(&self, evidence_code: &str) -> Option<usize> {
        self.ranks.get(evidence_code).copied()
    }

    /// Returns `true` if the evidence code is part of the priority list
    pub fn contains(&self, evidence_code: &str) -> bool {
        self.ranks.contains_key(evidence_code)
    }

    /// Returns the number of recognized evidence codes
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns `true` if no evidence code is recognized
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Selects at most one annotation per term for a gene
///
/// - obsolete annotations are dropped unless `include_obsolete` is set
/// - annotations with evidence codes that are not part of `priority_order`
///   are dropped
/// - of all annotations to the same term, the one with the highest ranked
///   evidence code is kept. If two annotations share the same rank, the
///   first one wins.
///
/// The qualifier is not part of the uniqueness key. The result is ordered
/// by the first occurrence of each term in the input.
///
/// # Examples
///
/// ```
/// use genedesc::annotations::{select, Annotation};
/// use genedesc::Aspect;
///
/// let gene = "WB:WBGene00000001";
/// let iea = Annotation::new(gene, "GO:0005737", "IEA", Aspect::CellularComponent).unwrap();
/// let exp = Annotation::new(gene, "GO:0005737", "EXP", Aspect::CellularComponent).unwrap();
///
/// let selected = select(&[iea, exp], false, &["EXP", "IDA", "IEA"]);
/// assert_eq!(selected.len(), 1);
/// assert_eq!(selected[0].evidence_code, "EXP");
/// ```
pub fn select<'a, I, S>(
    gene_annotations: I,
    include_obsolete: bool,
    priority_order: &[S],
) -> Vec<Annotation>
where
    I: IntoIterator<Item = &'a Annotation>,
    S: AsRef<str>,
{
    select_with_priority(gene_annotations, include_obsolete, &PriorityMap::new(priority_order))
}

/// Same as [`select`] but with an already built [`PriorityMap`]
pub fn select_with_priority<'a, I>(
    gene_annotations: I,
    include_obsolete: bool,
    priority: &PriorityMap,
) -> Vec<Annotation>
where
    I: IntoIterator<Item = &'a Annotation>,
{
    let mut order: Vec<&Annotation> = Vec::new();
    let mut selected: HashMap<&str, (usize, usize)> = HashMap::new();

    for annotation in gene_annotations {
        if annotation.is_obsolete && !include_obsolete {
            continue;
        }
        let Some(rank) = priority.rank(&annotation.evidence_code) else {
            trace!(
                "Ignoring {} with evidence {}",
                annotation.term_id,
                annotation.evidence_code
            );
            continue;
        };
        match selected.entry(annotation.term_id.as_str()) {
            Entry::Vacant(entry) => {
                entry.insert((order.len(), rank));
                order.push(annotation);
            }
            Entry::Occupied(mut entry) => {
                let (idx, current_rank) = *entry.get();
                if rank > current_rank {
                    order[idx] = annotation;
                    entry.insert((idx, rank));
                }
            }
        }
    }
    order.into_iter().cloned().collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Aspect;

    const PRIORITY: [&str; 18] = [
        "EXP", "IDA", "IPI", "IMP", "IGI", "IEP", "IC", "ISS", "ISO", "ISA", "ISM", "IGC", "IBA",
        "IBD", "IKR", "IRD", "RCA", "IEA",
    ];

    fn annotation(term: &str, evidence: &str) -> Annotation {
        Annotation::new("WB:WBGene00000001", term, evidence, Aspect::MolecularFunction).unwrap()
    }

    #[test]
    fn priority_ranks() {
        let priority = PriorityMap::new(&PRIORITY);
        assert_eq!(priority.len(), 18);
        assert_eq!(priority.rank("EXP"), Some(17));
        assert_eq!(priority.rank("IEA"), Some(0));
        assert!(priority.rank("EXP") > priority.rank("IDA"));
        assert!(!priority.contains("ND"));
    }

    #[test]
    fn duplicate_codes_keep_first_rank() {
        let priority = PriorityMap::new(&["EXP", "IEA", "EXP"]);
        assert_eq!(priority.rank("EXP"), Some(2));
        assert_eq!(priority.rank("IEA"), Some(1));
    }

    #[test]
    fn prefers_higher_ranked_evidence() {
        let annotations = vec![annotation("GO:1", "IEA"), annotation("GO:1", "EXP")];
        let selected = select(&annotations, false, &PRIORITY);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].evidence_code, "EXP");

        let annotations = vec![annotation("GO:1", "EXP"), annotation("GO:1", "IEA")];
        let selected = select(&annotations, false, &PRIORITY);
        assert_eq!(selected[0].evidence_code, "EXP");
    }

    #[test]
    fn drops_unknown_evidence() {
        let annotations: Vec<Annotation> = (0..100)
            .map(|i| annotation(&format!("GO:{i}"), "ND"))
            .collect();
        assert!(select(&annotations, true, &PRIORITY).is_empty());
    }

    #[test]
    fn equal_rank_keeps_first() {
        let mut first = annotation("GO:1", "IDA");
        first.reference = "PMID:1".to_string();
        let mut second = annotation("GO:1", "IDA");
        second.reference = "PMID:2".to_string();

        let selected = select(&[first, second], false, &PRIORITY);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].reference, "PMID:1");
    }

    #[test]
    fn qualifier_is_not_part_of_the_key() {
        let mut negated = annotation("GO:1", "EXP");
        negated.qualifier = "NOT".to_string();
        let plain = annotation("GO:1", "IEA");
        let selected = select(&[plain, negated], false, &PRIORITY);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].qualifier, "NOT");
    }

    #[test]
    fn obsolete_annotations() {
        let mut obsolete = annotation("GO:2", "EXP");
        obsolete.is_obsolete = true;
        let annotations = vec![annotation("GO:1", "EXP"), obsolete];

        let selected = select(&annotations, false, &PRIORITY);
        assert_eq!(selected.len(), 1);
        assert!(selected.iter().all(|a| !a.is_obsolete));

        let selected = select(&annotations, true, &PRIORITY);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn keeps_first_seen_term_order() {
        let annotations = vec![
            annotation("GO:3", "IEA"),
            annotation("GO:1", "IEA"),
            annotation("GO:3", "EXP"),
            annotation("GO:2", "IDA"),
        ];
        let selected = select(&annotations, false, &PRIORITY);
        let terms: Vec<&str> = selected.iter().map(|a| a.term_id.as_str()).collect();
        assert_eq!(terms, vec!["GO:3", "GO:1", "GO:2"]);
        assert_eq!(selected[0].evidence_code, "EXP");
    }
}
