//! Selecting the best orthologs of a gene
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::annotations::{AnnotationSource, Aspect, EvidenceGroups, PriorityMap};
use crate::orthology::{OrthologCandidate, OrthologRecord, OrthologyData};

/// The annotations of a closely related species, used to rank orthologs
pub struct SisterSpecies<'a> {
    /// The annotations of the sister species
    pub annotations: &'a dyn AnnotationSource,
    /// Evidence code ranking used to select the annotations
    pub priority: &'a PriorityMap,
}

/// The best orthologs of a gene and the species they belong to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestOrthologs {
    /// The selected orthologs
    pub orthologs: Vec<OrthologCandidate>,
    /// The species of the orthologs
    pub species: String,
}

/// Returns the best orthologs of a gene from the first species that has any
///
/// `species` lists the candidate species by preference. If the gene has more
/// than one ortholog in the chosen species:
///
/// - with a `sister` species, the single ortholog with the most prediction
///   methods wins. Ties are broken by the number of annotations of the
///   ortholog in the sister species, and then by input order.
/// - without a `sister` species, all orthologs that share the highest
///   number of prediction methods are returned, in input order.
///
/// Returns `None` if no candidate species has orthologs of the gene
///
/// # Examples
///
/// ```
/// use genedesc::orthology::best::best_orthologs_for_gene;
/// use genedesc::orthology::OrthologyData;
/// use genedesc::OrthologCandidate;
///
/// let mut data = OrthologyData::default();
/// data.insert("WB:WBGene1", "Homo sapiens", OrthologCandidate::new("HGNC:1", "A", "OMA;Panther"));
/// data.insert("WB:WBGene1", "Homo sapiens", OrthologCandidate::new("HGNC:2", "B", "OMA"));
///
/// let species = ["Mus musculus", "Homo sapiens"];
/// let best = best_orthologs_for_gene("WB:WBGene1", &species, &data, None).unwrap();
/// assert_eq!(best.species, "Homo sapiens");
/// assert_eq!(best.orthologs.len(), 1);
/// assert_eq!(best.orthologs[0].symbol(), "A");
///
/// assert!(best_orthologs_for_gene("WB:WBGene2", &["Homo sapiens"], &data, None).is_none());
/// ```
pub fn best_orthologs_for_gene<S: AsRef<str>>(
    gene_id: &str,
    species: &[S],
    orthology: &OrthologyData,
    sister: Option<&SisterSpecies>,
) -> Option<BestOrthologs> {
    let (species, candidates) = species.iter().find_map(|species| {
        let candidates = orthology.orthologs(gene_id, species.as_ref());
        (!candidates.is_empty()).then_some((species.as_ref(), candidates))
    })?;
    debug!(
        "Found {} {} orthologs for {}",
        candidates.len(),
        species,
        gene_id
    );

    let orthologs = match (candidates, sister) {
        ([single], _) => vec![single.clone()],
        (_, Some(sister)) => {
            let mut best: Option<(&OrthologCandidate, (usize, usize))> = None;
            for candidate in candidates {
                let annotations = sister
                    .annotations
                    .annotations(candidate.gene_id(), sister.priority)
                    .len();
                let key = (candidate.method_count(), annotations);
                trace!("{}: {:?}", candidate.gene_id(), key);
                if best.map_or(true, |(_, best_key)| key > best_key) {
                    best = Some((candidate, key));
                }
            }
            best.map(|(candidate, _)| vec![candidate.clone()])
                .unwrap_or_default()
        }
        (_, None) => {
            let max_methods = candidates
                .iter()
                .map(OrthologCandidate::method_count)
                .max()
                .unwrap_or_default();
            candidates
                .iter()
                .filter(|candidate| candidate.method_count() == max_methods)
                .cloned()
                .collect()
        }
    };

    Some(BestOrthologs {
        orthologs,
        species: species.to_string(),
    })
}

/// Returns the human ortholog with the most molecular function annotations
///
/// Used for information-poor species that have (almost) no annotations of
/// their own. Every ortholog is mapped to the identifier space of
/// `annotations` via `id_map`. The mapped id, prefixed with `id_prefix`, is
/// used to look up the selected annotations. Orthologs without a mapped id
/// are ignored.
///
/// The ortholog with the most experimental molecular function annotations
/// wins. If there are none, the one with the most other molecular function
/// annotations wins. Ties are broken by the order of the orthologs.
///
/// Returns the mapped id of the best ortholog or an empty string if no
/// ortholog has molecular function annotations.
///
/// Evidence codes without an evidence group count as not experimental.
pub fn best_ortholog_for_info_poor<A: AnnotationSource + ?Sized>(
    human_orthologs: &[OrthologRecord],
    id_map: &HashMap<String, String>,
    priority: &PriorityMap,
    annotations: &A,
    id_prefix: &str,
    evidence_groups: &EvidenceGroups,
) -> String {
    let mut experimental: Vec<(&str, usize)> = Vec::new();
    let mut predicted: Vec<(&str, usize)> = Vec::new();

    for ortholog in human_orthologs {
        let Some(mapped) = id_map.get(&ortholog.gene_id).filter(|id| !id.is_empty()) else {
            trace!("No mapped id for {}", ortholog.gene_id);
            continue;
        };
        let gene_id = format!("{id_prefix}{mapped}");
        for annotation in annotations.annotations(&gene_id, priority) {
            if annotation.aspect != Aspect::MolecularFunction {
                continue;
            }
            if evidence_groups.is_experimental(&annotation.evidence_code) {
                increment(&mut experimental, mapped);
            } else {
                increment(&mut predicted, mapped);
            }
        }
    }

    [experimental, predicted]
        .iter()
        .find_map(|counts| most_frequent(counts))
        .map(str::to_string)
        .unwrap_or_default()
}

fn increment<'a>(counts: &mut Vec<(&'a str, usize)>, id: &'a str) {
    match counts.iter_mut().find(|(key, _)| *key == id) {
        Some((_, count)) => *count += 1,
        None => counts.push((id, 1)),
    }
}

fn most_frequent<'a>(counts: &[(&'a str, usize)]) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for &(id, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((id, count));
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::annotations::{Annotation, AnnotationSet};

    const HUMAN: &str = "Homo sapiens";
    const BRIGGSAE: &str = "Caenorhabditis briggsae";

    fn orthology() -> OrthologyData {
        let mut data = OrthologyData::default();
        for (species, id, symbol, methods) in [
            (HUMAN, "HGNC:1", "A", "OMA"),
            (HUMAN, "HGNC:2", "B", "OMA;Panther"),
            (HUMAN, "HGNC:3", "C", "Panther;OMA"),
            (HUMAN, "HGNC:4", "D", "Panther"),
            (BRIGGSAE, "WBGene9", "Cbr-a", "OMA"),
        ] {
            data.insert("WB:WBGene1", species, OrthologCandidate::new(id, symbol, methods));
        }
        data
    }

    fn symbols(best: &BestOrthologs) -> Vec<&str> {
        best.orthologs.iter().map(OrthologCandidate::symbol).collect()
    }

    #[test]
    fn species_order() {
        let data = orthology();
        let species = ["Mus musculus", BRIGGSAE, HUMAN];
        let best = best_orthologs_for_gene("WB:WBGene1", &species, &data, None).unwrap();
        assert_eq!(best.species, BRIGGSAE);
        assert_eq!(symbols(&best), vec!["Cbr-a"]);

        let best =
            best_orthologs_for_gene("WB:WBGene1", &["Mus musculus", HUMAN], &data, None).unwrap();
        assert_eq!(best.species, HUMAN);
    }

    #[test]
    fn no_species_with_data() {
        let data = orthology();
        let species = ["Mus musculus", "Danio rerio"];
        assert!(best_orthologs_for_gene("WB:WBGene1", &species, &data, None).is_none());
        let empty: [&str; 0] = [];
        assert!(best_orthologs_for_gene("WB:WBGene1", &empty, &data, None).is_none());
    }

    #[test]
    fn ties_without_sister() {
        let data = orthology();
        let best = best_orthologs_for_gene("WB:WBGene1", &[HUMAN], &data, None).unwrap();
        assert_eq!(symbols(&best), vec!["B", "C"]);
    }

    #[test]
    fn single_winner_with_sister() {
        let data = orthology();
        let mut set = AnnotationSet::default();
        set.insert(Annotation::new("HGNC:3", "GO:1", "IDA", Aspect::MolecularFunction).unwrap());
        let priority = PriorityMap::new(&["IDA"]);
        let sister = SisterSpecies {
            annotations: &set,
            priority: &priority,
        };
        let best = best_orthologs_for_gene("WB:WBGene1", &[HUMAN], &data, Some(&sister)).unwrap();
        assert_eq!(symbols(&best), vec!["C"]);

        // without any annotations, the first candidate with most methods wins
        let empty = AnnotationSet::default();
        let sister = SisterSpecies {
            annotations: &empty,
            priority: &priority,
        };
        let best = best_orthologs_for_gene("WB:WBGene1", &[HUMAN], &data, Some(&sister)).unwrap();
        assert_eq!(symbols(&best), vec!["B"]);
    }

    type InfoPoorSetup = (
        Vec<OrthologRecord>,
        HashMap<String, String>,
        AnnotationSet,
        EvidenceGroups,
    );

    fn info_poor_setup() -> InfoPoorSetup {
        let orthologs = vec![
            OrthologRecord::new("ENSG1", "A"),
            OrthologRecord::new("ENSG2", "B"),
            OrthologRecord::new("ENSG3", "C"),
            OrthologRecord::new("ENSG4", "D"),
        ];
        let id_map: HashMap<String, String> = [
            ("ENSG1", "1"),
            ("ENSG2", "2"),
            ("ENSG3", "3"),
            ("ENSG4", ""),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let mut set = AnnotationSet::default();
        for (gene, term, evidence, aspect) in [
            ("RGD:1", "GO:1", "IEA", Aspect::MolecularFunction),
            ("RGD:1", "GO:2", "IEA", Aspect::MolecularFunction),
            ("RGD:2", "GO:1", "IDA", Aspect::MolecularFunction),
            ("RGD:2", "GO:3", "IDA", Aspect::BiologicalProcess),
            ("RGD:2", "GO:4", "IDA", Aspect::BiologicalProcess),
            ("RGD:3", "GO:1", "HDA", Aspect::MolecularFunction),
        ] {
            set.insert(Annotation::new(gene, term, evidence, aspect).unwrap());
        }
        let groups: EvidenceGroups = [
            ("IDA", "EXPERIMENTAL"),
            ("HDA", "HIGH_THROUGHPUT_EXPERIMENTAL"),
            ("IEA", "ELECTRONIC"),
        ]
        .into_iter()
        .collect();
        (orthologs, id_map, set, groups)
    }

    #[test]
    fn info_poor_prefers_experimental() {
        let (orthologs, id_map, set, groups) = info_poor_setup();
        let priority = PriorityMap::new(&["IDA", "HDA", "IEA"]);
        let best =
            best_ortholog_for_info_poor(&orthologs, &id_map, &priority, &set, "RGD:", &groups);
        // 2 and 3 both have one experimental MF annotation, 2 comes first
        assert_eq!(best, "2");
    }

    #[test]
    fn info_poor_falls_back_to_predicted() {
        let (orthologs, id_map, set, groups) = info_poor_setup();
        let priority = PriorityMap::new(&["IEA"]);
        let best =
            best_ortholog_for_info_poor(&orthologs, &id_map, &priority, &set, "RGD:", &groups);
        assert_eq!(best, "1");
    }

    #[test]
    fn info_poor_without_annotations() {
        let (orthologs, id_map, set, groups) = info_poor_setup();
        let priority = PriorityMap::new(&["IEA"]);
        let best =
            best_ortholog_for_info_poor(&orthologs, &id_map, &priority, &set, "HGNC:", &groups);
        assert!(best.is_empty());
        let best = best_ortholog_for_info_poor(&[], &id_map, &priority, &set, "RGD:", &groups);
        assert!(best.is_empty());
    }
}
