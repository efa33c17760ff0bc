use std::collections::HashMap;

use genedesc::annotations::{Annotation, AnnotationSet, PriorityMap};
use genedesc::orthology::best::{best_orthologs_for_gene, SisterSpecies};
use genedesc::orthology::sentences::{
    class_grouped_sentence, class_grouped_sentence_batched, family_grouped_sentence,
    flat_species_sentence, OrthologSortKey,
};
use genedesc::orthology::OrthologyData;
use genedesc::parser::genes::read_gene_file;
use genedesc::{Aspect, GenedescError, GenedescResult, OrthologRecord};

const SPECIES: [&str; 3] = ["Mus musculus", "Homo sapiens", "Caenorhabditis briggsae"];

fn orthology() -> OrthologyData {
    OrthologyData::from_file("tests/data/orthologs.txt").expect("the orthology fixture must parse")
}

// adds names and the gene family to the human orthologs of the fixture
fn human_records(best: &[genedesc::OrthologCandidate]) -> Vec<OrthologRecord> {
    best.iter()
        .map(|candidate| {
            let number = candidate.symbol().trim_start_matches("ABCA");
            OrthologRecord::from(candidate)
                .with_name(&format!("ATP binding cassette subfamily A member {number}"))
                .with_family("ABCA", "ATP binding cassette subfamily A")
        })
        .collect()
}

#[test]
fn load_orthology() {
    let data = orthology();
    assert_eq!(data.len(), 2);
    assert_eq!(
        data.species("WB:WBGene00000001").collect::<Vec<&str>>(),
        vec!["Homo sapiens"]
    );
    assert_eq!(data.orthologs("WB:WBGene00000001", "Homo sapiens").len(), 6);
    assert_eq!(data.orthologs("WB:WBGene00000002", "Caenorhabditis briggsae").len(), 4);
    assert!(data.orthologs("WB:WBGene00000002", "Homo sapiens").is_empty());

    assert_eq!(
        OrthologyData::from_file("tests/data/missing.txt").unwrap_err(),
        GenedescError::CannotOpenFile("tests/data/missing.txt".to_string())
    );
}

#[test]
fn load_genes() {
    let genes = read_gene_file("tests/data/gene_ids.txt", false).unwrap();
    let names: Vec<&str> = genes.iter().map(|gene| gene.name.as_str()).collect();
    assert_eq!(names, vec!["aap-1", "aat-1", "F07C3.7"]);
    assert_eq!(genes[0].id, "WB:WBGene00000001");

    let genes = read_gene_file("tests/data/gene_ids.txt", true).unwrap();
    assert_eq!(genes.len(), 4);
    assert!(genes[3].is_dead);
}

#[test]
fn best_orthologs_by_species_preference() {
    let data = orthology();

    let best = best_orthologs_for_gene("WB:WBGene00000001", &SPECIES, &data, None).unwrap();
    assert_eq!(best.species, "Homo sapiens");
    let symbols: Vec<&str> = best.orthologs.iter().map(|o| o.symbol()).collect();
    assert_eq!(symbols, vec!["ABCA1", "ABCA2", "ABCA3", "ABCA4", "ABCA5"]);

    let best = best_orthologs_for_gene("WB:WBGene00000002", &SPECIES, &data, None).unwrap();
    assert_eq!(best.species, "Caenorhabditis briggsae");
    assert_eq!(best.orthologs.len(), 4);

    assert!(best_orthologs_for_gene("WB:WBGene00000003", &SPECIES, &data, None).is_none());
}

#[test]
fn best_ortholog_with_sister_species() {
    let data = orthology();
    let mut sister_annotations = AnnotationSet::default();
    let annotations = [
        ("HGNC:34", "GO:0005515"),
        ("HGNC:34", "GO:0016301"),
        ("HGNC:36", "GO:0005515"),
        ("HGNC:36", "GO:0008289"),
        ("HGNC:36", "GO:0043167"),
    ];
    for (gene, term) in annotations {
        let annotation = Annotation::new(gene, term, "IDA", Aspect::MolecularFunction).unwrap();
        sister_annotations.insert(annotation);
    }
    let priority = PriorityMap::new(&["IDA"]);
    let sister = SisterSpecies {
        annotations: &sister_annotations,
        priority: &priority,
    };

    // ABCA6 has more annotations but fewer prediction methods
    let best =
        best_orthologs_for_gene("WB:WBGene00000001", &SPECIES, &data, Some(&sister)).unwrap();
    assert_eq!(best.orthologs.len(), 1);
    assert_eq!(best.orthologs[0].symbol(), "ABCA4");
}

#[test]
fn single_family_is_listed_as_genes() {
    let data = orthology();
    let best = best_orthologs_for_gene("WB:WBGene00000001", &SPECIES, &data, None).unwrap();
    let records = human_records(&best.orthologs);

    let sentence = family_grouped_sentence(&records).unwrap();
    assert_eq!(
        sentence.text,
        "is an ortholog of human ABCA1 (ATP binding cassette subfamily A member 1), \
         ABCA2 (ATP binding cassette subfamily A member 2), \
         and ABCA3 (ATP binding cassette subfamily A member 3)"
    );
    assert_eq!(sentence.symbols, vec!["ABCA1", "ABCA2", "ABCA3"]);
}

#[test]
fn flat_sentence_for_human_orthologs() {
    let data = orthology();
    let best = best_orthologs_for_gene("WB:WBGene00000001", &SPECIES, &data, None).unwrap();
    let records = human_records(&best.orthologs);

    let text = flat_species_sentence(&records[..4], OrthologSortKey::Symbol, false).unwrap();
    assert!(text.starts_with("orthologous to several human genes including ABCA1"));
    assert!(!text.contains("ABCA4"));

    let text = flat_species_sentence(&records[..2], OrthologSortKey::Symbol, false).unwrap();
    assert_eq!(
        text,
        "orthologous to human ABCA1 (ATP binding cassette subfamily A member 1) \
         and ABCA2 (ATP binding cassette subfamily A member 2)"
    );
}

#[test]
fn sister_species_sentence_with_gene_classes() {
    let data = orthology();
    let best = best_orthologs_for_gene("WB:WBGene00000002", &SPECIES, &data, None).unwrap();
    let records: Vec<OrthologRecord> = best
        .orthologs
        .iter()
        .map(|candidate| {
            let record = OrthologRecord::from(candidate);
            if candidate.symbol() == "Cbr-dpy-1" {
                record.with_class("dpy")
            } else {
                record
            }
        })
        .collect();

    let scores: HashMap<&str, u64> = HashMap::from([
        ("Cbr-unc-1", 30),
        ("Cbr-unc-2", 20),
        ("Cbr-dpy-1", 10),
        ("Cbr-lin-1", 5),
    ]);
    let popularity = move |symbol: &str| -> GenedescResult<u64> {
        scores
            .get(symbol)
            .copied()
            .ok_or_else(|| GenedescError::ServiceUnavailable(symbol.to_string()))
    };
    let classes = |gene_id: &str| -> GenedescResult<Option<String>> {
        match gene_id {
            "WBGene00020001" | "WBGene00020002" => Ok(Some("unc".to_string())),
            _ => Ok(None),
        }
    };

    // dpy has a single member, which leaves unc as the only class
    let text = class_grouped_sentence(&records, &best.species, &popularity, &classes).unwrap();
    assert_eq!(text, "is an ortholog of C. briggsae Cbr-unc-1, Cbr-unc-2, and Cbr-dpy-1");
    let batched =
        class_grouped_sentence_batched(&records, &best.species, &popularity, &classes).unwrap();
    assert_eq!(text, batched);

    let relabeled = records
        .iter()
        .map(|record| match record.symbol.as_str() {
            "Cbr-lin-1" => record.clone().with_class("dpy"),
            _ => record.clone(),
        })
        .collect::<Vec<OrthologRecord>>();
    let text = class_grouped_sentence(&relabeled, &best.species, &popularity, &classes).unwrap();
    assert_eq!(
        text,
        "is an ortholog of members of the C. briggsae unc and dpy gene classes \
         including Cbr-unc-1 and Cbr-dpy-1"
    );

    let text = class_grouped_sentence(&records[..2], &best.species, &popularity, &classes).unwrap();
    assert_eq!(text, "is an ortholog of C. briggsae Cbr-unc-1 and Cbr-unc-2");
}
