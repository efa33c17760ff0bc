use std::collections::HashSet;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use genedesc::annotations::Annotation;
use genedesc::orthology::sentences::{
    family_grouped_sentence, flat_species_sentence, OrthologSortKey,
};
use genedesc::sentence::compose_sentence;
use genedesc::{Aspect, GenerationConfig, Ontology, OrthologRecord, SentenceGenerator};

fn compose_benchmark(c: &mut Criterion) {
    let names: Vec<String> = (0..50).map(|i| format!("term number {i}")).collect();
    let multiple: HashSet<String> = names.iter().step_by(5).cloned().collect();

    c.bench_function("compose 50 terms", |b| {
        b.iter(|| {
            compose_sentence(
                black_box("is involved in"),
                "",
                black_box(names.as_slice()),
                "",
                &multiple,
                false,
            )
            .len()
        })
    });
}

fn orthologs(n: usize) -> Vec<OrthologRecord> {
    (0..n)
        .map(|i| {
            OrthologRecord::new(&format!("HGNC:{i}"), &format!("GENE{i}"))
                .with_name(&format!("gene number {i}"))
                .with_family(&format!("FAM{}", i % 7), &format!("family {}", i % 7))
        })
        .collect()
}

fn ortholog_sentence_benchmark(c: &mut Criterion) {
    let records = orthologs(200);

    c.bench_function("family sentence 200 orthologs", |b| {
        b.iter(|| family_grouped_sentence(black_box(&records)).map(|s| s.text.len()))
    });
    c.bench_function("flat sentence 200 orthologs", |b| {
        b.iter(|| {
            flat_species_sentence(black_box(&records), OrthologSortKey::Name, false)
                .map(|s| s.len())
        })
    });
}

fn generator_benchmark(c: &mut Criterion) {
    let ontology = Ontology::from_obo("tests/data/go.obo").expect("go.obo cannot be parsed");
    let config = GenerationConfig::default();
    let generator = SentenceGenerator::new(&ontology, &config);
    let annotations: Vec<Annotation> = ontology
        .terms()
        .filter(|term| !term.is_obsolete())
        .map(|term| {
            let aspect = Aspect::MolecularFunction;
            Annotation::new("WB:WBGene00000001", term.id().as_str(), "IDA", aspect)
                .expect("valid term id")
                .resolve(&ontology)
        })
        .collect();

    c.bench_function("sentences with trimming", |b| {
        b.iter(|| {
            generator
                .sentences(black_box(&annotations))
                .expect("templates are complete")
                .len()
        })
    });
}

criterion_group! {
    name = sentences;
    config = Criterion::default().sample_size(50).measurement_time(Duration::from_secs(5));
    targets = compose_benchmark, ortholog_sentence_benchmark, generator_benchmark
}
criterion_main!(sentences);
