//! Summarizing ortholog lists in a single sentence
//!
//! Three policies are available:
//!
//! - [`family_grouped_sentence`]: human orthologs, grouped by gene family
//! - [`class_grouped_sentence`]: orthologs of a sister species, ranked by
//!   popularity and grouped by gene class
//! - [`flat_species_sentence`]: orthologs listed by name, without grouping
//!
//! At most three genes, families or classes are listed in a sentence.
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::orthology::{abbreviate_species_name, OrthologRecord};
use crate::services::{GeneClassService, PopularityService};
use crate::utils::{dedup_stable, OrderedGroups};
use crate::{concatenate_words_with_oxford_comma, MAX_ORTHOLOGS_IN_SENTENCE};

/// An orthology sentence and the gene symbols it mentions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrthologSentence {
    /// The gene symbols used in the sentence
    pub symbols: Vec<String>,
    /// The rendered sentence
    pub text: String,
}

/// Builds the sentence for human orthologs, grouped by gene family
///
/// Up to three orthologs are listed as `symbol (name)`. More orthologs are
/// split into gene families and genes without family. Families with a
/// single member are listed as single genes. If only one family with
/// several members remains, its members are listed as single genes as well.
///
/// Returns `None` if there are no orthologs
///
/// # Examples
///
/// ```
/// use genedesc::orthology::sentences::family_grouped_sentence;
/// use genedesc::OrthologRecord;
///
/// let orthologs = vec![
///     OrthologRecord::new("HGNC:2", "BRCA2").with_name("BRCA2 DNA repair associated"),
///     OrthologRecord::new("HGNC:1", "BRCA1").with_name("BRCA1 DNA repair associated"),
/// ];
/// let sentence = family_grouped_sentence(&orthologs).unwrap();
/// assert_eq!(
///     sentence.text,
///     "is an ortholog of human BRCA1 (BRCA1 DNA repair associated) \
///      and BRCA2 (BRCA2 DNA repair associated)"
/// );
/// assert_eq!(sentence.symbols, vec!["BRCA1", "BRCA2"]);
/// ```
pub fn family_grouped_sentence(orthologs: &[OrthologRecord]) -> Option<OrthologSentence> {
    if orthologs.is_empty() {
        return None;
    }
    if orthologs.len() <= MAX_ORTHOLOGS_IN_SENTENCE {
        let mut display: Vec<String> = orthologs.iter().map(OrthologRecord::display_name).collect();
        display.sort();
        let text = format!(
            "is an ortholog of human {}",
            concatenate_words_with_oxford_comma(&display)
        );
        return Some(OrthologSentence {
            symbols: first_words(&display),
            text,
        });
    }

    let mut families: OrderedGroups<&str, &OrthologRecord> = OrderedGroups::default();
    let mut without_family: Vec<String> = Vec::new();
    for ortholog in orthologs {
        match ortholog.family() {
            Some((family_id, _)) => families.push(family_id, ortholog),
            None => without_family.push(ortholog.display_name()),
        }
    }

    let mut grouped: Vec<(&str, Vec<&OrthologRecord>)> = Vec::new();
    for (family_id, members) in families.into_groups() {
        if members.len() == 1 {
            without_family.extend(members.iter().map(|m| m.display_name()));
        } else {
            grouped.push((family_id, members));
        }
    }
    if grouped.len() == 1 {
        for (_, members) in grouped.drain(..) {
            without_family.extend(members.iter().map(|m| m.display_name()));
        }
    }

    let mut family_names: Vec<String> = grouped
        .iter()
        .filter_map(|(_, members)| members.first())
        .filter_map(|first| first.family())
        .map(|(family_id, family_name)| format!("{family_id} ({family_name})"))
        .collect();
    let mut genes_in_families = dedup_stable(
        grouped
            .iter()
            .flat_map(|(_, members)| members.iter().map(|m| m.symbol.clone())),
    );
    let mut without_family = dedup_stable(without_family);
    family_names.truncate(MAX_ORTHOLOGS_IN_SENTENCE);
    genes_in_families.truncate(MAX_ORTHOLOGS_IN_SENTENCE);
    without_family.truncate(MAX_ORTHOLOGS_IN_SENTENCE);

    let mut clauses: Vec<String> = Vec::with_capacity(2);
    if !without_family.is_empty() {
        clauses.push(format!(
            "human {}",
            concatenate_words_with_oxford_comma(&without_family)
        ));
    }
    if !family_names.is_empty() {
        let family_word = if family_names.len() > 1 { "families" } else { "family" };
        clauses.push(format!(
            "members of the human {} gene {} including {}",
            concatenate_words_with_oxford_comma(&family_names),
            family_word,
            concatenate_words_with_oxford_comma(&genes_in_families)
        ));
    }

    let mut symbols = first_words(&genes_in_families);
    symbols.extend(first_words(&without_family));
    Some(OrthologSentence {
        symbols,
        text: format!("is an ortholog of {}", clauses.join(" and ")),
    })
}

fn first_words(display: &[String]) -> Vec<String> {
    display
        .iter()
        .map(|d| d.split(' ').next().unwrap_or_default().to_string())
        .collect()
}

/// An ortholog with its popularity and gene class
#[derive(Debug, Clone)]
struct RankedOrtholog<'a> {
    symbol: &'a str,
    popularity: u64,
    class: Option<String>,
}

fn rank_ortholog<'a, P, C>(
    ortholog: &'a OrthologRecord,
    popularity: &P,
    classes: &C,
) -> RankedOrtholog<'a>
where
    P: PopularityService + ?Sized,
    C: GeneClassService + ?Sized,
{
    let score = popularity.popularity(&ortholog.symbol).unwrap_or_else(|err| {
        warn!("No popularity for {}: {}", ortholog.symbol, err);
        0
    });
    let class = match &ortholog.class_label {
        Some(label) => Some(label.clone()),
        None => classes.gene_class(&ortholog.gene_id).unwrap_or_else(|err| {
            warn!("No gene class for {}: {}", ortholog.gene_id, err);
            None
        }),
    };
    RankedOrtholog {
        symbol: &ortholog.symbol,
        popularity: score,
        class: class.filter(|c| !c.is_empty()),
    }
}

/// Builds the sentence for orthologs of a sister species
///
/// The genus of `species` is abbreviated, e.g. `C. briggsae`. Up to three
/// orthologs are listed in alphabetical order. For more orthologs, every
/// ortholog is ranked by its popularity (ties by symbol) and grouped by its
/// gene class. Classes with a single member are listed as single genes, and
/// so are the members of a class that remains alone. Classes are
/// represented by their most popular member. Only the three most popular
/// genes or classes are listed.
///
/// Popularity and gene class are looked up once per ortholog, one after
/// another. A failed popularity lookup counts as `0`, a failed gene class
/// lookup as "no class". A `class_label` of the ortholog takes precedence
/// over the gene class service.
///
/// Returns `None` if there are no orthologs
///
/// # Examples
///
/// ```
/// use genedesc::orthology::sentences::class_grouped_sentence;
/// use genedesc::{GenedescResult, OrthologRecord};
///
/// let orthologs = vec![
///     OrthologRecord::new("WB:WBGene1", "Cbr-unc-22"),
///     OrthologRecord::new("WB:WBGene2", "Cbr-dpy-5"),
/// ];
/// let popularity = |_: &str| -> GenedescResult<u64> { Ok(0) };
/// let classes = |_: &str| -> GenedescResult<Option<String>> { Ok(None) };
///
/// let species = "Caenorhabditis briggsae";
/// let text = class_grouped_sentence(&orthologs, species, &popularity, &classes);
/// assert_eq!(text.unwrap(), "is an ortholog of C. briggsae Cbr-dpy-5 and Cbr-unc-22");
/// ```
pub fn class_grouped_sentence<P, C>(
    orthologs: &[OrthologRecord],
    species: &str,
    popularity: &P,
    classes: &C,
) -> Option<String>
where
    P: PopularityService + ?Sized,
    C: GeneClassService + ?Sized,
{
    if orthologs.len() <= MAX_ORTHOLOGS_IN_SENTENCE {
        return few_orthologs_sentence(orthologs, species);
    }
    let ranked: Vec<RankedOrtholog> = orthologs
        .iter()
        .map(|ortholog| rank_ortholog(ortholog, popularity, classes))
        .collect();
    Some(render_class_grouped(ranked, species))
}

/// Same as [`class_grouped_sentence`], but looks up popularity and gene
/// classes of all orthologs in parallel
///
/// The result is identical to [`class_grouped_sentence`].
pub fn class_grouped_sentence_batched<P, C>(
    orthologs: &[OrthologRecord],
    species: &str,
    popularity: &P,
    classes: &C,
) -> Option<String>
where
    P: PopularityService + Sync + ?Sized,
    C: GeneClassService + Sync + ?Sized,
{
    if orthologs.len() <= MAX_ORTHOLOGS_IN_SENTENCE {
        return few_orthologs_sentence(orthologs, species);
    }
    let ranked: Vec<RankedOrtholog> = orthologs
        .par_iter()
        .map(|ortholog| rank_ortholog(ortholog, popularity, classes))
        .collect();
    Some(render_class_grouped(ranked, species))
}

fn few_orthologs_sentence(orthologs: &[OrthologRecord], species: &str) -> Option<String> {
    if orthologs.is_empty() {
        return None;
    }
    let mut symbols: Vec<&str> = orthologs.iter().map(|o| o.symbol.as_str()).collect();
    symbols.sort_unstable();
    Some(format!(
        "is an ortholog of {} {}",
        abbreviate_species_name(species),
        concatenate_words_with_oxford_comma(&symbols)
    ))
}

fn render_class_grouped(mut ranked: Vec<RankedOrtholog>, species: &str) -> String {
    let species = abbreviate_species_name(species);
    ranked.sort_by(|a, b| {
        b.popularity
            .cmp(&a.popularity)
            .then_with(|| a.symbol.cmp(b.symbol))
    });

    let mut without_class: Vec<&RankedOrtholog> = Vec::new();
    let mut classes: OrderedGroups<&str, &RankedOrtholog> = OrderedGroups::default();
    for ortholog in &ranked {
        match &ortholog.class {
            Some(class) => classes.push(class.as_str(), ortholog),
            None => without_class.push(ortholog),
        }
    }

    // (representative, class) in display order
    let mut items: Vec<(&RankedOrtholog, Option<&str>)> =
        without_class.into_iter().map(|o| (o, None)).collect();
    let mut grouped: Vec<(&str, Vec<&RankedOrtholog>)> = Vec::new();
    for (class, members) in classes.into_groups() {
        if members.len() == 1 {
            items.extend(members.into_iter().map(|o| (o, None)));
        } else {
            grouped.push((class, members));
        }
    }
    if grouped.len() == 1 {
        for (_, members) in grouped.drain(..) {
            items.extend(members.into_iter().map(|o| (o, None)));
        }
    }
    for (class, members) in grouped {
        if let Some(best) = members.first() {
            items.push((best, Some(class)));
        }
    }
    items.sort_by(|a, b| b.0.popularity.cmp(&a.0.popularity));
    items.truncate(MAX_ORTHOLOGS_IN_SENTENCE);

    let genes_without_class: Vec<&str> = items
        .iter()
        .filter(|(_, class)| class.is_none())
        .map(|(o, _)| o.symbol)
        .collect();
    let class_names: Vec<&str> = items.iter().filter_map(|(_, class)| *class).collect();
    let genes_in_classes: Vec<&str> = items
        .iter()
        .filter(|(_, class)| class.is_some())
        .map(|(o, _)| o.symbol)
        .collect();

    let mut clauses: Vec<String> = Vec::with_capacity(2);
    if !genes_without_class.is_empty() {
        clauses.push(format!(
            "{} {}",
            species,
            concatenate_words_with_oxford_comma(&genes_without_class)
        ));
    }
    if !class_names.is_empty() {
        let class_word = if class_names.len() > 1 { "classes" } else { "class" };
        clauses.push(format!(
            "members of the {} {} gene {} including {}",
            species,
            concatenate_words_with_oxford_comma(&class_names),
            class_word,
            concatenate_words_with_oxford_comma(&genes_in_classes)
        ));
    }
    debug!("Grouped {} orthologs into {} classes", ranked.len(), class_names.len());
    format!("is an ortholog of {}", clauses.join(" and "))
}

/// The field used to order orthologs in [`flat_species_sentence`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrthologSortKey {
    /// Order by gene symbol
    Symbol,
    /// Order by gene name, orthologs without name first
    #[default]
    Name,
}

/// Builds a flat sentence of human orthologs
///
/// Orthologs are ordered by `sort_by`. If some orthologs were excluded
/// before or if there are more than three, only the first three are
/// listed as `several human genes including ...`.
///
/// Returns `None` if there are no orthologs
///
/// # Examples
///
/// ```
/// use genedesc::orthology::sentences::{flat_species_sentence, OrthologSortKey};
/// use genedesc::OrthologRecord;
///
/// let orthologs = vec![
///     OrthologRecord::new("HGNC:2", "PIK3R2")
///         .with_name("phosphoinositide-3-kinase regulatory subunit 2"),
///     OrthologRecord::new("HGNC:1", "PIK3R1")
///         .with_name("phosphoinositide-3-kinase regulatory subunit 1"),
/// ];
/// let text = flat_species_sentence(&orthologs, OrthologSortKey::Name, false).unwrap();
/// assert_eq!(
///     text,
///     "orthologous to human PIK3R1 (phosphoinositide-3-kinase regulatory subunit 1) \
///      and PIK3R2 (phosphoinositide-3-kinase regulatory subunit 2)"
/// );
/// ```
pub fn flat_species_sentence(
    orthologs: &[OrthologRecord],
    sort_by: OrthologSortKey,
    excluded_orthologs: bool,
) -> Option<String> {
    if orthologs.is_empty() {
        return None;
    }
    let mut sorted: Vec<&OrthologRecord> = orthologs.iter().collect();
    match sort_by {
        OrthologSortKey::Symbol => sorted.sort_by(|a, b| a.symbol.cmp(&b.symbol)),
        OrthologSortKey::Name => sorted.sort_by(|a, b| {
            let a_name = a.name.as_deref().unwrap_or_default();
            a_name.cmp(b.name.as_deref().unwrap_or_default())
        }),
    }

    let mut prefix = "human";
    if excluded_orthologs || sorted.len() > MAX_ORTHOLOGS_IN_SENTENCE {
        sorted.truncate(MAX_ORTHOLOGS_IN_SENTENCE);
        prefix = "several human genes including";
    }
    let display: Vec<String> = sorted.iter().map(|o| o.display_name()).collect();
    Some(format!(
        "orthologous to {} {}",
        prefix,
        concatenate_words_with_oxford_comma(&display)
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{GenedescError, GenedescResult};
    use std::collections::HashMap;

    const BRIGGSAE: &str = "Caenorhabditis briggsae";

    fn human(id: &str, symbol: &str, name: &str) -> OrthologRecord {
        OrthologRecord::new(id, symbol).with_name(name)
    }

    #[test]
    fn family_grouped_empty() {
        assert!(family_grouped_sentence(&[]).is_none());
    }

    #[test]
    fn single_family_dissolves() {
        let orthologs: Vec<OrthologRecord> = (1..=5)
            .map(|i| {
                let name = format!("ABC subfamily A member {i}");
                human(&format!("HGNC:{i}"), &format!("ABCA{i}"), &name)
                    .with_family("ABCA", "ATP binding cassette subfamily A")
            })
            .collect();
        let sentence = family_grouped_sentence(&orthologs).unwrap();
        assert_eq!(
            sentence.text,
            "is an ortholog of human ABCA1 (ABC subfamily A member 1), \
             ABCA2 (ABC subfamily A member 2), and ABCA3 (ABC subfamily A member 3)"
        );
        assert!(!sentence.text.contains("family including"));
        assert_eq!(sentence.symbols, vec!["ABCA1", "ABCA2", "ABCA3"]);
    }

    #[test]
    fn families_and_single_genes() {
        let kcna = "potassium channels";
        let orthologs = vec![
            human("HGNC:1", "SLC1A1", "solute carrier 1").with_family("SLC1", "solute carriers 1"),
            human("HGNC:2", "SLC1A2", "solute carrier 2").with_family("SLC1", "solute carriers 1"),
            human("HGNC:3", "KCNA1", "potassium channel 1").with_family("KCNA", kcna),
            human("HGNC:4", "KCNA2", "potassium channel 2").with_family("KCNA", kcna),
            human("HGNC:5", "TP53", "tumor protein p53").with_family("TP", "tumor proteins"),
            OrthologRecord::new("HGNC:6", "FOO1"),
        ];
        let sentence = family_grouped_sentence(&orthologs).unwrap();
        assert_eq!(
            sentence.text,
            "is an ortholog of human FOO1 and TP53 (tumor protein p53) and members of the human \
             SLC1 (solute carriers 1) and KCNA (potassium channels) gene families \
             including SLC1A1, SLC1A2, and KCNA1"
        );
        assert_eq!(sentence.symbols, vec!["SLC1A1", "SLC1A2", "KCNA1", "FOO1", "TP53"]);
    }

    #[test]
    fn family_left_alone_after_singletons_dissolves() {
        let orthologs = vec![
            human("HGNC:1", "SLC1A1", "solute carrier 1").with_family("SLC1", "solute carriers 1"),
            human("HGNC:2", "SLC1A2", "solute carrier 2").with_family("SLC1", "solute carriers 1"),
            human("HGNC:5", "TP53", "tumor protein p53").with_family("TP", "tumor proteins"),
            OrthologRecord::new("HGNC:6", "FOO1"),
        ];
        let sentence = family_grouped_sentence(&orthologs).unwrap();
        assert_eq!(
            sentence.text,
            "is an ortholog of human FOO1, TP53 (tumor protein p53), and SLC1A1 (solute carrier 1)"
        );
        assert!(!sentence.text.contains("members of"));
        assert_eq!(sentence.symbols, vec!["FOO1", "TP53", "SLC1A1"]);
    }

    #[test]
    fn empty_family_id_is_ungrouped() {
        let orthologs = vec![
            human("HGNC:1", "A1", "a one").with_family("", ""),
            human("HGNC:2", "A2", "a two").with_family("", ""),
            human("HGNC:3", "B1", "b one").with_family("B", "bees"),
            human("HGNC:4", "B2", "b two").with_family("B", "bees"),
        ];
        let sentence = family_grouped_sentence(&orthologs).unwrap();
        assert_eq!(
            sentence.text,
            "is an ortholog of human A1 (a one), A2 (a two), and B1 (b one)"
        );
    }

    #[test]
    fn empty_family_name_is_ungrouped() {
        let orthologs = vec![
            human("HGNC:1", "A1", "a one").with_family("A", ""),
            human("HGNC:2", "A2", "a two").with_family("A", ""),
            human("HGNC:3", "B1", "b one").with_family("B", "bees"),
            human("HGNC:4", "B2", "b two").with_family("B", "bees"),
            human("HGNC:5", "C1", "c one").with_family("C", "cees"),
            human("HGNC:6", "C2", "c two").with_family("C", "cees"),
        ];
        let sentence = family_grouped_sentence(&orthologs).unwrap();
        assert_eq!(
            sentence.text,
            "is an ortholog of human A1 (a one) and A2 (a two) and members of the human \
             B (bees) and C (cees) gene families including B1, B2, and C1"
        );
        assert!(!sentence.text.contains("()"));
    }

    fn popularity_from(
        scores: HashMap<&'static str, u64>,
    ) -> impl Fn(&str) -> GenedescResult<u64> + Sync {
        move |symbol: &str| {
            scores
                .get(symbol)
                .copied()
                .ok_or_else(|| GenedescError::ServiceUnavailable(symbol.to_string()))
        }
    }

    fn classes_from(
        classes: HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> GenedescResult<Option<String>> + Sync {
        move |gene_id: &str| Ok(classes.get(gene_id).map(|c| c.to_string()))
    }

    fn sister_orthologs() -> Vec<OrthologRecord> {
        ["Cbr-unc-1", "Cbr-unc-2", "Cbr-dpy-1", "Cbr-dpy-2", "Cbr-lin-1"]
            .iter()
            .map(|symbol| OrthologRecord::new(&format!("WB:{symbol}"), symbol))
            .collect()
    }

    #[test]
    fn class_grouped_with_classes() {
        let popularity = popularity_from(HashMap::from([
            ("Cbr-unc-1", 50),
            ("Cbr-unc-2", 40),
            ("Cbr-dpy-1", 30),
            ("Cbr-dpy-2", 20),
            ("Cbr-lin-1", 10),
        ]));
        let classes = classes_from(HashMap::from([
            ("WB:Cbr-unc-1", "unc"),
            ("WB:Cbr-unc-2", "unc"),
            ("WB:Cbr-dpy-1", "dpy"),
            ("WB:Cbr-dpy-2", "dpy"),
            ("WB:Cbr-lin-1", "lin"),
        ]));
        let orthologs = sister_orthologs();
        let text = class_grouped_sentence(&orthologs, BRIGGSAE, &popularity, &classes).unwrap();
        assert_eq!(
            text,
            "is an ortholog of C. briggsae Cbr-lin-1 and members of the C. briggsae \
             unc and dpy gene classes including Cbr-unc-1 and Cbr-dpy-1"
        );
        let batched =
            class_grouped_sentence_batched(&orthologs, BRIGGSAE, &popularity, &classes).unwrap();
        assert_eq!(text, batched);
    }

    #[test]
    fn class_left_alone_after_singletons_dissolves() {
        let popularity = popularity_from(HashMap::from([
            ("Cbr-unc-1", 40),
            ("Cbr-unc-2", 30),
            ("Cbr-dpy-1", 20),
            ("Cbr-dpy-2", 15),
            ("Cbr-lin-1", 10),
        ]));
        let classes = classes_from(HashMap::from([
            ("WB:Cbr-unc-1", "unc"),
            ("WB:Cbr-unc-2", "unc"),
            ("WB:Cbr-lin-1", "lin"),
        ]));
        let orthologs = sister_orthologs();
        let text = class_grouped_sentence(&orthologs, BRIGGSAE, &popularity, &classes).unwrap();
        assert_eq!(text, "is an ortholog of C. briggsae Cbr-unc-1, Cbr-unc-2, and Cbr-dpy-1");
        let batched =
            class_grouped_sentence_batched(&orthologs, BRIGGSAE, &popularity, &classes).unwrap();
        assert_eq!(text, batched);
    }

    #[test]
    fn class_grouped_services_unavailable() {
        let popularity = |_: &str| -> GenedescResult<u64> {
            Err(GenedescError::ServiceUnavailable("down".to_string()))
        };
        let classes = |_: &str| -> GenedescResult<Option<String>> {
            Err(GenedescError::ServiceUnavailable("down".to_string()))
        };
        let text =
            class_grouped_sentence(&sister_orthologs(), BRIGGSAE, &popularity, &classes).unwrap();
        assert_eq!(text, "is an ortholog of C. briggsae Cbr-dpy-1, Cbr-dpy-2, and Cbr-lin-1");
    }

    #[test]
    fn single_class_dissolves() {
        let popularity = popularity_from(HashMap::from([("Cbr-unc-1", 5), ("Cbr-unc-2", 4)]));
        let classes =
            classes_from(HashMap::from([("WB:Cbr-unc-1", "unc"), ("WB:Cbr-unc-2", "unc")]));
        let text =
            class_grouped_sentence(&sister_orthologs(), BRIGGSAE, &popularity, &classes).unwrap();
        assert_eq!(text, "is an ortholog of C. briggsae Cbr-unc-1, Cbr-unc-2, and Cbr-dpy-1");
    }

    #[test]
    fn class_grouped_empty() {
        let popularity = |_: &str| -> GenedescResult<u64> { Ok(1) };
        let classes = |_: &str| -> GenedescResult<Option<String>> { Ok(None) };
        assert!(class_grouped_sentence(&[], BRIGGSAE, &popularity, &classes).is_none());
    }

    #[test]
    fn flat_truncates_to_three() {
        let orthologs = vec![
            human("HGNC:4", "D", "delta"),
            human("HGNC:1", "A", "alpha"),
            human("HGNC:3", "C", "gamma"),
            human("HGNC:2", "B", "beta"),
        ];
        let text = flat_species_sentence(&orthologs, OrthologSortKey::Name, false).unwrap();
        assert_eq!(
            text,
            "orthologous to several human genes including A (alpha), B (beta), and D (delta)"
        );

        let text = flat_species_sentence(&orthologs[..2], OrthologSortKey::Symbol, false).unwrap();
        assert_eq!(text, "orthologous to human A (alpha) and D (delta)");

        let text = flat_species_sentence(&orthologs[..2], OrthologSortKey::Symbol, true).unwrap();
        assert!(text.starts_with("orthologous to several human genes including"));
    }

    #[test]
    fn flat_without_names() {
        let orthologs = vec![OrthologRecord::new("HGNC:1", "A")];
        assert_eq!(
            flat_species_sentence(&orthologs, OrthologSortKey::Name, false).unwrap(),
            "orthologous to human A"
        );
        assert!(flat_species_sentence(&[], OrthologSortKey::Name, false).is_none());
    }
}
