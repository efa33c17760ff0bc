//! WormBase orthology files
//!
//! ```text
//! # comment
//! WBGene00000001	aap-1
//! Homo sapiens	HGNC:8975	PIK3R2	Ensembl Compara;OMA;Panther
//! Mus musculus	MGI:97584	Pik3r2	Ensembl Compara;Panther
//! =
//! ```
//!
//! Every block starts with a header line whose first token is the gene id
//! and ends with a `=` line. Gene ids are stored with a `WB:` prefix.
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::orthology::{OrthologCandidate, OrthologyData};
use crate::{GenedescError, GenedescResult};

/// Reads a WormBase orthology file
///
/// # Errors
///
/// - [`GenedescError::CannotOpenFile`] if the file cannot be opened
/// - [`GenedescError::InvalidInput`] if an ortholog row is malformed
pub fn read_orthology_file<P: AsRef<Path>>(file: P) -> GenedescResult<OrthologyData> {
    let filename = file.as_ref().display().to_string();
    let file = File::open(file).map_err(|_| GenedescError::CannotOpenFile(filename))?;
    parse_orthology(file)
}

/// Reads WormBase orthology data from a reader
///
/// A block that is not terminated by `=` at the end of the input is dropped.
///
/// # Errors
///
/// [`GenedescError::InvalidInput`] if an ortholog row is malformed
pub fn parse_orthology<R: Read>(reader: R) -> GenedescResult<OrthologyData> {
    let reader = BufReader::new(reader);
    let mut data = OrthologyData::default();
    let mut block: Vec<(String, OrthologCandidate)> = Vec::new();
    let mut gene_id: Option<String> = None;

    for line in reader.lines() {
        let line = line.map_err(|_| {
            GenedescError::InvalidInput("Invalid data in orthology file".to_string())
        })?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        if line.trim() == "=" {
            match gene_id.take() {
                Some(id) => {
                    for (species, candidate) in block.drain(..) {
                        data.insert(&id, &species, candidate);
                    }
                }
                None => warn!("Orthology block without header"),
            }
            continue;
        }
        match &gene_id {
            None => {
                gene_id = line
                    .split_whitespace()
                    .next()
                    .map(|id| format!("WB:{id}"));
            }
            Some(_) => block.push(ortholog_line(&line)?),
        }
    }
    if gene_id.is_some() {
        warn!("Dropping unterminated orthology block");
    }
    debug!("Parsed orthologs of {} genes", data.len());
    Ok(data)
}

/// Parses a single ortholog row: species, gene id, symbol and methods
fn ortholog_line(line: &str) -> GenedescResult<(String, OrthologCandidate)> {
    let mut cols = line.trim().split('\t');

    let Some(species) = cols.next() else {
        return Err(GenedescError::InvalidInput(line.to_string()));
    };

    let Some(gene_id) = cols.next() else {
        return Err(GenedescError::InvalidInput(line.to_string()));
    };

    let Some(symbol) = cols.next() else {
        return Err(GenedescError::InvalidInput(line.to_string()));
    };

    let methods = cols.next().unwrap_or_default();

    Ok((species.to_string(), OrthologCandidate::new(gene_id, symbol, methods)))
}

#[cfg(test)]
mod test {
    use super::*;

    const DATA: &str = "# WormBase orthology
# generated for testing
WBGene00000001\taap-1
Homo sapiens\tHGNC:8975\tPIK3R2\tEnsembl Compara;OMA;Panther
Homo sapiens\tHGNC:8979\tPIK3R1\tPanther
Mus musculus\tMGI:97584\tPik3r2\tEnsembl Compara;Panther
=
WBGene00000002\taat-1
Homo sapiens\tHGNC:11062\tSLC7A5\tOMA
=
";

    #[test]
    fn parse_blocks() {
        let data = parse_orthology(DATA.as_bytes()).unwrap();
        assert_eq!(data.len(), 2);

        let human = data.orthologs("WB:WBGene00000001", "Homo sapiens");
        assert_eq!(human.len(), 2);
        assert_eq!(human[0].symbol(), "PIK3R2");
        assert_eq!(human[0].method_count(), 3);
        assert_eq!(human[1].method_count(), 1);

        assert_eq!(data.orthologs("WB:WBGene00000001", "Mus musculus").len(), 1);
        assert_eq!(data.orthologs("WB:WBGene00000002", "Homo sapiens").len(), 1);
        assert!(data.orthologs("WBGene00000002", "Homo sapiens").is_empty());
    }

    #[test]
    fn malformed_row() {
        let data = "WBGene00000001\taap-1\nHomo sapiens\n=\n";
        assert!(parse_orthology(data.as_bytes()).is_err());
    }

    #[test]
    fn unterminated_block() {
        let data = "WBGene00000001\taap-1\nHomo sapiens\tHGNC:1\tA\tOMA\n";
        let data = parse_orthology(data.as_bytes()).unwrap();
        assert!(data.is_empty());
    }
}
