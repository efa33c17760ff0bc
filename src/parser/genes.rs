//! WormBase `geneIDs` files
//!
//! ```text
//! 6239,WBGene00000001,aap-1,Y110A7A.10,Live
//! 6239,WBGene00000002,,F27C8.1,Live
//! 6239,WBGene00000003,aat-2,F07C3.7,Dead
//! ```
//!
//! Columns are taxon, gene id, locus name, sequence name and status.
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::{GenedescError, GenedescResult};

/// A gene as listed in a WormBase `geneIDs` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gene {
    /// The gene id with `WB:` prefix, e.g. `WB:WBGene00000001`
    pub id: String,
    /// The locus name, or the sequence name if the gene has no locus name
    pub name: String,
    /// `true` if the gene status is `Dead`
    pub is_dead: bool,
}

/// Reads all genes from a `geneIDs` file
///
/// Dead genes are skipped unless `include_dead` is set
///
/// # Errors
///
/// - [`GenedescError::CannotOpenFile`] if the file cannot be opened
/// - [`GenedescError::InvalidInput`] if a line is malformed
pub fn read_gene_file<P: AsRef<Path>>(file: P, include_dead: bool) -> GenedescResult<Vec<Gene>> {
    let filename = file.as_ref().display().to_string();
    let file = File::open(file).map_err(|_| GenedescError::CannotOpenFile(filename))?;
    parse_genes(file, include_dead)
}

/// Reads all genes from `geneIDs` formatted data
///
/// # Errors
///
/// [`GenedescError::InvalidInput`] if a line is malformed
///
/// # Examples
///
/// ```
/// use genedesc::parser::genes::parse_genes;
///
/// let data = "6239,WBGene00000001,aap-1,Y110A7A.10,Live\n6239,WBGene00000003,,F07C3.7,Dead\n";
/// let genes = parse_genes(data.as_bytes(), true).unwrap();
/// assert_eq!(genes[0].name, "aap-1");
/// assert_eq!(genes[1].name, "F07C3.7");
/// assert!(genes[1].is_dead);
///
/// assert_eq!(parse_genes(data.as_bytes(), false).unwrap().len(), 1);
/// ```
pub fn parse_genes<R: Read>(reader: R, include_dead: bool) -> GenedescResult<Vec<Gene>> {
    let reader = BufReader::new(reader);
    let mut genes = Vec::new();
    for line in reader.lines() {
        let line = line
            .map_err(|_| GenedescError::InvalidInput("Invalid data in gene file".to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        let gene = gene_line(&line)?;
        if include_dead || !gene.is_dead {
            genes.push(gene);
        }
    }
    debug!("Parsed {} genes", genes.len());
    Ok(genes)
}

fn gene_line(line: &str) -> GenedescResult<Gene> {
    let cols: Vec<&str> = line.trim().split(',').collect();
    let [_taxon, id, locus, sequence, status, ..] = cols.as_slice() else {
        return Err(GenedescError::InvalidInput(line.to_string()));
    };
    let name = if locus.is_empty() { sequence } else { locus };
    Ok(Gene {
        id: format!("WB:{id}"),
        name: name.to_string(),
        is_dead: *status == "Dead",
    })
}
