//! Gene association files (GAF 2.x)
//!
//! ```text
//! !gaf-version: 2.2
//! WB	WBGene00000001	aap-1		GO:0005942	GO_REF:0000002	IEA	InterPro:IPR001720	C	...
//! ```
//!
//! Only a few columns are used:
//!
//! | column | content |
//! |--------|---------|
//! | 1 | database, prefixed to the gene id |
//! | 2 | gene id |
//! | 4 | qualifier |
//! | 5 | term id |
//! | 6 | reference |
//! | 7 | evidence code |
//! | 9 | aspect |
//! | 16 | annotation extension (optional) |
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::annotations::{Annotation, Aspect};
use crate::term::TermId;
use crate::{GenedescError, GenedescResult};

/// Reads all annotations from a GAF file
///
/// # Errors
///
/// - [`GenedescError::CannotOpenFile`] if the file cannot be opened
/// - [`GenedescError::InvalidInput`] if a line is malformed
pub fn read_gaf_file<P: AsRef<Path>>(file: P) -> GenedescResult<Vec<Annotation>> {
    let filename = file.as_ref().display().to_string();
    let file = File::open(file).map_err(|_| GenedescError::CannotOpenFile(filename))?;
    parse_gaf(file)
}

/// Reads all annotations from anything that provides GAF formatted data
///
/// # Errors
///
/// [`GenedescError::InvalidInput`] if a line is malformed
///
/// # Examples
///
/// ```
/// use genedesc::parser::gaf::parse_gaf;
/// use genedesc::Aspect;
///
/// let data = "!gaf-version: 2.2\n\
///             WB\tWBGene00000001\taap-1\t\tGO:0005942\tGO_REF:0000002\tIEA\t\tC\n";
/// let annotations = parse_gaf(data.as_bytes()).unwrap();
/// assert_eq!(annotations.len(), 1);
/// assert_eq!(annotations[0].gene_id, "WB:WBGene00000001");
/// assert_eq!(annotations[0].aspect, Aspect::CellularComponent);
/// ```
pub fn parse_gaf<R: Read>(reader: R) -> GenedescResult<Vec<Annotation>> {
    let reader = BufReader::new(reader);
    let mut annotations = Vec::new();
    for line in reader.lines() {
        let line =
            line.map_err(|_| GenedescError::InvalidInput("Invalid data in GAF file".to_string()))?;
        if line.starts_with('!') || line.trim().is_empty() {
            continue;
        }
        annotations.push(gaf_line(&line)?);
    }
    debug!("Parsed {} GAF annotations", annotations.len());
    Ok(annotations)
}

/// Parses a single, non-comment line of a GAF file
fn gaf_line(line: &str) -> GenedescResult<Annotation> {
    let cols: Vec<&str> = line.trim_end_matches(['\n', '\r']).split('\t').collect();
    if cols.len() < 9 {
        return Err(GenedescError::InvalidInput(line.to_string()));
    }
    let aspect = match cols[8] {
        "F" => Aspect::MolecularFunction,
        "P" => Aspect::BiologicalProcess,
        "C" => Aspect::CellularComponent,
        _ => return Err(GenedescError::InvalidInput(line.to_string())),
    };

    Ok(Annotation {
        gene_id: format!("{}:{}", cols[0], cols[1]),
        term_id: TermId::try_from(cols[4])?,
        qualifier: cols[3].to_string(),
        reference: cols[5].to_string(),
        evidence_code: cols[6].to_string(),
        aspect,
        annotation_extension: cols.get(15).copied().unwrap_or_default().to_string(),
        term_label: String::new(),
        is_obsolete: false,
    })
}
