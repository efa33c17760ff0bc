use tracing::{debug, trace, warn};

use std::fs;
use std::path::Path;

use crate::term::{TermBuilder, TermId};
use crate::{GenedescError, GenedescResult, Ontology};

type Connections = Vec<(TermId, TermId)>;

/// Reads an OBO file and adds all terms and their `is_a` connections to the ontology
pub(crate) fn read_obo_file<P: AsRef<Path>>(
    filename: P,
    ontology: &mut Ontology,
) -> GenedescResult<()> {
    let display = filename.as_ref().display().to_string();
    let file_content =
        fs::read_to_string(filename).map_err(|_| GenedescError::CannotOpenFile(display))?;
    parse_obo(&file_content, ontology)
}

/// Parses the content of an OBO file
///
/// Only `[Term]` stanzas are considered. Every term needs an `id:` and a
/// `name:` line, terms without a name are skipped. The ancestor cache of the
/// ontology is created at the end.
pub(crate) fn parse_obo(content: &str, ontology: &mut Ontology) -> GenedescResult<()> {
    // stores tuples of Term - Parent
    let mut connections: Connections = Vec::new();

    let content = content.replace("\r\n", "\n");
    for stanza in content.split("\n\n") {
        let stanza = stanza.trim_start();
        if let Some(term) = stanza.strip_prefix("[Term]") {
            let builder = term_from_obo(term)?;
            if !builder.is_complete() {
                warn!("Unable to parse: {}", term);
                continue;
            }
            add_connections(&mut connections, term, &builder)?;
            if let Some(term) = builder.build() {
                ontology.insert_term(term);
            }
        } else if !stanza.is_empty() {
            trace!("Ignoring: {}", stanza.lines().next().unwrap_or_default());
        }
    }

    for (child, parent) in connections {
        if ontology.add_parent(parent.as_str(), child.as_str()).is_err() {
            warn!("Unable to connect {} to missing parent {}", child, parent);
        }
    }

    debug!("Parsed {} terms", ontology.len());
    ontology.create_cache();
    Ok(())
}

fn term_from_obo(term: &str) -> GenedescResult<TermBuilder> {
    let mut builder = TermBuilder::default();
    for line in term.lines() {
        match parse_line(line) {
            Some(("id", value)) => {
                builder.id(value)?;
            }
            Some(("name", value)) => {
                builder.name(value);
            }
            Some(("is_obsolete", value)) => {
                builder.obsolete(value);
            }
            _ => (),
        }
    }
    Ok(builder)
}

fn add_connections(
    connections: &mut Connections,
    term: &str,
    builder: &TermBuilder,
) -> GenedescResult<()> {
    let Some(id) = builder.term_id() else {
        return Ok(());
    };
    for line in term.lines() {
        if let Some(("is_a", value)) = parse_line(line) {
            let parent = value.split_whitespace().next().unwrap_or_default();
            connections.push((id.clone(), TermId::try_from(parent)?));
        }
    }
    Ok(())
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    line.trim()
        .split_once(": ")
        .map(|(key, value)| (key, value.trim()))
}
