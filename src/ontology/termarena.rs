use crate::term::{OntologyTerm, TermId};
use crate::DEFAULT_NUM_TERMS;
use std::collections::hash_map::Values;
use std::collections::HashMap;

pub(crate) struct Arena {
    terms: HashMap<TermId, OntologyTerm>,
}

impl Arena {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn insert(&mut self, term: OntologyTerm) {
        self.terms.insert(term.id().clone(), term);
    }

    pub fn get(&self, id: &str) -> Option<&OntologyTerm> {
        self.terms.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut OntologyTerm> {
        self.terms.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.terms.contains_key(id)
    }

    pub fn values(&self) -> Values<'_, TermId, OntologyTerm> {
        self.terms.values()
    }

    pub fn keys(&self) -> Vec<TermId> {
        self.terms.keys().cloned().collect()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            terms: HashMap::with_capacity(DEFAULT_NUM_TERMS),
        }
    }
}
