//! Utility structs and methods
use std::collections::HashMap;
use std::hash::Hash;

/// Concatenates words with commas and a final oxford comma
///
/// One or two words are joined by `" and "`, three or more words are
/// separated by commas with `", and "` before the last word.
///
/// # Examples
///
/// ```
/// use genedesc::concatenate_words_with_oxford_comma;
///
/// assert_eq!(concatenate_words_with_oxford_comma(&["a"]), "a");
/// assert_eq!(concatenate_words_with_oxford_comma(&["a", "b"]), "a and b");
/// assert_eq!(concatenate_words_with_oxford_comma(&["a", "b", "c"]), "a, b, and c");
/// ```
pub fn concatenate_words_with_oxford_comma<S: AsRef<str>>(words: &[S]) -> String {
    match words {
        [] => String::new(),
        [single] => single.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Groups values by key while remembering the order in which keys were first seen
///
/// Iteration yields the groups in key-insertion order, and the values of
/// each group in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct OrderedGroups<K, V> {
    index: HashMap<K, usize>,
    groups: Vec<(K, Vec<V>)>,
}

impl<K, V> Default for OrderedGroups<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> OrderedGroups<K, V> {
    pub fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(idx) => self.groups[*idx].1.push(value),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![value]));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn into_groups(self) -> Vec<(K, Vec<V>)> {
        self.groups
    }
}

/// Removes duplicates while keeping the first occurrence of every item
pub(crate) fn dedup_stable<T: Hash + Eq + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Returns `s` without its last `n` chars
pub(crate) fn strip_last_chars(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((idx, _)) if n > 0 => &s[..idx],
        Some(_) => s,
        None => "",
    }
}
