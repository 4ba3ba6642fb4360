//! The set of file names a package must contain.

use indexmap::IndexMap;

/// Required file names and whether each has been seen during a scan.
///
/// The names are fixed when the set is built. A scan only flips found
/// flags; names that were not required are ignored. Iteration follows
/// construction order, which keeps missing-file reports stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFiles {
    files: IndexMap<String, bool>,
}

impl RequiredFiles {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: names.into_iter().map(|name| (name.into(), false)).collect(),
        }
    }

    /// Record that `name` was seen. Returns `false` if it is not required.
    pub fn mark_found(&mut self, name: &str) -> bool {
        match self.files.get_mut(name) {
            Some(found) => {
                *found = true;
                true
            }
            None => false,
        }
    }

    /// Names still unfound, in construction order.
    pub fn missing(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|(_, found)| !**found)
            .map(|(name, _)| name.clone())
            .collect()
    }
}
