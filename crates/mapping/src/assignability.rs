//! Assignability between opaque class names
//!
//! Class hierarchies are not part of the mapping model. Whoever builds the model supplies
//! an [`IsAssignable`] capability instead: a reflection bridge, a build-time table, or the
//! precomputed [`TypeHierarchy`] index carried by mapping documents.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Answers "can a `candidate` instance be used where `target` is declared?"
pub trait IsAssignable: Send + Sync + fmt::Debug {
    fn is_assignable(&self, candidate: &str, target: &str) -> bool;
}

/// Only identical class names are assignable
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactClassMatch;

impl IsAssignable for ExactClassMatch {
    fn is_assignable(&self, candidate: &str, target: &str) -> bool {
        candidate == target
    }
}

/// Precomputed index of class name to its direct supertypes (superclass and interfaces).
///
/// Assignability is the reflexive, transitive closure of that relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeHierarchy {
    supertypes: BTreeMap<String, Vec<String>>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `class_name` directly extends or implements `supertype`
    pub fn add_supertype(&mut self, class_name: impl Into<String>, supertype: impl Into<String>) {
        let supertypes = self.supertypes.entry(class_name.into()).or_default();
        let supertype = supertype.into();
        if !supertypes.contains(&supertype) {
            supertypes.push(supertype);
        }
    }

    pub fn with_supertype(
        mut self,
        class_name: impl Into<String>,
        supertype: impl Into<String>,
    ) -> Self {
        self.add_supertype(class_name, supertype);
        self
    }

    pub fn direct_supertypes(&self, class_name: &str) -> &[String] {
        self.supertypes
            .get(class_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.supertypes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.supertypes.len()
    }
}

impl IsAssignable for TypeHierarchy {
    fn is_assignable(&self, candidate: &str, target: &str) -> bool {
        if candidate == target {
            return true;
        }

        // Tables are hand-written, so guard against cycles.
        let mut visited = HashSet::new();
        let mut pending = vec![candidate];
        while let Some(class_name) = pending.pop() {
            if !visited.insert(class_name) {
                continue;
            }
            for supertype in self.direct_supertypes(class_name) {
                if supertype == target {
                    return true;
                }
                pending.push(supertype.as_str());
            }
        }
        false
    }
}

/// Adapts a closure into an [`IsAssignable`] capability
pub struct FnAssignable<F>(pub F);

impl<F> IsAssignable for FnAssignable<F>
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn is_assignable(&self, candidate: &str, target: &str) -> bool {
        (self.0)(candidate, target)
    }
}

impl<F> fmt::Debug for FnAssignable<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnAssignable")
    }
}
