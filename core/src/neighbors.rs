use std::collections::HashSet;

use crate::graph::GraphStore;

/// Read-only adjacency view the search engine runs over.
///
/// Implementations must be fully populated and internally consistent before a
/// search starts; the engine does not validate them.
pub trait Collaborations {
    fn contains_person(&self, person_id: &str) -> bool;

    /// Distinct (work, person) pairs: for every work `person_id` appears in,
    /// every other person credited in that work. Unknown persons yield an empty set.
    ///
    /// Iteration order is unspecified.
    fn neighbors<'g>(&'g self, person_id: &str) -> HashSet<(&'g str, &'g str)>;
}

impl Collaborations for GraphStore {
    fn contains_person(&self, person_id: &str) -> bool {
        self.person(person_id).is_some()
    }

    fn neighbors<'g>(&'g self, person_id: &str) -> HashSet<(&'g str, &'g str)> {
        let Some(person) = self.person(person_id) else {
            return HashSet::new();
        };

        let mut pairs = HashSet::new();
        for work_id in &person.works {
            let Some(work) = self.work(work_id) else { continue };
            for co_star in &work.credits {
                if co_star != person_id {
                    pairs.insert((work_id.as_str(), co_star.as_str()));
                }
            }
        }
        pairs
    }
}
