use std::collections::{HashMap, HashSet};

use crate::error::GraphError;

/// A person record. `works` holds the identities of every work they are credited in.
#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub birth: Option<i32>,
    pub works: HashSet<String>,
}

/// A work record. `credits` holds the identities of every person credited in it.
#[derive(Debug, Clone)]
pub struct Work {
    pub title: String,
    pub year: Option<i32>,
    pub credits: HashSet<String>,
}

/// In-memory collaboration graph: people, works, and the membership relation between them.
///
/// Membership is stored on both sides: `people[p].works` contains w iff
/// `works[w].credits` contains p. `add_credit` is the only way to populate it,
/// so the two sides cannot drift apart.
///
/// Built once by a loader, then shared read-only by every search.
#[derive(Debug)]
pub struct GraphStore {
    people: HashMap<String, Person>,
    works: HashMap<String, Work>,
    /// Lowercased display name → identities sharing that name.
    name_index: HashMap<String, HashSet<String>>,
    credit_count: usize,
}

impl GraphStore {
    pub fn new() -> Self {
        Self {
            people: HashMap::new(),
            works: HashMap::new(),
            name_index: HashMap::new(),
            credit_count: 0,
        }
    }

    /// Pre-allocate for a known dataset size.
    pub fn with_capacity(person_count: usize, work_count: usize) -> Self {
        Self {
            people: HashMap::with_capacity(person_count),
            works: HashMap::with_capacity(work_count),
            name_index: HashMap::with_capacity(person_count),
            credit_count: 0,
        }
    }

    /// Register a person. Identities must be unique.
    pub fn add_person(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        birth: Option<i32>,
    ) -> Result<(), GraphError> {
        let id = id.into();
        if self.people.contains_key(&id) {
            return Err(GraphError::DuplicatePerson(id));
        }
        let name = name.into();
        self.name_index
            .entry(name.to_lowercase())
            .or_default()
            .insert(id.clone());
        self.people.insert(
            id,
            Person {
                name,
                birth,
                works: HashSet::new(),
            },
        );
        Ok(())
    }

    /// Register a work. Identities must be unique.
    pub fn add_work(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        year: Option<i32>,
    ) -> Result<(), GraphError> {
        let id = id.into();
        if self.works.contains_key(&id) {
            return Err(GraphError::DuplicateWork(id));
        }
        self.works.insert(
            id,
            Work {
                title: title.into(),
                year,
                credits: HashSet::new(),
            },
        );
        Ok(())
    }

    /// Credit a person in a work, updating both sides of the membership relation.
    ///
    /// Both records must already exist. Crediting the same pair twice is a no-op.
    pub fn add_credit(&mut self, person_id: &str, work_id: &str) -> Result<(), GraphError> {
        let work = self
            .works
            .get_mut(work_id)
            .ok_or_else(|| GraphError::UnknownWork(work_id.to_string()))?;
        let person = self
            .people
            .get_mut(person_id)
            .ok_or_else(|| GraphError::UnknownPerson(person_id.to_string()))?;

        if person.works.insert(work_id.to_string()) {
            work.credits.insert(person_id.to_string());
            self.credit_count += 1;
        }
        Ok(())
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn work(&self, id: &str) -> Option<&Work> {
        self.works.get(id)
    }

    /// Every identity whose display name matches `name`, ignoring case.
    ///
    /// Sorted so that callers listing candidates present them in a stable order.
    pub fn person_ids_for_name(&self, name: &str) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .name_index
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    /// True iff both `a` and `b` are credited in `work_id`.
    pub fn credited_together(&self, work_id: &str, a: &str, b: &str) -> bool {
        self.works
            .get(work_id)
            .is_some_and(|w| w.credits.contains(a) && w.credits.contains(b))
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn work_count(&self) -> usize {
        self.works.len()
    }

    /// Number of distinct (person, work) credits.
    pub fn credit_count(&self) -> usize {
        self.credit_count
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let people_mem: usize = self
            .people
            .iter()
            .map(|(id, p)| id.len() + p.name.len() + size_of::<Person>() + 40)
            .sum();
        let works_mem: usize = self
            .works
            .iter()
            .map(|(id, w)| id.len() + w.title.len() + size_of::<Work>() + 40)
            .sum();
        // Each credit is stored twice, once per side, as an owned String.
        let credits_mem = self.credit_count * 2 * (size_of::<String>() + 16);
        let index_mem = self.name_index.len() * 80;

        people_mem + works_mem + credits_mem + index_mem
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_is_bidirectional() {
        let mut g = GraphStore::new();
        g.add_person("p1", "Kevin Bacon", Some(1958)).unwrap();
        g.add_work("m1", "Apollo 13", Some(1995)).unwrap();
        g.add_credit("p1", "m1").unwrap();

        assert!(g.person("p1").unwrap().works.contains("m1"));
        assert!(g.work("m1").unwrap().credits.contains("p1"));
        assert_eq!(g.credit_count(), 1);
    }

    #[test]
    fn test_duplicate_credit_is_noop() {
        let mut g = GraphStore::new();
        g.add_person("p1", "A", None).unwrap();
        g.add_work("m1", "W", None).unwrap();
        g.add_credit("p1", "m1").unwrap();
        g.add_credit("p1", "m1").unwrap();
        assert_eq!(g.credit_count(), 1);
        assert_eq!(g.work("m1").unwrap().credits.len(), 1);
    }

    #[test]
    fn test_dangling_credit_rejected() {
        let mut g = GraphStore::new();
        g.add_person("p1", "A", None).unwrap();
        g.add_work("m1", "W", None).unwrap();

        assert_eq!(
            g.add_credit("ghost", "m1"),
            Err(GraphError::UnknownPerson("ghost".into()))
        );
        assert_eq!(
            g.add_credit("p1", "ghost"),
            Err(GraphError::UnknownWork("ghost".into()))
        );
        // Neither side was touched
        assert!(g.person("p1").unwrap().works.is_empty());
        assert!(g.work("m1").unwrap().credits.is_empty());
        assert_eq!(g.credit_count(), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut g = GraphStore::new();
        g.add_person("p1", "A", None).unwrap();
        g.add_work("m1", "W", None).unwrap();
        assert_eq!(
            g.add_person("p1", "B", None),
            Err(GraphError::DuplicatePerson("p1".into()))
        );
        assert_eq!(
            g.add_work("m1", "X", None),
            Err(GraphError::DuplicateWork("m1".into()))
        );
        assert_eq!(g.person("p1").unwrap().name, "A");
    }

    #[test]
    fn test_name_lookup_case_insensitive() {
        let mut g = GraphStore::new();
        g.add_person("102", "Kevin Bacon", Some(1958)).unwrap();
        assert_eq!(g.person_ids_for_name("kevin bacon"), vec!["102"]);
        assert_eq!(g.person_ids_for_name("KEVIN BACON"), vec!["102"]);
        assert!(g.person_ids_for_name("Kevin").is_empty());
    }

    #[test]
    fn test_name_lookup_duplicates_sorted() {
        let mut g = GraphStore::new();
        g.add_person("9", "Emma Watson", Some(1990)).unwrap();
        g.add_person("10", "Emma Watson", Some(1970)).unwrap();
        g.add_person("3", "emma watson", None).unwrap();
        assert_eq!(g.person_ids_for_name("Emma Watson"), vec!["10", "3", "9"]);
    }

    #[test]
    fn test_credited_together() {
        let mut g = GraphStore::new();
        g.add_person("a", "A", None).unwrap();
        g.add_person("b", "B", None).unwrap();
        g.add_person("c", "C", None).unwrap();
        g.add_work("w", "W", None).unwrap();
        g.add_credit("a", "w").unwrap();
        g.add_credit("b", "w").unwrap();
        assert!(g.credited_together("w", "a", "b"));
        assert!(!g.credited_together("w", "a", "c"));
        assert!(!g.credited_together("missing", "a", "b"));
    }

    #[test]
    fn test_counts_and_memory() {
        let mut g = GraphStore::with_capacity(3, 1);
        assert_eq!(g.memory_usage(), 0);
        for id in ["a", "b", "c"] {
            g.add_person(id, id, None).unwrap();
        }
        g.add_work("w", "W", None).unwrap();
        for id in ["a", "b", "c"] {
            g.add_credit(id, "w").unwrap();
        }
        assert_eq!(g.person_count(), 3);
        assert_eq!(g.work_count(), 1);
        assert_eq!(g.credit_count(), 3);
        assert!(g.memory_usage() > 0);
    }
}
