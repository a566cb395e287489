//! Family representation
//!
//! The member list of one family, as handed over by the pedigree
//! collaborator. Member order is preserved; it drives every ordered
//! iteration of the layout engine.

use super::person::Person;
use rustc_hash::FxHashMap;

/// A family and its full member list
#[derive(Debug, Clone, Default)]
pub struct Family {
    /// Unique family identifier
    pub family_id: String,
    members: Vec<Person>,
    index: FxHashMap<String, usize>,
}

impl Family {
    /// Create an empty family
    #[must_use]
    pub fn new(family_id: impl Into<String>) -> Self {
        Self {
            family_id: family_id.into(),
            members: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Create a family from its members
    ///
    /// Later persons with an id that is already present are ignored.
    #[must_use]
    pub fn from_persons(family_id: impl Into<String>, persons: Vec<Person>) -> Self {
        let mut family = Self::new(family_id);
        family.add_members(persons);
        family
    }

    /// Append members, skipping ids that are already present
    pub fn add_members(&mut self, persons: impl IntoIterator<Item = Person>) {
        for mut person in persons {
            if self.index.contains_key(&person.person_id) {
                log::debug!(
                    "family {}: ignoring duplicate member {}",
                    self.family_id,
                    person.person_id
                );
                continue;
            }
            person.normalize_parents();
            self.index
                .insert(person.person_id.clone(), self.members.len());
            self.members.push(person);
        }
    }

    /// All members, real and synthesized, in insertion order
    #[must_use]
    pub fn full_members(&self) -> &[Person] {
        &self.members
    }

    /// Members that were not synthesized
    pub fn real_members(&self) -> impl Iterator<Item = &Person> {
        self.members.iter().filter(|person| !person.generated)
    }

    /// Look up a member by id
    #[must_use]
    pub fn get_member(&self, person_id: &str) -> Option<&Person> {
        self.index.get(person_id).map(|&idx| &self.members[idx])
    }

    pub(crate) fn get_member_mut(&mut self, person_id: &str) -> Option<&mut Person> {
        let idx = *self.index.get(person_id)?;
        Some(&mut self.members[idx])
    }

    #[must_use]
    pub fn contains(&self, person_id: &str) -> bool {
        self.index.contains_key(person_id)
    }

    /// Number of members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sub-family holding only the listed members, in family order
    #[must_use]
    pub fn subfamily(&self, person_ids: &[String]) -> Self {
        let persons = self
            .members
            .iter()
            .filter(|person| person_ids.contains(&person.person_id))
            .cloned()
            .collect();
        Self::from_persons(self.family_id.clone(), persons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    #[test]
    fn test_family_creation() {
        let family = Family::from_persons(
            "FAM1",
            vec![
                Person::new("mom", Sex::Female),
                Person::new("dad", Sex::Male),
                Person::new("child", Sex::Male).with_parents(Some("mom"), Some("dad")),
            ],
        );

        assert_eq!(family.family_id, "FAM1");
        assert_eq!(family.len(), 3);
        assert!(family.contains("child"));
        assert_eq!(
            family.get_member("child").and_then(|p| p.mom_id.as_deref()),
            Some("mom")
        );
        assert!(family.get_member("nobody").is_none());
    }

    #[test]
    fn test_add_members_skips_duplicates() {
        let mut family = Family::new("FAM1");
        family.add_members(vec![Person::new("p1", Sex::Male)]);
        family.add_members(vec![
            Person::new("p1", Sex::Female),
            Person::placeholder("p2", Sex::Female),
        ]);

        assert_eq!(family.len(), 2);
        assert_eq!(family.get_member("p1").map(|p| p.sex), Some(Sex::Male));
        assert_eq!(family.real_members().count(), 1);
    }

    #[test]
    fn test_subfamily_keeps_order() {
        let family = Family::from_persons(
            "FAM1",
            vec![
                Person::new("a", Sex::Male),
                Person::new("b", Sex::Female),
                Person::new("c", Sex::Male),
            ],
        );
        let sub = family.subfamily(&["c".to_string(), "a".to_string()]);
        let ids: Vec<_> = sub.full_members().iter().map(|p| p.person_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
