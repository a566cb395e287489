//! Family member representation
//!
//! A `Person` is the family collaborator's record of one member. The layout
//! engine only reads it, except for the placeholder parents it synthesizes.

use super::types::Sex;
use serde::{Deserialize, Serialize};

/// Parent ids that mean "no parent recorded"
const MISSING_PARENT_IDS: [&str; 2] = ["", "0"];

fn normalize_parent_id(id: Option<String>) -> Option<String> {
    id.filter(|id| !MISSING_PARENT_IDS.contains(&id.trim()))
}

/// One member of a family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Identifier, unique within the family
    pub person_id: String,
    /// Identifier of the mother, if known
    #[serde(default)]
    pub mom_id: Option<String>,
    /// Identifier of the father, if known
    #[serde(default)]
    pub dad_id: Option<String>,
    /// Sex of the member
    #[serde(default)]
    pub sex: Sex,
    /// Whether this is a synthesized placeholder rather than a real member
    #[serde(default)]
    pub generated: bool,
}

impl Person {
    /// Create a person without parents
    #[must_use]
    pub fn new(person_id: impl Into<String>, sex: Sex) -> Self {
        Self {
            person_id: person_id.into(),
            mom_id: None,
            dad_id: None,
            sex,
            generated: false,
        }
    }

    /// Create a synthesized placeholder person
    #[must_use]
    pub fn placeholder(person_id: impl Into<String>, sex: Sex) -> Self {
        Self {
            generated: true,
            ..Self::new(person_id, sex)
        }
    }

    /// Set the parents of this person; `""` and `"0"` mean no parent
    #[must_use]
    pub fn with_parents(mut self, mom_id: Option<&str>, dad_id: Option<&str>) -> Self {
        self.mom_id = normalize_parent_id(mom_id.map(str::to_string));
        self.dad_id = normalize_parent_id(dad_id.map(str::to_string));
        self
    }

    /// Set the mother of this person
    #[must_use]
    pub fn with_mom(mut self, mom_id: &str) -> Self {
        self.mom_id = normalize_parent_id(Some(mom_id.to_string()));
        self
    }

    /// Set the father of this person
    #[must_use]
    pub fn with_dad(mut self, dad_id: &str) -> Self {
        self.dad_id = normalize_parent_id(Some(dad_id.to_string()));
        self
    }

    /// Drop parent ids that mean "no parent", e.g. after deserialization
    pub fn normalize_parents(&mut self) {
        self.mom_id = normalize_parent_id(self.mom_id.take());
        self.dad_id = normalize_parent_id(self.dad_id.take());
    }

    #[must_use]
    pub const fn has_mom(&self) -> bool {
        self.mom_id.is_some()
    }

    #[must_use]
    pub const fn has_dad(&self) -> bool {
        self.dad_id.is_some()
    }

    #[must_use]
    pub const fn has_parent(&self) -> bool {
        self.has_mom() || self.has_dad()
    }

    #[must_use]
    pub const fn has_both_parents(&self) -> bool {
        self.has_mom() && self.has_dad()
    }

    /// Number of recorded parent links
    #[must_use]
    pub fn parent_count(&self) -> usize {
        usize::from(self.has_mom()) + usize::from(self.has_dad())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_normalization() {
        let person = Person::new("p1", Sex::Male).with_parents(Some("0"), Some(""));
        assert!(!person.has_parent());
        assert_eq!(person.parent_count(), 0);

        let person = Person::new("p1", Sex::Male).with_parents(Some("mom"), Some("0"));
        assert!(person.has_mom());
        assert!(!person.has_dad());
        assert_eq!(person.parent_count(), 1);
    }

    #[test]
    fn test_placeholder() {
        let person = Person::placeholder("dad.mother", Sex::Female);
        assert!(person.generated);
        assert_eq!(person.sex, Sex::Female);
        assert!(!person.has_parent());
    }

    #[test]
    fn test_deserialize_defaults() {
        let person: Person =
            serde_json::from_str(r#"{"person_id": "c1", "mom_id": "m", "dad_id": "d"}"#)
                .unwrap();
        assert!(person.has_both_parents());
        assert_eq!(person.sex, Sex::Unspecified);
        assert!(!person.generated);
    }
}
