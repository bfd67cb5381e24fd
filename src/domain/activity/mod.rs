use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub mod service;

/// A participant, identified by the email they signed up with.
///
/// The address is taken as given; no format check is applied.
#[derive(
    derive_more::Display,
    derive_more::Deref,
    derive_more::From,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(transparent)]
pub struct Email(String);

impl From<&str> for Email {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    // not enforced on signup
    pub max_participants: u32,
    #[serde(default)]
    participants: Vec<Email>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, E>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Email>,
    {
        for p in participants {
            self.enroll(p.into());
        }
        self
    }

    pub fn participants(&self) -> &[Email] {
        &self.participants
    }

    pub fn is_signed_up(&self, email: &Email) -> bool {
        self.participants.contains(email)
    }

    /// Adds `email` to the roster. Returns false if it was already there.
    pub fn enroll(&mut self, email: Email) -> bool {
        if self.is_signed_up(&email) {
            return false;
        }
        self.participants.push(email);
        true
    }

    /// Removes `email` from the roster, keeping the order of the others.
    /// Returns false if it was not there.
    pub fn withdraw(&mut self, email: &Email) -> bool {
        let Some(pos) = self.participants.iter().position(|p| p == email) else {
            return false;
        };
        self.participants.remove(pos);
        true
    }

    /// Drops repeated emails, keeping the first occurrence.
    pub(crate) fn dedup_participants(&mut self) {
        let mut seen = HashSet::new();
        self.participants.retain(|p| seen.insert(p.clone()));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn chess() -> Activity {
        Activity::new("Strategy", "Fridays", 12)
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"])
    }

    #[test]
    fn enroll_appends_once() {
        let mut a = chess();
        assert!(a.enroll("new@mergington.edu".into()));
        assert!(!a.enroll("new@mergington.edu".into()));
        assert!(!a.enroll("michael@mergington.edu".into()));
        assert_eq!(a.participants().len(), 3);
        assert_eq!(a.participants()[2].as_str(), "new@mergington.edu");
    }

    #[test]
    fn withdraw_keeps_order() {
        let mut a = chess().with_participants(["emma@mergington.edu"]);
        assert!(a.withdraw(&"daniel@mergington.edu".into()));
        assert!(!a.withdraw(&"daniel@mergington.edu".into()));
        let left: Vec<_> = a.participants().iter().map(|p| p.as_str()).collect();
        assert_eq!(left, ["michael@mergington.edu", "emma@mergington.edu"]);
    }

    #[test]
    fn capacity_is_not_enforced() {
        let mut a = Activity::new("Tiny", "Never", 1).with_participants(["a@x.edu"]);
        assert!(a.enroll("b@x.edu".into()));
        assert_eq!(a.participants().len(), 2);
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(chess()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "Strategy",
                "schedule": "Fridays",
                "max_participants": 12,
                "participants": ["michael@mergington.edu", "daniel@mergington.edu"],
            })
        );
    }

    #[test]
    fn dedup_keeps_first() {
        let mut a: Activity = serde_json::from_value(serde_json::json!({
            "description": "d",
            "schedule": "s",
            "max_participants": 3,
            "participants": ["a@x.edu", "b@x.edu", "a@x.edu"],
        }))
        .unwrap();
        a.dedup_participants();
        assert_eq!(a.participants(), &[Email::from("a@x.edu"), Email::from("b@x.edu")]);
    }
}
