//! Activity data as served by `GET /activities`.
//!
//! The endpoint returns a JSON object keyed by activity name. Key order is
//! the display order, so the collection is decoded with its own visitor
//! instead of going through a hash map.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Value half of one `name -> details` entry on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ActivityDetails {
    #[serde(default)]
    description: String,
    #[serde(default)]
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in server order.
    pub participants: Vec<String>,
}

impl Activity {
    fn from_details(name: String, details: ActivityDetails) -> Self {
        Self {
            name,
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Capacity minus roster size. Negative when the roster is over capacity.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Ordered activity collection, unique by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Activities(Vec<Activity>);

impl Activities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Inserts `activity`, replacing an entry with the same name in place.
    pub fn upsert(&mut self, activity: Activity) {
        match self.0.iter_mut().find(|a| a.name == activity.name) {
            Some(slot) => *slot = activity,
            None => self.0.push(activity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|a| a.name.clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Activity> for Activities {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut out = Activities::new();
        for activity in iter {
            out.upsert(activity);
        }
        out
    }
}

impl<'a> IntoIterator for &'a Activities {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct ActivitiesVisitor;

impl<'de> Visitor<'de> for ActivitiesVisitor {
    type Value = Activities;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping activity names to activity details")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let mut out = Activities::new();
        while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
            out.upsert(Activity::from_details(name, details));
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ActivitiesVisitor)
    }
}
