use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Activity {
    // Key of the registry; rendered as the map key, not inside the record.
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: &str,
        description: &str,
        schedule: &str,
        max_participants: usize,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}

/// Activities keyed by name, serialized as a JSON object in registry order.
#[derive(Debug, Clone, Default)]
pub struct ActivityMap(pub Vec<Activity>);

impl ActivityMap {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }
}

impl Serialize for ActivityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_serializes_in_insertion_order() {
        let map = ActivityMap(vec![
            Activity::new("Zoo Club", "z", "Mondays", 3, &[]),
            Activity::new("Art Studio", "a", "Tuesdays", 2, &["lucas@mergington.edu"]),
        ]);

        let json = serde_json::to_string(&map).unwrap();
        assert!(json.find("Zoo Club").unwrap() < json.find("Art Studio").unwrap());
        assert!(!json.contains("\"name\""));
        assert!(json.contains("\"participants\":[\"lucas@mergington.edu\"]"));
        assert_eq!(map.get("Art Studio").map(|a| a.max_participants), Some(2));
        assert!(map.get("art studio").is_none());
    }

    #[test]
    fn full_when_roster_reaches_capacity() {
        let mut activity = Activity::new("Tiny", "t", "Fridays", 1, &[]);
        assert!(!activity.is_full());
        activity.participants.push("a@mergington.edu".to_string());
        assert!(activity.is_full());
        assert!(activity.is_signed_up("a@mergington.edu"));
    }
}
