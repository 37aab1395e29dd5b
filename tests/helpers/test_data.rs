//! Sample activity data shared by the integration tests.

use activity_board::{Activities, Activity};

pub fn activity(name: &str, max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        name: name.to_string(),
        description: format!("{name} description"),
        schedule: format!("{name} schedule"),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn sample_activities() -> Activities {
    [
        activity(
            "Chess Club",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity("Gym Class", 30, &[]),
    ]
    .into_iter()
    .collect()
}
