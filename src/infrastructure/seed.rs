use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::repo_activity::{Activities, ActivityStore};
use crate::domain::activity::Activity;

/// The activities the school offers when no seed file is configured.
pub fn builtin() -> Activities {
    let list = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
        ),
    ];

    list.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Parses a seed document: a JSON object of activity name to activity, in the
/// same shape `GET /activities` returns.
pub fn parse(json: &str) -> Result<Activities> {
    let mut activities: Activities =
        serde_json::from_str(json).context("malformed activity seed")?;
    for activity in activities.values_mut() {
        activity.dedup_participants();
    }
    Ok(activities)
}

/// Builds the registry from `seed_file`, or from [`builtin`] when absent.
pub async fn load(seed_file: Option<&Path>) -> Result<ActivityStore> {
    let activities = match seed_file {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("read activity seed: {}", path.display()))?;
            let activities = parse(&json)?;
            info!(?path, count = activities.len(), "activities seeded from file");
            activities
        }
        None => {
            let activities = builtin();
            info!(count = activities.len(), "activities seeded from built-in list");
            activities
        }
    };

    Ok(ActivityStore::new(activities))
}
