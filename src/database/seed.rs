use crate::models::Activity;

/// Activities the registry starts with on every process start.
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        Activity::new(
            "Basketball Team",
            "Competitive basketball training and games",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["alex@mergington.edu"],
        ),
        Activity::new(
            "Tennis Club",
            "Learn tennis skills and participate in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
            10,
            &["james@mergington.edu", "sarah@mergington.edu"],
        ),
        Activity::new(
            "Art Studio",
            "Explore painting, drawing, and mixed media techniques",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
            &["lucas@mergington.edu"],
        ),
        Activity::new(
            "Theater Production",
            "Perform in school plays and musicals",
            "Thursdays and Saturdays, 4:00 PM - 6:00 PM",
            25,
            &["avery@mergington.edu", "jordan@mergington.edu"],
        ),
        Activity::new(
            "Debate Club",
            "Develop argumentation and public speaking skills",
            "Mondays, 3:30 PM - 4:30 PM",
            16,
            &["grace@mergington.edu"],
        ),
        Activity::new(
            "Science Lab",
            "Conduct experiments and explore advanced scientific concepts",
            "Fridays, 4:00 PM - 5:30 PM",
            14,
            &["noah@mergington.edu", "mia@mergington.edu"],
        ),
    ]
}
