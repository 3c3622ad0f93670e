use crate::core::{Activity, Directory};

/// 內建的 Mergington High School 課外活動資料
pub fn sample_directory() -> Directory {
    let mut directory = Directory::new();

    directory.insert(
        "Chess Club",
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(&[
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "james@mergington.edu",
        ]),
    );
    directory.insert(
        "Programming Class",
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    directory.insert(
        "Gym Class",
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
    );
    directory.insert(
        "Soccer Team",
        Activity::new(
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(&["liam@mergington.edu"]),
    );
    directory.insert(
        "Basketball Team",
        Activity::new(
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(&["ava@mergington.edu"]),
    );
    directory.insert(
        "Art Club",
        Activity::new(
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(&["amelia@mergington.edu"]),
    );
    directory.insert(
        "Drama Club",
        Activity::new(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
        )
        .with_participants(&["ella@mergington.edu", "scarlett@mergington.edu"]),
    );
    directory.insert(
        "Math Club",
        Activity::new(
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(&["benjamin@mergington.edu"]),
    );
    directory.insert(
        "Debate Team",
        Activity::new(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(&["charlotte@mergington.edu", "henry@mergington.edu"]),
    );

    directory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_directory_contents() {
        let directory = sample_directory();

        assert_eq!(directory.len(), 9);
        let chess = directory.get("Chess Club").unwrap();
        assert!(chess.has_participant("james@mergington.edu"));
        assert_eq!(chess.max_participants, 12);
    }

    #[test]
    fn test_sample_directory_is_within_capacity() {
        for (name, activity) in sample_directory().iter() {
            assert!(
                activity.participants.len() <= activity.max_participants as usize,
                "{} is over capacity",
                name
            );
        }
    }
}
