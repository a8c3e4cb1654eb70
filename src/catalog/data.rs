//! Seed datasets. Read-only for the lifetime of the session.

use crate::models::{Announcement, Club, Event, ItemId};

fn announcement(
    id: ItemId,
    title: &str,
    description: &str,
    category: &str,
    date: &str,
    is_new: bool,
) -> Announcement {
    Announcement {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        is_new,
    }
}

fn club(id: ItemId, name: &str, description: &str, category: &str, members_count: u32) -> Club {
    Club {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        members_count,
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: ItemId,
    title: &str,
    description: &str,
    category: &str,
    location: &str,
    start: &str,
    end: &str,
    capacity: u32,
) -> Event {
    Event {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        location: location.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        capacity,
    }
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        announcement(
            1,
            "Midterm Exam Schedule Released",
            "The midterm examination schedule for all departments has been released. Please check the academic portal for your detailed timetable.",
            "Academic",
            "2025-03-12",
            true,
        ),
        announcement(
            2,
            "Library Opening Hours Extended",
            "The main library will now be open until 9:00 PM on weekdays during exam season.",
            "Academic",
            "2025-03-10",
            false,
        ),
        announcement(
            3,
            "Tech Club Weekly Meetup",
            "Join us this Friday for a hands-on workshop on building web apps.",
            "Club",
            "2025-03-15",
            true,
        ),
        announcement(
            4,
            "Emergency Drill Notification",
            "A campus-wide emergency drill will be conducted next Monday at 10:00 AM.",
            "Emergency",
            "2025-03-18",
            true,
        ),
        announcement(
            5,
            "Cultural Night Event",
            "Experience a night of performances, food, and culture organized by the Student Union.",
            "Event",
            "2025-03-20",
            false,
        ),
    ]
}

pub fn clubs() -> Vec<Club> {
    vec![
        club(
            1,
            "Tech Innovators",
            "A club for students passionate about software, AI, and emerging technologies.",
            "Tech",
            54,
        ),
        club(
            2,
            "Campus Football Club",
            "Join weekly training sessions and represent the campus in friendly matches.",
            "Sports",
            32,
        ),
        club(
            3,
            "Art & Design Collective",
            "A creative community exploring illustration, digital art, and visual storytelling.",
            "Arts",
            27,
        ),
        club(
            4,
            "Community Service Group",
            "Volunteer-based group organizing outreach and community support programs.",
            "Community",
            41,
        ),
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        event(
            1,
            "Tech Club Hackathon",
            "A full-day hackathon focusing on web and mobile apps.",
            "Competition",
            "Building A - Lab 3",
            "2025-05-10T09:00",
            "2025-05-10T17:00",
            50,
        ),
        event(
            2,
            "Career Development Workshop",
            "Learn how to build a portfolio, write a CV, and prepare for interviews.",
            "Workshop",
            "Auditorium 2",
            "2025-05-14T14:00",
            "2025-05-14T16:00",
            100,
        ),
        event(
            3,
            "AI in Education Seminar",
            "A seminar about the impact of AI in learning environments.",
            "Seminar",
            "Main Seminar Hall",
            "2025-05-20T10:00",
            "2025-05-20T12:00",
            80,
        ),
        event(
            4,
            "Cultural Night",
            "An evening of performances and food from different cultures.",
            "Social",
            "Central Courtyard",
            "2025-05-25T18:00",
            "2025-05-25T21:00",
            200,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_ids_are_unique_within_each_catalog() {
        let a: BTreeSet<_> = announcements().iter().map(|x| x.id).collect();
        let c: BTreeSet<_> = clubs().iter().map(|x| x.id).collect();
        let e: BTreeSet<_> = events().iter().map(|x| x.id).collect();
        assert_eq!(a.len(), announcements().len());
        assert_eq!(c.len(), clubs().len());
        assert_eq!(e.len(), events().len());
    }
}
