//! Seed dataset loaded at startup in place of a real backend.

use crate::models::feedback::{Category, FeedbackRecord, FeedbackStatus};

struct Seed {
    id: &'static str,
    category: Category,
    message: &'static str,
    submitted_at: jiff::Timestamp,
    status: FeedbackStatus,
}

const SEEDS: [Seed; 3] = [
    Seed {
        id: "1",
        category: Category::Academics,
        message: "The physics lab equipment needs maintenance. Many instruments aren't working properly.",
        submitted_at: jiff::Timestamp::constant(1698849000, 0), // 2023-11-01T14:30:00Z
        status: FeedbackStatus::Pending,
    },
    Seed {
        id: "2",
        category: Category::Hostel,
        message: "There have been frequent water shortages in Block C for the past week.",
        submitted_at: jiff::Timestamp::constant(1699002900, 0), // 2023-11-03T09:15:00Z
        status: FeedbackStatus::Resolved,
    },
    Seed {
        id: "3",
        category: Category::Facilities,
        message: "The library's air conditioning system is too cold and makes it uncomfortable to study for long periods.",
        submitted_at: jiff::Timestamp::constant(1699116300, 0), // 2023-11-04T16:45:00Z
        status: FeedbackStatus::Pending,
    },
];

pub fn seed_records() -> Vec<FeedbackRecord> {
    SEEDS
        .iter()
        .map(|seed| FeedbackRecord {
            id: seed.id.to_string(),
            category: seed.category,
            message: seed.message.to_string(),
            submitted_at: seed.submitted_at,
            status: seed.status,
        })
        .collect()
}
