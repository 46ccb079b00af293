use feedbox_core::fixture::seed_records;
use feedbox_core::models::feedback::FeedbackStatus;
use feedbox_core::models::filter::{FilterCriteria, StatusFilter};
use feedbox_core::{derive, workflow};

#[test]
fn set_status_replaces_only_the_target() {
    let records = seed_records();
    let next = workflow::set_status(&records, "1", FeedbackStatus::Resolved);

    assert_eq!(next.len(), records.len());
    assert_eq!(next[0].status, FeedbackStatus::Resolved);
    assert_eq!(next[0].message, records[0].message);
    assert_eq!(next[1..], records[1..]);
    // Input untouched.
    assert_eq!(records[0].status, FeedbackStatus::Pending);
}

#[test]
fn set_status_is_idempotent() {
    let records = seed_records();
    let once = workflow::set_status(&records, "3", FeedbackStatus::Resolved);
    let twice = workflow::set_status(&once, "3", FeedbackStatus::Resolved);
    assert_eq!(once, twice);
}

#[test]
fn unknown_id_is_a_noop() {
    let records = seed_records();
    assert_eq!(
        workflow::set_status(&records, "missing", FeedbackStatus::Resolved),
        records
    );
    assert_eq!(workflow::toggle_status(&records, "missing"), records);
}

#[test]
fn resolved_record_leaves_pending_filter() {
    let records = seed_records();
    let pending = FilterCriteria {
        status: StatusFilter::Pending,
        ..FilterCriteria::default()
    };
    assert!(derive::filter(&records, &pending).iter().any(|r| r.id == "1"));

    let next = workflow::set_status(&records, "1", FeedbackStatus::Resolved);
    assert!(!derive::filter(&next, &pending).iter().any(|r| r.id == "1"));
}

#[test]
fn toggle_flips_both_ways() {
    let records = seed_records();
    let flipped = workflow::toggle_status(&records, "2");
    assert_eq!(flipped[1].status, FeedbackStatus::Pending);

    let back = workflow::toggle_status(&flipped, "2");
    assert_eq!(back, records);
}

#[test]
fn status_round_trips_through_strings() {
    for status in [FeedbackStatus::Pending, FeedbackStatus::Resolved] {
        assert_eq!(status.as_str().parse::<FeedbackStatus>().unwrap(), status);
        assert_eq!(status.toggled().toggled(), status);
    }
    assert!("closed".parse::<FeedbackStatus>().is_err());
}
