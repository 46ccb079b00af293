use feedbox_core::derive::{categories, derive_view, filter, resolution_rate, stats};
use feedbox_core::fixture::seed_records;
use feedbox_core::models::feedback::{Category, FeedbackRecord, FeedbackStatus};
use feedbox_core::models::filter::{CategoryFilter, FilterCriteria, StatusFilter};

fn record(id: &str, status: FeedbackStatus, category: Category, message: &str) -> FeedbackRecord {
    FeedbackRecord {
        id: id.to_string(),
        category,
        message: message.to_string(),
        submitted_at: "2024-02-01T08:00:00Z".parse().unwrap(),
        status,
    }
}

fn two_records() -> Vec<FeedbackRecord> {
    vec![
        record("1", FeedbackStatus::Pending, Category::Hostel, "water shortage"),
        record("2", FeedbackStatus::Resolved, Category::Academics, "lab broken"),
    ]
}

fn criteria(status: StatusFilter, category: &str, search: &str) -> FilterCriteria {
    FilterCriteria {
        status,
        category: CategoryFilter::from(category.to_string()),
        search: search.to_string(),
    }
}

#[test]
fn pending_filter_selects_only_pending_records() {
    let records = two_records();
    let filtered = filter(&records, &criteria(StatusFilter::Pending, "all", ""));
    assert_eq!(filtered, vec![records[0].clone()]);
}

#[test]
fn unrestricted_criteria_is_identity() {
    let records = seed_records();
    assert_eq!(filter(&records, &FilterCriteria::default()), records);
}

#[test]
fn search_is_case_insensitive_substring() {
    let records = two_records();
    let filtered = filter(&records, &criteria(StatusFilter::All, "all", "WATER"));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "1");

    let none = filter(&records, &criteria(StatusFilter::All, "all", "roof"));
    assert!(none.is_empty());
}

#[test]
fn predicates_combine_with_and() {
    let records = vec![
        record("a", FeedbackStatus::Pending, Category::Hostel, "cold showers in block A"),
        record("b", FeedbackStatus::Resolved, Category::Hostel, "cold showers in block B"),
        record("c", FeedbackStatus::Pending, Category::Welfare, "cold showers everywhere"),
        record("d", FeedbackStatus::Pending, Category::Hostel, "noisy corridor at night"),
    ];

    let filtered = filter(&records, &criteria(StatusFilter::Pending, "Hostel", "Cold"));
    let ids: Vec<_> = filtered.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a"]);
}

#[test]
fn filter_preserves_input_order() {
    let records = vec![
        record("3", FeedbackStatus::Pending, Category::Others, "third in time, first in list"),
        record("1", FeedbackStatus::Resolved, Category::Others, "resolved one"),
        record("2", FeedbackStatus::Pending, Category::Others, "second pending entry"),
    ];

    let filtered = filter(&records, &criteria(StatusFilter::Pending, "all", ""));
    let ids: Vec<_> = filtered.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["3", "2"]);
}

#[test]
fn category_filter_uses_display_label() {
    let records = vec![
        record("1", FeedbackStatus::Pending, Category::AdministrativeIssues, "fees portal keeps failing"),
        record("2", FeedbackStatus::Pending, Category::Academics, "timetable clash on Mondays"),
    ];

    let filtered = filter(&records, &criteria(StatusFilter::All, "Administrative Issues", ""));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "1");

    // Unknown labels are not an error, they just match nothing.
    assert!(filter(&records, &criteria(StatusFilter::All, "Sports", "")).is_empty());
    assert!(filter(&records, &criteria(StatusFilter::All, "academics", "")).is_empty());
}

#[test]
fn categories_are_distinct_in_first_seen_order() {
    let records = vec![
        record("1", FeedbackStatus::Pending, Category::Welfare, "counselling hours too short"),
        record("2", FeedbackStatus::Pending, Category::Academics, "more past papers please"),
        record("3", FeedbackStatus::Resolved, Category::Welfare, "counselling room is locked"),
    ];

    assert_eq!(categories(&records), vec![Category::Welfare, Category::Academics]);
    assert!(categories(&[]).is_empty());
}

#[test]
fn stats_for_two_record_scenario() {
    let stats = stats(&two_records());
    assert_eq!(stats.total, 2);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.resolved, 1);
    assert_eq!(stats.resolution_rate, 50);
    assert_eq!(stats.count_for(Category::Hostel), 1);
    assert_eq!(stats.count_for(Category::Academics), 1);
    assert_eq!(stats.count_for(Category::Welfare), 0);
    assert!(!stats.category_counts.contains_key(&Category::Welfare));
}

#[test]
fn stats_on_empty_set_has_zero_rate() {
    let stats = stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.resolution_rate, 0);
    assert!(stats.category_counts.is_empty());
}

#[test]
fn total_is_pending_plus_resolved() {
    let records = seed_records();
    let stats = stats(&records);
    assert_eq!(stats.total, stats.pending + stats.resolved);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.resolution_rate, 33);
}

#[test]
fn resolution_rate_rounds_half_up() {
    assert_eq!(resolution_rate(1, 8), 13);
    assert_eq!(resolution_rate(2, 3), 67);
    assert_eq!(resolution_rate(1, 3), 33);
    assert_eq!(resolution_rate(5, 5), 100);
    assert_eq!(resolution_rate(0, 4), 0);
    assert_eq!(resolution_rate(0, 0), 0);
}

#[test]
fn derived_view_stats_ignore_filter() {
    let records = two_records();
    let view = derive_view(&records, &criteria(StatusFilter::Resolved, "all", ""));
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.stats.total, 2);
    assert_eq!(view.categories, vec![Category::Hostel, Category::Academics]);
}

#[test]
fn criteria_deserialize_with_defaults_and_short_search_key() {
    let parsed: FilterCriteria =
        serde_json::from_str(r#"{"status":"resolved","q":"lab"}"#).unwrap();
    assert_eq!(parsed.status, StatusFilter::Resolved);
    assert_eq!(parsed.category, CategoryFilter::All);
    assert_eq!(parsed.search, "lab");

    let parsed: FilterCriteria = serde_json::from_str(r#"{"category":"Hostel"}"#).unwrap();
    assert_eq!(parsed.category, CategoryFilter::Only("Hostel".to_string()));
    assert!(!parsed.is_unrestricted());
}

#[test]
fn search_key_wins_over_short_form_when_both_given() {
    let parsed: FilterCriteria =
        serde_json::from_str(r#"{"search":"water","q":"lab"}"#).unwrap();
    assert_eq!(parsed.search, "water");

    let parsed: FilterCriteria = serde_json::from_str(r#"{"search":"","q":"lab"}"#).unwrap();
    assert_eq!(parsed.search, "lab");

    let records = seed_records();
    let parsed: FilterCriteria =
        serde_json::from_str(r#"{"search":"WATER","q":"water"}"#).unwrap();
    let ids: Vec<_> = filter(&records, &parsed).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["2"]);
}
