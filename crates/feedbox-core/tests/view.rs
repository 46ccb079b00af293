use feedbox_core::fixture::seed_records;
use feedbox_core::models::feedback::FeedbackStatus;
use feedbox_core::models::filter::{FilterCriteria, StatusFilter};
use feedbox_core::store::{Action, FeedbackStore};
use feedbox_core::view::DashboardState;

#[test]
fn status_change_closes_matching_detail() {
    let mut state = DashboardState::default();
    state.open_detail("1");

    state.status_changed("2");
    assert_eq!(state.open.as_deref(), Some("1"));

    state.status_changed("1");
    assert!(state.open.is_none());
}

#[test]
fn render_includes_open_record() {
    let store = FeedbackStore::seeded(seed_records()).unwrap();
    let mut state = DashboardState::default();
    state.open_detail("3");

    let view = state.render(&store.snapshot());
    assert_eq!(view.detail.as_ref().map(|r| r.id.as_str()), Some("3"));
    assert_eq!(view.derived.items.len(), 3);

    state.close_detail();
    assert!(state.render(&store.snapshot()).detail.is_none());
}

#[test]
fn render_after_status_change_recomputes() {
    let mut store = FeedbackStore::seeded(seed_records()).unwrap();
    let mut state = DashboardState::new(FilterCriteria {
        status: StatusFilter::Pending,
        ..FilterCriteria::default()
    });
    state.open_detail("1");

    let outcome = store
        .dispatch(Action::SetStatus {
            id: "1".to_string(),
            status: FeedbackStatus::Resolved,
        })
        .unwrap();
    state.status_changed("1");

    let view = state.render(&outcome.snapshot);
    assert_eq!(view.version, 1);
    assert!(view.detail.is_none());
    assert!(view.derived.items.iter().all(|r| r.id != "1"));
    assert_eq!(view.derived.stats.resolved, 2);
    assert_eq!(view.derived.stats.resolution_rate, 67);
}

#[test]
fn open_on_missing_record_renders_no_detail() {
    let store = FeedbackStore::seeded(seed_records()).unwrap();
    let mut state = DashboardState::default();
    state.open_detail("404");
    assert!(state.render(&store.snapshot()).detail.is_none());
}

#[test]
fn dashboard_view_flattens_derived_fields() {
    let store = FeedbackStore::seeded(seed_records()).unwrap();
    let view = DashboardState::default().render(&store.snapshot());
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["stats"]["total"], 3);
    assert_eq!(json["items"].as_array().unwrap().len(), 3);
    assert_eq!(json["categories"][2], "Facilities");
    assert_eq!(json["criteria"]["category"], "all");
    assert!(json["detail"].is_null());
}
