use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use feedbox_audit::events::AuditEvent;
use feedbox_core::derive;
use feedbox_core::models::feedback::{Category, FeedbackRecord, FeedbackStatus};
use feedbox_core::models::filter::FilterCriteria;
use feedbox_core::models::stats::FeedbackStats;
use feedbox_core::store::Action;
use feedbox_core::view::{DashboardState, DashboardView};

use crate::error::ApiError;
use crate::extract::{Json as ApiJson, Query};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Dashboard view parameters: the filter criteria plus the record open in
/// the detail view, if any.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    #[serde(flatten)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub open: Option<String>,
}

impl ViewQuery {
    fn into_state(self) -> DashboardState {
        DashboardState {
            criteria: self.criteria,
            open: self.open.filter(|id| !id.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: FeedbackStatus,
}

#[derive(Debug, Serialize)]
pub struct StatusChangeResponse {
    pub id: String,
    /// `false` when no record has this id; the store is left unchanged.
    pub applied: bool,
    pub changed: bool,
    pub record: Option<FeedbackRecord>,
    pub dashboard: DashboardView,
}

pub async fn list_feedback(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Json<Vec<FeedbackRecord>> {
    let snapshot = state.snapshot().await;
    Json(derive::filter(&snapshot.records, &criteria))
}

pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FeedbackRecord>, ApiError> {
    let snapshot = state.snapshot().await;
    snapshot
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("feedback not found: {id}")))
}

pub async fn stats(State(state): State<AppState>) -> Json<FeedbackStats> {
    let snapshot = state.snapshot().await;
    Json(derive::stats(&snapshot.records))
}

/// Distinct categories present in the current record set.
pub async fn categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    let snapshot = state.snapshot().await;
    Json(derive::categories(&snapshot.records))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(view): Query<ViewQuery>,
) -> Json<DashboardView> {
    let snapshot = state.snapshot().await;
    Json(view.into_state().render(&snapshot))
}

pub async fn set_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Query(view): Query<ViewQuery>,
    ApiJson(body): ApiJson<StatusBody>,
) -> Result<Json<StatusChangeResponse>, ApiError> {
    let action = Action::SetStatus {
        id: id.clone(),
        status: body.status,
    };
    apply_status_action(&state, &user, id, action, view).await
}

pub async fn toggle_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Query(view): Query<ViewQuery>,
) -> Result<Json<StatusChangeResponse>, ApiError> {
    let action = Action::Toggle { id: id.clone() };
    apply_status_action(&state, &user, id, action, view).await
}

async fn apply_status_action(
    state: &AppState,
    user: &AuthUser,
    id: String,
    action: Action,
    view: ViewQuery,
) -> Result<Json<StatusChangeResponse>, ApiError> {
    let (previous, outcome) = {
        let mut store = state.store.write().await;
        let previous = store.snapshot().find(&id).map(|r| r.status);
        (previous, store.dispatch(action)?)
    };

    let record = outcome.snapshot.find(&id).cloned();

    if !outcome.applied {
        tracing::debug!(id = %id, "status change for unknown feedback id ignored");
    }
    if let (true, Some(from), Some(current)) = (outcome.changed, previous, record.as_ref()) {
        AuditEvent::status_changed(&id, from, current.status, &user.sub).emit();
    }

    let mut view = view.into_state();
    view.status_changed(&id);
    let dashboard = view.render(&outcome.snapshot);

    Ok(Json(StatusChangeResponse {
        id,
        applied: outcome.applied,
        changed: outcome.changed,
        record,
        dashboard,
    }))
}
