use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use feedbox_audit::events::AuditEvent;
use feedbox_core::intake::{self, Submission, SubmissionPolicy, SubmissionReceipt};
use feedbox_core::models::feedback::Category;
use feedbox_core::store::Action;

use crate::error::ApiError;
use crate::extract::Json as ApiJson;
use crate::state::AppState;

/// The fixed category list offered by the submission form.
pub async fn list_categories() -> Json<Vec<Category>> {
    Json(Category::ALL.to_vec())
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<Submission>,
) -> Result<(StatusCode, Json<SubmissionReceipt>), ApiError> {
    let valid = intake::validate_with(&submission, state.limits)?;
    let category = valid.category();
    let record = valid.into_record(intake::new_feedback_id(), jiff::Timestamp::now());

    let stored = match state.submissions {
        SubmissionPolicy::Append => {
            state
                .store
                .write()
                .await
                .dispatch(Action::Append(record.clone()))?;
            true
        }
        SubmissionPolicy::Discard => false,
    };

    AuditEvent::feedback_submitted(&record.id, category, stored).emit();

    Ok((
        StatusCode::CREATED,
        Json(SubmissionReceipt::for_record(&record, stored)),
    ))
}
