use crate::admission::{AdmissionForm, SUBMISSION_FAILED};
use crate::models::AdmissionApplication;
use crate::routes::Route;
use crate::views::{admission::AdmissionPage, render_page};
use crate::AppState;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};
use leptos::prelude::*;
use std::sync::Arc;

/// Blank admission form
pub async fn show_admission() -> Html<String> {
    render_form(AdmissionForm::new(), None)
}

/// Forward the submitted draft to the backend and render the outcome
pub async fn submit_admission(
    State(state): State<Arc<AppState>>,
    submission: Result<Form<AdmissionApplication>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let draft = match submission {
        Ok(Form(draft)) => draft,
        Err(rejection) => {
            tracing::warn!("Rejected admission submission: {}", rejection);
            return (rejection.status(), render_form(AdmissionForm::new(), Some(SUBMISSION_FAILED)));
        }
    };

    tracing::info!("Received admission (standard {}, {})", draft.standard, draft.board);

    let mut form = AdmissionForm::with_draft(draft);
    if let Some(body) = form.begin_submit() {
        let result = state.api.submit_admission(&body).await;
        form.finish_submit(result);
    }

    let notice = form.take_notice();
    (StatusCode::OK, render_form(form, notice))
}

fn render_form(form: AdmissionForm, notice: Option<&'static str>) -> Html<String> {
    Html(render_page(Route::Admission.title(), move || {
        view! { <AdmissionPage form=form notice=notice/> }
    }))
}
