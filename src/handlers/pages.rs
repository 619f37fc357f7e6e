use crate::api::ApiResult;
use crate::routes::Route;
use crate::views::{
    announcements::AnnouncementsPage, contact::ContactPage, courses::CoursesPage, home::HomePage,
    materials::MaterialsPage, render_page,
};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use leptos::prelude::*;
use std::sync::Arc;

pub async fn home() -> Html<String> {
    Html(render_page(Route::Home.title(), || view! { <HomePage/> }))
}

pub async fn contact() -> Html<String> {
    Html(render_page(Route::Contact.title(), || view! { <ContactPage/> }))
}

pub async fn courses(State(state): State<Arc<AppState>>) -> Html<String> {
    let courses = load_collection("courses", state.api.courses()).await;
    Html(render_page(Route::Courses.title(), move || view! { <CoursesPage courses=courses/> }))
}

pub async fn materials(State(state): State<Arc<AppState>>) -> Html<String> {
    let materials = load_collection("materials", state.api.materials()).await;
    Html(render_page(Route::Materials.title(), move || view! { <MaterialsPage materials=materials/> }))
}

pub async fn announcements(State(state): State<Arc<AppState>>) -> Html<String> {
    let announcements = load_collection("announcements", state.api.announcements()).await;
    Html(render_page(Route::Announcements.title(), move || {
        view! { <AnnouncementsPage announcements=announcements/> }
    }))
}

/// Unknown paths get the bare shell
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(render_page("", || ()))).into_response()
}

/// Await a collection fetch; any failure renders as an empty list.
async fn load_collection<T>(name: &str, fetch: impl std::future::Future<Output = ApiResult<Vec<T>>>) -> Vec<T> {
    match fetch.await {
        Ok(items) => {
            tracing::debug!("Fetched {} {}", items.len(), name);
            items
        }
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {}", name, e);
            Vec::new()
        }
    }
}
