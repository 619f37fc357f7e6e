use crate::handlers::{admission, pages};
use crate::AppState;
use axum::{
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Every page the site serves, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Admission,
    Courses,
    Materials,
    Announcements,
    Contact,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Admission,
        Route::Courses,
        Route::Materials,
        Route::Announcements,
        Route::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Admission => "/admission",
            Route::Courses => "/courses",
            Route::Materials => "/materials",
            Route::Announcements => "/announcements",
            Route::Contact => "/contact",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Admission => "Admission",
            Route::Courses => "Courses",
            Route::Materials => "Study Materials",
            Route::Announcements => "Announcements",
            Route::Contact => "Contact",
        }
    }

    /// Page title; the home page uses the bare academy name
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "",
            Route::Admission => "Admission",
            Route::Courses => "Courses",
            Route::Materials => "Study Materials",
            Route::Announcements => "Announcements",
            Route::Contact => "Contact",
        }
    }

    fn handler(&self) -> MethodRouter<Arc<AppState>> {
        match self {
            Route::Home => get(pages::home),
            Route::Admission => get(admission::show_admission).post(admission::submit_admission),
            Route::Courses => get(pages::courses),
            Route::Materials => get(pages::materials),
            Route::Announcements => get(pages::announcements),
            Route::Contact => get(pages::contact),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let router = Route::ALL
        .iter()
        .fold(Router::new(), |router, route| router.route(route.path(), route.handler()));

    router
        .route("/health", get(health_check))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
