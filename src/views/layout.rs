use super::{render_to_string, BRAND};
use crate::routes::Route;
use chrono::Datelike;
use leptos::prelude::*;

/// Render a full document: head, sticky header with navigation, the page's
/// main content, footer.
pub fn render_page<V: IntoView>(title: &str, main: impl FnOnce() -> V) -> String {
    let page_title = if title.is_empty() {
        BRAND.name.to_string()
    } else {
        format!("{} | {}", title, BRAND.name)
    };
    let copyright = format!("© {} {}. All rights reserved.", chrono::Local::now().year(), BRAND.name);

    render_to_string(move || {
        let nav = Route::ALL
            .iter()
            .map(|route| view! {
                <a href=route.path() class="hover:text-blue-600">{route.nav_label()}</a>
            })
            .collect_view();

        view! {
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <meta name="theme-color" content=BRAND.primary_color/>
                    <script src="https://cdn.tailwindcss.com"></script>
                    <title>{page_title}</title>
                </head>
                <body>
                    <div class="min-h-screen bg-white text-gray-900">
                        <header class="sticky top-0 z-20 bg-white/80 backdrop-blur border-b">
                            <div class="mx-auto max-w-6xl px-4 py-3 flex items-center justify-between">
                                <div class="flex items-center gap-3">
                                    <div class="w-9 h-9 rounded bg-blue-500 grid place-items-center text-white font-bold">"IA"</div>
                                    <div>
                                        <h1 class="text-base font-semibold">{BRAND.name}</h1>
                                        <p class="text-xs text-gray-500">{BRAND.tagline}</p>
                                    </div>
                                </div>
                                <nav class="hidden sm:flex items-center gap-4 text-sm">{nav}</nav>
                            </div>
                        </header>
                        <main>{main()}</main>
                        <footer class="mt-10 border-t">
                            <div class="mx-auto max-w-6xl px-4 py-6 text-sm text-gray-600">{copyright}</div>
                        </footer>
                    </div>
                </body>
            </html>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_all_nav_links() {
        let html = render_page("Courses", || view! { <p>"body"</p> });

        for href in ["/", "/admission", "/courses", "/materials", "/announcements", "/contact"] {
            assert!(html.contains(&format!(r#"href="{}""#, href)), "missing link to {}", href);
        }
        assert!(html.contains(">Study Materials</a>"));
        assert!(html.contains("<main><p>body</p></main>"));
        assert!(html.contains("<title>Courses | Indium Science Academy</title>"));
        assert!(html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_footer_shows_current_year() {
        let html = render_page("", || ());
        let year = chrono::Local::now().year();

        assert!(html.contains(&format!("© {} Indium Science Academy. All rights reserved.", year)));
        assert!(html.contains("<title>Indium Science Academy</title>"));
    }
}
