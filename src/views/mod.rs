pub mod layout;
pub mod home;
pub mod admission;
pub mod courses;
pub mod materials;
pub mod announcements;
pub mod contact;

use leptos::prelude::*;

pub use layout::render_page;

/// Academy branding shared by every page
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub primary_color: &'static str,
    pub accent_color: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "Indium Science Academy",
    tagline: "Where Learning Shines Brighter",
    primary_color: "#1E90FF",
    accent_color: "#FFA500",
};

/// Render a view to HTML under a fresh root owner
pub fn render_to_string<V: IntoView>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new_root(None);
    owner.with(|| view().to_html())
}

/// Labelled single-line input, the building block of the admission form
#[component]
pub fn Input(
    label: &'static str,
    name: &'static str,
    #[prop(into)] value: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm font-medium text-gray-700">{label}</span>
            <input
                class="mt-1 w-full rounded border px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                type=input_type
                name=name
                value=value
                required=required
            />
        </label>
    }
}
