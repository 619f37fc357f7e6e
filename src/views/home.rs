use super::BRAND;
use leptos::prelude::*;

struct Feature {
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature { title: "Admissions", text: "Apply online for the new academic year." },
    Feature { title: "Courses", text: "1st–10th standards for SSC & CBSE." },
    Feature { title: "Study Materials", text: "Access PDFs, videos, and notes." },
    Feature { title: "Announcements", text: "Stay updated with schedules and events." },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let headline = format!("Welcome to {} – {} 🌟", BRAND.name, BRAND.tagline);
    let primary_style = format!("background-color: {}", BRAND.primary_color);
    let accent_style = format!("background-color: {}", BRAND.accent_color);
    let features = FEATURES
        .iter()
        .map(|feature| view! {
            <div class="feature-card rounded-xl border p-5 hover:shadow-sm transition">
                <h3 class="font-semibold">{feature.title}</h3>
                <p class="text-sm text-gray-600 mt-1">{feature.text}</p>
            </div>
        })
        .collect_view();

    view! {
        <div class="relative">
            <section class="relative h-[420px] overflow-hidden bg-gradient-to-br from-blue-50 via-white to-orange-50">
                <div class="absolute inset-0 flex items-end">
                    <div class="mx-auto max-w-6xl px-4 pb-10 w-full">
                        <h2 class="text-2xl sm:text-3xl md:text-4xl font-bold text-gray-900">{headline}</h2>
                        <p class="mt-3 text-gray-700 max-w-2xl">
                            "An admission and learning platform for SSC & CBSE students from 1st to 10th standard."
                        </p>
                        <div class="mt-5 flex flex-wrap gap-3">
                            <a href="/admission" class="px-4 py-2 rounded text-white" style=primary_style>"Admission"</a>
                            <a href="/courses" class="px-4 py-2 rounded text-white" style=accent_style>"Courses"</a>
                            <a href="/announcements" class="px-4 py-2 rounded border border-gray-300 hover:bg-gray-50">"Announcements"</a>
                            <a href="/contact" class="px-4 py-2 rounded border border-gray-300 hover:bg-gray-50">"Contact"</a>
                        </div>
                    </div>
                </div>
            </section>
            <section class="mx-auto max-w-6xl px-4 py-10 grid sm:grid-cols-2 lg:grid-cols-4 gap-6">{features}</section>
        </div>
    }
}
