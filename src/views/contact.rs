use leptos::prelude::*;

const ADDRESS: &str = "Indium Science Academy, Kapaleshwar Nagar, Nashik";
const PHONE_HREF: &str = "tel:+910000000000";
const WHATSAPP_URL: &str = "https://wa.me/910000000000";
const MAP_URL: &str = "https://maps.google.com/?q=Indium%20Science%20Academy%20Kapaleshwar%20Nagar%20Nashik";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="mx-auto max-w-3xl px-4 py-10">
            <h2 class="text-2xl font-semibold">"Contact Us"</h2>
            <div class="mt-4 space-y-2 text-gray-700">
                <p>{ADDRESS}</p>
                <p>
                    "Phone: "
                    <a href=PHONE_HREF class="text-blue-600 hover:underline">"Insert contact number"</a>
                </p>
                <div class="flex gap-3 mt-3">
                    <a href=WHATSAPP_URL class="px-4 py-2 rounded bg-green-500 text-white hover:bg-green-600">"WhatsApp"</a>
                    <a href=MAP_URL target="_blank" rel="noreferrer" class="px-4 py-2 rounded border">"Open Map"</a>
                </div>
            </div>
        </div>
    }
}
