use super::Input;
use crate::admission::{AdmissionForm, FormState};
use crate::models::Board;
use leptos::prelude::*;

// Shows the in-flight state while the browser waits for the response.
const SUBMITTING_SCRIPT: &str = r#"document.getElementById("admission-form").addEventListener("submit", function (e) {
  var button = e.target.querySelector("button[type=submit]");
  button.disabled = true;
  button.textContent = "Submitting...";
});"#;

/// The admission page for the form's current state
#[component]
pub fn AdmissionPage(form: AdmissionForm, notice: Option<&'static str>) -> impl IntoView {
    match form.state() {
        FormState::Submitted => view! { <ThankYou/> }.into_any(),
        FormState::Editing | FormState::Submitting => view! { <AdmissionFormView form=form notice=notice/> }.into_any(),
    }
}

#[component]
fn ThankYou() -> impl IntoView {
    view! {
        <div class="mx-auto max-w-2xl px-4 py-10 text-center">
            <h2 class="text-2xl font-semibold">"Thank you for your application"</h2>
            <p class="text-gray-600 mt-2">"We have received your details. Our team will contact you shortly."</p>
        </div>
    }
}

#[component]
fn AdmissionFormView(form: AdmissionForm, notice: Option<&'static str>) -> impl IntoView {
    let submitting = form.state() == FormState::Submitting;
    let draft = form.draft().clone();
    let button_label = if submitting { "Submitting..." } else { "Submit Application" };

    let board_options = Board::ALL
        .iter()
        .map(|board| {
            let selected = *board == draft.board;
            view! { <option value=board.as_str() selected=selected>{board.as_str()}</option> }
        })
        .collect_view();

    // Emitted once, with the page rendered right after the failed attempt
    let alert = notice.map(|message| {
        let script = format!("alert({});", serde_json::to_string(message).unwrap_or_default());
        view! { <script inner_html=script></script> }
    });

    view! {
        <div class="mx-auto max-w-2xl px-4 py-10">
            <h2 class="text-2xl font-semibold">"Admission Form"</h2>
            <form id="admission-form" class="mt-6 grid gap-4" method="post" action="/admission">
                <Input label="Student Name" name="student_name" value=draft.student_name required=true/>
                <Input label="Standard / Class" name="standard" value=draft.standard required=true/>
                <label class="block">
                    <span class="text-sm font-medium text-gray-700">"Board"</span>
                    <select class="mt-1 w-full rounded border px-3 py-2" name="board" required=true>
                        {board_options}
                    </select>
                </label>
                <Input label="Date of Birth" name="dob" value=draft.dob input_type="date" required=true/>
                <Input label="Parent’s Name" name="parent_name" value=draft.parent_name required=true/>
                <Input label="Mobile Number" name="mobile" value=draft.mobile required=true/>
                <label class="block">
                    <span class="text-sm font-medium text-gray-700">"Address"</span>
                    <textarea class="mt-1 w-full rounded border px-3 py-2" name="address" rows="3" required=true>{draft.address}</textarea>
                </label>
                <Input label="Previous School" name="previous_school" value=draft.previous_school/>
                <Input label="Photo URL" name="photo_url" value=draft.photo_url input_type="url"/>
                <button
                    type="submit"
                    disabled=submitting
                    class="mt-2 inline-flex items-center justify-center rounded bg-blue-600 text-white px-4 py-2 hover:bg-blue-700 disabled:opacity-60"
                >{button_label}</button>
            </form>
            <script inner_html=SUBMITTING_SCRIPT></script>
            {alert}
        </div>
    }
}
