use crate::models::Material;
use leptos::prelude::*;

#[component]
pub fn MaterialsPage(materials: Vec<Material>) -> impl IntoView {
    let items = materials
        .into_iter()
        .map(|material| view! { <MaterialLink material=material/> })
        .collect_view();

    view! {
        <div class="mx-auto max-w-6xl px-4 py-10">
            <h2 class="text-2xl font-semibold">"Study Materials"</h2>
            <div id="material-list" class="mt-6 grid sm:grid-cols-2 lg:grid-cols-3 gap-6">{items}</div>
        </div>
    }
}

// Opens in a new tab; the url is passed through as-is.
#[component]
fn MaterialLink(material: Material) -> impl IntoView {
    let details = format!(
        "Class {} • {} • {}",
        material.class_level,
        material.subject,
        material.kind.to_uppercase()
    );
    let description = material
        .description
        .filter(|text| !text.is_empty())
        .map(|text| view! { <p class="text-sm text-gray-600 mt-2">{text}</p> });

    view! {
        <a
            href=material.url
            target="_blank"
            rel="noreferrer"
            class="material-card rounded-xl border p-5 hover:shadow-sm transition block"
        >
            <h3 class="font-semibold">{material.title}</h3>
            <p class="text-sm text-gray-600 mt-1">{details}</p>
            {description}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::render_to_string;

    fn material(title: &str, description: Option<&str>) -> Material {
        Material {
            id: "m1".to_string(),
            title: title.to_string(),
            class_level: "8".to_string(),
            subject: "Physics".to_string(),
            kind: "pdf".to_string(),
            url: "https://cdn.example.com/notes.pdf".to_string(),
            description: description.map(str::to_string),
        }
    }

    fn render(materials: Vec<Material>) -> String {
        render_to_string(move || view! { <MaterialsPage materials=materials/> })
    }

    #[test]
    fn test_material_is_external_link() {
        let html = render(vec![material("Motion Notes", Some("Chapter 1 summary"))]);

        assert!(html.contains(r#"href="https://cdn.example.com/notes.pdf""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noreferrer""#));
        assert!(html.contains("Class 8 • Physics • PDF"));
        assert!(html.contains(">Chapter 1 summary</p>"));
    }

    #[test]
    fn test_missing_description_is_omitted() {
        let without = render(vec![material("A", None)]);
        let empty = render(vec![material("A", Some(""))]);

        assert!(!without.contains("mt-2"));
        assert!(!empty.contains("mt-2"));
    }

    #[test]
    fn test_materials_count_and_order() {
        let html = render(vec![material("First", None), material("Second", None), material("Third", None)]);

        assert_eq!(html.matches("material-card").count(), 3);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        let third = html.find("Third").unwrap();
        assert!(first < second && second < third);
    }
}
