use crate::models::Announcement;
use leptos::prelude::*;

/// Announcements are shown exactly in the order the backend sent them;
/// `pinned` only adds a badge.
#[component]
pub fn AnnouncementsPage(announcements: Vec<Announcement>) -> impl IntoView {
    let items = announcements
        .into_iter()
        .map(|announcement| view! { <AnnouncementCard announcement=announcement/> })
        .collect_view();

    view! {
        <div class="mx-auto max-w-3xl px-4 py-10">
            <h2 class="text-2xl font-semibold">"Announcements"</h2>
            <div id="announcement-list" class="mt-6 space-y-4">{items}</div>
        </div>
    }
}

#[component]
fn AnnouncementCard(announcement: Announcement) -> impl IntoView {
    let badge = announcement.pinned.then(|| view! {
        <span class="text-xs bg-yellow-100 text-yellow-800 px-2 py-0.5 rounded">"Pinned"</span>
    });
    let date = announcement
        .date
        .filter(|date| !date.is_empty())
        .map(|date| view! { <p class="text-xs text-gray-500 mt-1">{date}</p> });

    view! {
        <div class="announcement-card rounded-xl border p-5">
            <div class="flex items-center justify-between">
                <h3 class="font-semibold">{announcement.title}</h3>
                {badge}
            </div>
            <p class="text-sm text-gray-700 mt-2">{announcement.message}</p>
            {date}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::render_to_string;

    fn announcement(title: &str, pinned: bool, date: Option<&str>) -> Announcement {
        Announcement {
            id: title.to_lowercase(),
            title: title.to_string(),
            message: format!("{} details", title),
            date: date.map(str::to_string),
            pinned,
        }
    }

    fn render(announcements: Vec<Announcement>) -> String {
        render_to_string(move || view! { <AnnouncementsPage announcements=announcements/> })
    }

    #[test]
    fn test_pinned_badge_does_not_reorder() {
        let html = render(vec![
            announcement("Exams", false, None),
            announcement("Holiday", true, Some("2025-08-15")),
        ]);

        assert_eq!(html.matches(">Pinned</span>").count(), 1);
        assert!(html.find("Exams").unwrap() < html.find("Holiday").unwrap());
        assert!(html.contains(">2025-08-15</p>"));
        assert!(html.contains("Holiday details"));
    }

    #[test]
    fn test_empty_announcements() {
        let html = render(Vec::new());

        assert!(html.contains(r#"id="announcement-list""#));
        assert_eq!(html.matches("announcement-card").count(), 0);
        assert!(!html.contains("Pinned"));
    }
}
