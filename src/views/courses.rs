use crate::models::Course;
use leptos::prelude::*;

#[component]
pub fn CoursesPage(courses: Vec<Course>) -> impl IntoView {
    let cards = courses
        .into_iter()
        .map(|course| view! { <CourseCard course=course/> })
        .collect_view();

    view! {
        <div class="mx-auto max-w-6xl px-4 py-10">
            <h2 class="text-2xl font-semibold">"Courses"</h2>
            <p class="text-gray-600 mt-2">"Classes 1st–10th for SSC & CBSE"</p>
            <div id="course-list" class="mt-6 grid sm:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
        </div>
    }
}

#[component]
fn CourseCard(course: Course) -> impl IntoView {
    let heading = format!("Class {} • {}", course.class_level, course.board);
    let subject_count = format!("{} subjects", course.subjects.len());
    let teacher = format!("Teacher: {}", course.teacher_name);
    let schedule = format!("Schedule: {}", course.schedule);
    let chips = course
        .subjects
        .into_iter()
        .map(|subject| view! {
            <span class="text-xs bg-blue-50 text-blue-700 px-2 py-0.5 rounded">{subject}</span>
        })
        .collect_view();

    view! {
        <div class="course-card rounded-xl border p-5">
            <div class="flex items-center justify-between">
                <h3 class="font-semibold">{heading}</h3>
                <span class="text-xs rounded-full px-2 py-0.5 bg-orange-100 text-orange-700">{subject_count}</span>
            </div>
            <p class="text-sm text-gray-600 mt-2">{teacher}</p>
            <p class="text-sm text-gray-600">{schedule}</p>
            <div class="mt-3 flex flex-wrap gap-2">{chips}</div>
        </div>
    }
}
