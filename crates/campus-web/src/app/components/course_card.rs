use dioxus::prelude::*;

use campus_types::catalog::Course;

use crate::app::components::icons::{BookIcon, StarIcon};
use crate::app::routes::Routes;

/// Catalog tile linking to the course detail page.
#[component]
pub fn CourseCard(course: Course) -> Element {
    let price = course.price_label();
    let teacher = course.teacher_name.clone().unwrap_or_else(|| "Campus staff".to_string());

    rsx! {
        Link {
            class: "card bg-base-100 shadow hover:shadow-lg transition-shadow",
            to: Routes::CourseDetailPage { course_id: course.id.clone() },
            figure { class: "h-36 bg-gradient-to-br from-primary to-secondary text-primary-content",
                if let Some(url) = course.thumbnail_url.clone() {
                    img { src: "{url}", alt: "{course.title}", class: "h-full w-full object-cover" }
                } else {
                    BookIcon { class: "w-12 h-12 opacity-70" }
                }
            }
            div { class: "card-body p-4",
                div { class: "flex items-center justify-between text-xs opacity-70",
                    span { class: "badge badge-outline", "{course.category}" }
                    span { "{course.level}" }
                }
                h3 { class: "card-title text-base", "{course.title}" }
                p { class: "text-sm opacity-70", "{teacher}" }
                div { class: "flex items-center justify-between mt-2",
                    if let Some(rating) = course.rating {
                        div { class: "flex items-center gap-1 text-sm",
                            StarIcon { class: "w-4 h-4 text-warning" }
                            span { {format!("{:.1}", rating)} }
                        }
                    }
                    span { class: "font-bold text-primary", "{price}" }
                }
            }
        }
    }
}
