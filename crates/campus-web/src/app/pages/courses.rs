use std::collections::BTreeSet;

use campus_types::catalog::{Course, CourseLevel};
use dioxus::prelude::*;

use crate::app::api;
use crate::app::components::{CourseCard, DashboardShell};

/// Which price bracket the catalog is narrowed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceFilter {
    #[default]
    Any,
    Free,
    Paid,
}

/// In-memory catalog filter. All narrowing happens client side over the
/// already-fetched course list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogFilter {
    pub search: String,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub price: PriceFilter,
}

impl CatalogFilter {
    pub fn matches(&self, course: &Course) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let teacher = course.teacher_name.as_deref().unwrap_or("");
            let haystack =
                format!("{} {} {}", course.title, course.description, teacher).to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &course.category != category {
                return false;
            }
        }
        if let Some(level) = self.level {
            if course.level != level {
                return false;
            }
        }
        match self.price {
            PriceFilter::Any => true,
            PriceFilter::Free => course.is_free(),
            PriceFilter::Paid => !course.is_free(),
        }
    }
}

#[component]
pub fn CoursesPage() -> Element {
    let catalog = use_resource(|| async move { api::courses::list_courses().await });

    let mut search = use_signal(String::new);
    let mut category = use_signal(|| None::<String>);
    let mut level = use_signal(|| None::<CourseLevel>);
    let mut price = use_signal(PriceFilter::default);

    let body = match &*catalog.read() {
        Some(Ok(courses)) => {
            let filter = CatalogFilter {
                search: search(),
                category: category(),
                level: level(),
                price: price(),
            };
            let categories: BTreeSet<String> =
                courses.iter().map(|c| c.category.clone()).collect();
            let visible: Vec<Course> = courses
                .iter()
                .filter(|c| filter.matches(c))
                .cloned()
                .collect();
            let shown = visible.len();
            let total = courses.len();

            rsx! {
                div { class: "flex flex-wrap items-end gap-2",
                    div { class: "form-control grow max-w-md",
                        input {
                            r#type: "search",
                            placeholder: "Search courses...",
                            class: "input input-bordered w-full",
                            value: "{search}",
                            oninput: move |evt| search.set(evt.value()),
                        }
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| {
                            let value = evt.value();
                            category.set(if value == "all" { None } else { Some(value) });
                        },
                        option { value: "all", selected: category().is_none(), "All categories" }
                        for name in categories {
                            option {
                                value: "{name}",
                                selected: category().as_deref() == Some(name.as_str()),
                                "{name}"
                            }
                        }
                    }
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| {
                            level.set(evt.value().parse::<CourseLevel>().ok());
                        },
                        option { value: "all", selected: level().is_none(), "All levels" }
                        for option_level in CourseLevel::all() {
                            option {
                                value: "{option_level}",
                                selected: level() == Some(option_level),
                                "{option_level}"
                            }
                        }
                    }
                    div { class: "join",
                        button {
                            class: if price() == PriceFilter::Any { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" },
                            onclick: move |_| price.set(PriceFilter::Any),
                            "All"
                        }
                        button {
                            class: if price() == PriceFilter::Free { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" },
                            onclick: move |_| price.set(PriceFilter::Free),
                            "Free"
                        }
                        button {
                            class: if price() == PriceFilter::Paid { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" },
                            onclick: move |_| price.set(PriceFilter::Paid),
                            "Paid"
                        }
                    }
                }

                p { class: "text-sm opacity-70", "Showing {shown} of {total} courses" }

                if visible.is_empty() {
                    div { class: "card bg-base-100 shadow",
                        div { class: "card-body items-center text-center py-16",
                            p { class: "text-lg", "No courses match those filters." }
                            p { class: "text-sm opacity-70", "Try a broader search or clear a filter." }
                        }
                    }
                } else {
                    div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4",
                        for course in visible {
                            CourseCard { course }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            div { class: "alert alert-error",
                span { "{err}" }
            }
        },
        None => rsx! {
            div { class: "flex justify-center py-12",
                span { class: "loading loading-spinner loading-lg" }
            }
        },
    };

    rsx! {
        DashboardShell {
            div { class: "space-y-4",
                h1 { class: "text-3xl font-bold", "Courses" }
                {body}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn course(title: &str, category: &str, level: CourseLevel, price: f64) -> Course {
        Course {
            id: format!("course-{title}"),
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            description: "A sample description".to_string(),
            category: category.to_string(),
            level,
            price,
            currency: "USD".to_string(),
            teacher_id: "acct-1".to_string(),
            teacher_name: Some("Dana Wells".to_string()),
            thumbnail_url: None,
            published: true,
            status: campus_types::catalog::CourseStatus::Published,
            rating: None,
            enrollment_count: Some(0),
            duration: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = CatalogFilter::default();
        assert!(filter.matches(&course("Rust", "Programming", CourseLevel::Advanced, 49.0)));
        assert!(filter.matches(&course("Sketching", "Design", CourseLevel::Beginner, 0.0)));
    }

    #[test]
    fn test_search_is_case_insensitive_and_spans_title_description_teacher() {
        let course = course("Web Bootcamp", "Programming", CourseLevel::Beginner, 89.0);

        let by_title = CatalogFilter {
            search: "BOOTCAMP".to_string(),
            ..Default::default()
        };
        assert!(by_title.matches(&course));

        let by_description = CatalogFilter {
            search: "sample".to_string(),
            ..Default::default()
        };
        assert!(by_description.matches(&course));

        let by_teacher = CatalogFilter {
            search: "dana".to_string(),
            ..Default::default()
        };
        assert!(by_teacher.matches(&course));

        let miss = CatalogFilter {
            search: "quantum".to_string(),
            ..Default::default()
        };
        assert!(!miss.matches(&course));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let filter = CatalogFilter {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert!(filter.matches(&course("Rust", "Programming", CourseLevel::Advanced, 49.0)));
    }

    #[test]
    fn test_category_must_match_exactly() {
        let filter = CatalogFilter {
            category: Some("Design".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&course("UI Basics", "Design", CourseLevel::Beginner, 0.0)));
        assert!(!filter.matches(&course("Rust", "Programming", CourseLevel::Advanced, 49.0)));
    }

    #[test]
    fn test_level_narrows_the_list() {
        let filter = CatalogFilter {
            level: Some(CourseLevel::Expert),
            ..Default::default()
        };
        assert!(filter.matches(&course("ML Systems", "Data Science", CourseLevel::Expert, 129.0)));
        assert!(!filter.matches(&course("Rust", "Programming", CourseLevel::Advanced, 49.0)));
    }

    #[test]
    fn test_price_filter_splits_free_and_paid() {
        let free = course("Strategy", "Business", CourseLevel::Beginner, 0.0);
        let paid = course("Rust", "Programming", CourseLevel::Advanced, 49.0);

        let free_only = CatalogFilter {
            price: PriceFilter::Free,
            ..Default::default()
        };
        assert!(free_only.matches(&free));
        assert!(!free_only.matches(&paid));

        let paid_only = CatalogFilter {
            price: PriceFilter::Paid,
            ..Default::default()
        };
        assert!(paid_only.matches(&paid));
        assert!(!paid_only.matches(&free));
    }

    #[test]
    fn test_filters_combine_with_and_semantics() {
        let filter = CatalogFilter {
            search: "rust".to_string(),
            category: Some("Programming".to_string()),
            level: Some(CourseLevel::Advanced),
            price: PriceFilter::Paid,
        };
        assert!(filter.matches(&course("Rust Systems", "Programming", CourseLevel::Advanced, 69.0)));
        // Same course, wrong level
        assert!(!filter.matches(&course("Rust Systems", "Programming", CourseLevel::Beginner, 69.0)));
        // Same course, free
        assert!(!filter.matches(&course("Rust Systems", "Programming", CourseLevel::Advanced, 0.0)));
    }
}
