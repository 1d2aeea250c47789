use dioxus::prelude::*;

use crate::app::auth::hooks::use_auth;
use crate::app::components::icons::{BookIcon, StarIcon, VideoIcon};
use crate::app::components::DashboardShell;
use crate::app::routes::Routes;

#[component]
pub fn IndexPage() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    // Signed-in visitors land on their dashboard instead
    use_effect(move || {
        let state = auth.state();
        let state = state.read();
        if !state.loading && state.account.is_some() {
            navigator.push(Routes::DashboardPage {});
        }
    });

    rsx! {
        DashboardShell {
            div { class: "hero min-h-[60vh] bg-base-200 rounded-box",
                div { class: "hero-content text-center",
                    div { class: "max-w-xl",
                        h1 { class: "text-5xl font-bold", "Learn anything. Teach anyone." }
                        p { class: "py-6",
                            "Campus brings students and teachers together in one place: "
                            "browse the catalog, enroll in minutes, and go live with your own courses."
                        }
                        div { class: "flex justify-center gap-2",
                            Link {
                                class: "btn btn-primary",
                                to: Routes::SignupPage {},
                                "Get started"
                            }
                            Link {
                                class: "btn btn-ghost",
                                to: Routes::CoursesPage {},
                                "Browse courses"
                            }
                        }
                    }
                }
            }

            div { class: "stats stats-vertical md:stats-horizontal shadow w-full mt-8",
                div { class: "stat place-items-center",
                    div { class: "stat-value text-primary", "120+" }
                    div { class: "stat-title", "Courses" }
                }
                div { class: "stat place-items-center",
                    div { class: "stat-value", "40+" }
                    div { class: "stat-title", "Teachers" }
                }
                div { class: "stat place-items-center",
                    div { class: "stat-value text-secondary", "12k" }
                    div { class: "stat-title", "Enrollments" }
                }
            }

            div { class: "grid gap-4 md:grid-cols-3 mt-8",
                div { class: "card bg-base-100 shadow",
                    div { class: "card-body",
                        BookIcon { class: "w-8 h-8 text-primary" }
                        h2 { class: "card-title", "A catalog worth browsing" }
                        p { class: "text-sm opacity-80",
                            "Courses across programming, design, business and more, "
                            "from free introductions to expert deep dives."
                        }
                    }
                }
                div { class: "card bg-base-100 shadow",
                    div { class: "card-body",
                        VideoIcon { class: "w-8 h-8 text-primary" }
                        h2 { class: "card-title", "Live sessions" }
                        p { class: "text-sm opacity-80",
                            "Teachers schedule live classes right next to their course "
                            "material, so nobody misses the next one."
                        }
                    }
                }
                div { class: "card bg-base-100 shadow",
                    div { class: "card-body",
                        StarIcon { class: "w-8 h-8 text-primary" }
                        h2 { class: "card-title", "Progress that sticks" }
                        p { class: "text-sm opacity-80",
                            "Every enrollment tracks how far you've come, "
                            "from first lesson to completion."
                        }
                    }
                }
            }
        }
    }
}
