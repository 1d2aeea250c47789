use campus_types::catalog::format_price;
use dioxus::prelude::*;

use crate::app::cart::use_cart;
use crate::app::components::icons::CartIcon;
use crate::app::components::{use_toast, DashboardShell};
use crate::app::routes::Routes;

#[component]
pub fn CartPage() -> Element {
    let cart = use_cart();
    let toast = use_toast();

    let items = cart.items()();
    let total = cart.total();
    let count = items.len();
    let currency = items
        .first()
        .map(|item| item.currency.clone())
        .unwrap_or_else(|| "USD".to_string());

    // TODO: hook the checkout button up to a payments provider
    let checkout = move |_| {
        toast.info("Checkout isn't wired up in this demo. Free courses enroll instantly from their page.");
    };

    rsx! {
        DashboardShell {
            div { class: "space-y-4",
                h1 { class: "text-3xl font-bold", "Your cart" }

                if items.is_empty() {
                    div { class: "card bg-base-100 shadow",
                        div { class: "card-body items-center text-center py-16",
                            CartIcon { class: "w-12 h-12 opacity-30" }
                            p { class: "text-lg", "Your cart is empty." }
                            Link {
                                class: "btn btn-primary btn-sm",
                                to: Routes::CoursesPage {},
                                "Browse courses"
                            }
                        }
                    }
                } else {
                    div { class: "grid gap-6 lg:grid-cols-3",
                        div { class: "lg:col-span-2 space-y-2",
                            for item in items {
                                div { class: "card bg-base-100 shadow",
                                    div { class: "card-body flex-row items-center justify-between py-4",
                                        div {
                                            Link {
                                                class: "font-semibold link link-hover",
                                                to: Routes::CourseDetailPage { course_id: item.course_id.clone() },
                                                "{item.title}"
                                            }
                                            if let Some(teacher) = item.teacher_name.clone() {
                                                p { class: "text-sm opacity-70", "{teacher}" }
                                            }
                                        }
                                        div { class: "flex items-center gap-3",
                                            span { class: "font-semibold",
                                                {format_price(item.price, &item.currency)}
                                            }
                                            button {
                                                class: "btn btn-ghost btn-xs text-error",
                                                onclick: {
                                                    let course_id = item.course_id.clone();
                                                    move |_| cart.remove(&course_id)
                                                },
                                                "Remove"
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            div { class: "card bg-base-100 shadow",
                                div { class: "card-body",
                                    h2 { class: "card-title text-base", "Order summary" }
                                    div { class: "flex justify-between text-sm",
                                        span { "Courses" }
                                        span { "{count}" }
                                    }
                                    div { class: "divider my-1" }
                                    div { class: "flex justify-between font-bold",
                                        span { "Total" }
                                        span { {format_price(total, &currency)} }
                                    }
                                    button {
                                        class: "btn btn-primary w-full mt-2",
                                        onclick: checkout,
                                        "Checkout"
                                    }
                                    button {
                                        class: "btn btn-ghost btn-sm w-full",
                                        onclick: move |_| cart.clear(),
                                        "Clear cart"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
