use dioxus::prelude::*;

#[component]
pub fn Modal(open: bool, on_close: EventHandler<()>, title: String, children: Element, actions: Option<Element>) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        dialog { class: "modal modal-open modal-bottom sm:modal-middle",
            div { class: "modal-box",
                button {
                    class: "btn btn-sm btn-circle btn-ghost absolute right-2 top-2",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                h3 { class: "font-bold text-lg", "{title}" }
                div { class: "py-4", {children} }
                if let Some(actions) = actions {
                    div { class: "modal-action", {actions} }
                }
            }
            // Backdrop to close
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
        }
    }
}
