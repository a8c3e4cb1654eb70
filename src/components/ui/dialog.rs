use icons::X;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {DialogBody, div, "flex flex-col gap-4"}
    clx! {DialogHeader, div, "flex flex-col gap-2 pr-8 text-center sm:text-left"}
    clx! {DialogTitle, h3, "text-lg leading-none font-semibold"}
    clx! {DialogDescription, p, "text-muted-foreground text-sm"}
}

pub use components::*;

/// Signal-driven dialog: rendered while `open` is true.
///
/// Backdrop click, the close button and Escape all call `on_close`.
#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
    #[prop(default = "Dialog")] data_name_prefix: &'static str,
) -> impl IntoView {
    let backdrop_data_name = format!("{data_name_prefix}Backdrop");
    let content_data_name = format!("{data_name_prefix}Content");

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || key_handle.remove());

    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get()>
            <div
                data-name=backdrop_data_name.clone()
                class="fixed inset-0 z-60 bg-black/50"
                on:click=move |_| on_close.run(())
            />
            <div
                data-name=content_data_name.clone()
                class="bg-background border rounded-2xl shadow-lg p-6 w-full max-w-lg max-h-[85vh] overflow-y-auto fixed top-[50%] left-[50%] translate-x-[-50%] translate-y-[-50%] z-100"
                role="dialog"
                aria-modal="true"
            >
                <button
                    type="button"
                    class="absolute top-4 right-4 p-1 rounded-sm hover:cursor-pointer focus:ring-2 focus:ring-offset-2 focus:outline-none focus:ring-ring [&_svg:not([class*='size-'])]:size-4"
                    aria-label="Close dialog"
                    on:click=move |_| on_close.run(())
                >
                    <X />
                </button>
                {children.with_value(|c| c())}
            </div>
        </Show>
    }
}
