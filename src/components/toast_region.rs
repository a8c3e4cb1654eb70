use icons::X;
use leptos::prelude::*;

use crate::notify::{Notifier, ToastKind};

fn toast_class(kind: ToastKind, fading: bool) -> String {
    let tone = match kind {
        ToastKind::Success => "border-primary/30 bg-background",
        ToastKind::Error => "border-destructive/50 bg-background text-destructive",
    };
    let opacity = if fading { "opacity-0" } else { "opacity-100" };
    format!(
        "pointer-events-auto flex items-center gap-3 rounded-md border px-4 py-3 text-sm shadow-lg transition-opacity duration-300 {tone} {opacity}"
    )
}

/// Stacked toasts, newest at the bottom.
#[component]
pub fn ToastRegion(notifier: Notifier) -> impl IntoView {
    view! {
        <div
            data-name="ToastRegion"
            class="fixed right-4 bottom-4 z-100 flex w-80 flex-col gap-2 pointer-events-none"
            role="status"
            aria-live="polite"
        >
            <For each=move || notifier.toasts() key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    let kind = toast.kind;
                    view! {
                        <div
                            data-name="Toast"
                            class=move || toast_class(kind, notifier.is_fading(id))
                        >
                            <span class="flex-1">{toast.message}</span>
                            <button
                                type="button"
                                class="rounded-sm p-0.5 opacity-70 hover:opacity-100 hover:cursor-pointer [&_svg]:size-4"
                                aria-label="Dismiss notification"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                <X />
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
