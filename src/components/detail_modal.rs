use leptos::prelude::*;

use crate::components::ui::{Dialog, DialogBody, DialogDescription, DialogHeader, DialogTitle};
use crate::notify::Notifier;

/// Details overlay for whichever card last asked for it.
#[component]
pub fn DetailModal(notifier: Notifier) -> impl IntoView {
    let on_close = Callback::new(move |_: ()| notifier.close_modal());

    view! {
        <Dialog
            open=Signal::derive(move || notifier.modal_open())
            on_close=on_close
            data_name_prefix="DetailModal"
        >
            {move || {
                notifier
                    .modal()
                    .map(|details| {
                        view! {
                            <DialogBody>
                                <DialogHeader>
                                    <DialogTitle>{details.title}</DialogTitle>
                                    <DialogDescription>{details.subtitle}</DialogDescription>
                                </DialogHeader>
                                <p class="text-sm">{details.body}</p>
                                <ul class="flex flex-col gap-1 text-sm text-muted-foreground">
                                    {details
                                        .notes
                                        .into_iter()
                                        .map(|note| view! { <li>{note}</li> })
                                        .collect_view()}
                                </ul>
                            </DialogBody>
                        }
                    })
            }}
        </Dialog>
    }
}
