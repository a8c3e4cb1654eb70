use leptos::prelude::*;
use tw_merge::*;

/// One `<option>`: submitted value and visible label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectChoice {
    pub value: String,
    pub label: String,
}

impl SelectChoice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Native `<select>` bound to a string signal.
#[component]
pub fn NativeSelect(
    #[prop(into)] choices: Vec<SelectChoice>,
    #[prop(into)] bind_value: RwSignal<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] id: String,
    #[prop(default = "Select an option".into(), into)] aria_label: String,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "border-input dark:bg-input/30 flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-sm shadow-xs outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2 hover:cursor-pointer",
        class
    );

    let options = choices
        .into_iter()
        .map(|choice| {
            let value = choice.value.clone();
            let selected = move || bind_value.with(|v| *v == value);
            view! {
                <option value=choice.value selected=selected>
                    {choice.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <select
            data-name="NativeSelect"
            class=merged_class
            id=id
            aria-label=aria_label
            prop:value=move || bind_value.get()
            on:change=move |ev| bind_value.set(event_target_value(&ev))
        >
            {options}
        </select>
    }
}
