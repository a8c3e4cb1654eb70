use crate::render::BadgeTone;
use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Badge, span, "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium whitespace-nowrap"}
}

pub use components::*;

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Category => "bg-secondary text-secondary-foreground",
            BadgeTone::Highlight => "border-transparent bg-primary text-primary-foreground",
        }
    }
}
