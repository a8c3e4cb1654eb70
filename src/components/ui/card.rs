use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, article, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-2 px-6 [.border-b]:pb-6"}
    clx! {CardTitle, h3, "leading-none font-semibold"}
    clx! {CardContent, div, "px-6"}
    clx! {CardDescription, p, "text-muted-foreground text-sm"}
    clx! {CardFooter, footer, "flex items-center px-6 [.border-t]:pt-6", "gap-2"}

    clx! {CardGrid, div, "grid gap-4 sm:grid-cols-2"}
    clx! {CardList, ul, "flex flex-col gap-2"}
    clx! {CardItem, li, "flex items-center rounded-md border px-3 py-2 text-sm"}
}

pub use components::*;
