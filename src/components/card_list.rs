use leptos::prelude::*;

use crate::components::ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardGrid, CardHeader, CardTitle,
};
use crate::models::ItemId;
use crate::render::{CardListView, CardView, DetailView};

/// Renders a whole card list; the caller recomputes `list` on every change.
#[component]
pub fn CardList(
    #[prop(into)] list: Signal<CardListView>,
    on_select: Callback<ItemId>,
    on_details: Callback<DetailView>,
) -> impl IntoView {
    move || match list.get() {
        CardListView::Empty { message } => view! {
            <p data-name="CardListEmpty" class="py-8 text-center text-sm text-muted-foreground">
                {message}
            </p>
        }
        .into_any(),
        CardListView::Cards(cards) => view! {
            <CardGrid attr:data-name="CardList">
                {cards
                    .into_iter()
                    .map(|card| view! { <CatalogCard card=card on_select=on_select on_details=on_details /> })
                    .collect_view()}
            </CardGrid>
        }
        .into_any(),
    }
}

#[component]
fn CatalogCard(
    card: CardView,
    on_select: Callback<ItemId>,
    on_details: Callback<DetailView>,
) -> impl IntoView {
    let CardView {
        id,
        title,
        badges,
        description,
        meta,
        footer_note,
        action,
        details,
    } = card;

    let badges = badges
        .into_iter()
        .map(|badge| view! { <Badge class=badge.tone.class()>{badge.label}</Badge> })
        .collect_view();

    let details = StoredValue::new(details);

    view! {
        <Card attr:data-item-id=id.to_string()>
            <CardHeader>
                <CardTitle>{title}</CardTitle>
                <div class="flex flex-wrap gap-1.5">{badges}</div>
            </CardHeader>
            <CardContent class="flex flex-col gap-2">
                <p class="text-sm">{description}</p>
                <CardDescription>{meta}</CardDescription>
                {footer_note.map(|note| view! { <CardDescription>{note}</CardDescription> })}
            </CardContent>
            <CardFooter>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    on:click=move |_| on_details.run(details.get_value())
                >
                    "View details"
                </Button>
                <Button
                    size=ButtonSize::Sm
                    attr:disabled=action.disabled
                    on:click=move |_| on_select.run(id)
                >
                    {action.label}
                </Button>
            </CardFooter>
        </Card>
    }
}
