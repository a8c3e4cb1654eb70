use crate::catalog::data::{announcements, clubs, events};
use crate::catalog::{CatalogItem, CatalogKind};
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardItem, CardList as SummaryList, CardTitle, Input, Label,
    NativeSelect, SelectChoice,
};
use crate::components::CardList;
use crate::dashboard::{greeting, save_display_name, summary_rows};
use crate::filter::{filter_catalog, CatalogQuery, CategoryFilter};
use crate::models::ItemId;
use crate::notify::ToastKind;
use crate::render::{render_cards, select_item, DetailView};
use crate::state::{use_app_state, AppState};
use leptos::prelude::*;
use leptos_router::components::A;

const SECTIONS: [(&str, &str, &str); 4] = [
    (
        "/announcements",
        "Announcements",
        "Academic notices, club news and campus alerts.",
    ),
    ("/events", "Events", "Workshops, competitions and socials you can register for."),
    ("/clubs", "Clubs", "Student clubs open for new members."),
    (
        "/dashboard",
        "Dashboard",
        "Your saved announcements, registered events and joined clubs.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let username = use_app_state("HomePage").map(|state| state.username);
    let welcome = move || {
        username
            .and_then(|name| name.with(|n| greeting(n)))
            .unwrap_or_else(|| "Welcome to Campus Portal".to_string())
    };

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold">{welcome}</h1>
                <p class="text-sm text-muted-foreground">
                    "Everything happening on campus, in one place."
                </p>
            </div>

            <div class="grid gap-4 sm:grid-cols-2">
                {SECTIONS
                    .iter()
                    .map(|(href, title, blurb)| {
                        view! {
                            <A href=*href attr:class="block rounded-xl transition-colors hover:bg-accent/40">
                                <Card class="h-full">
                                    <CardHeader>
                                        <CardTitle>{*title}</CardTitle>
                                        <CardDescription>{*blurb}</CardDescription>
                                    </CardHeader>
                                </Card>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn category_choices(kind: CatalogKind) -> Vec<SelectChoice> {
    std::iter::once(SelectChoice::new(CategoryFilter::ALL_VALUE, "All categories"))
        .chain(kind.categories().iter().map(|c| SelectChoice::new(*c, *c)))
        .collect()
}

/// Search box, category select and the card list for one catalog.
fn catalog_page<T>(heading: &'static str, intro: &'static str, items: Vec<T>) -> AnyView
where
    T: CatalogItem + Send + Sync + 'static,
{
    let Some(state) = use_app_state(heading) else {
        return ().into_any();
    };
    let kind = T::KIND;
    state.reload_selection(kind);

    let search: RwSignal<String> = RwSignal::new(String::new());
    let category: RwSignal<String> = RwSignal::new(CategoryFilter::ALL_VALUE.to_string());
    let selection = state.selection(kind);
    let items = StoredValue::new(items);

    let list = Signal::derive(move || {
        let query = CatalogQuery::new(&search.get(), &category.get());
        items.with_value(|items| {
            let matched = filter_catalog(items, &query);
            selection.with(|selected| render_cards(&matched, selected))
        })
    });

    let on_select = Callback::new(move |id: ItemId| {
        let (fresh, outcome) = state.store.with_value(|store| select_item(store, kind, id));
        selection.set(fresh);

        let (message, toast_kind) = outcome.notification(kind);
        state.notifier.show_toast(message, toast_kind);
    });

    let on_details = Callback::new(move |details: DetailView| state.notifier.open_modal(details));

    view! {
        <div class="space-y-4">
            <div class="space-y-1">
                <h1 class="text-xl font-semibold">{heading}</h1>
                <p class="text-xs text-muted-foreground">{intro}</p>
            </div>

            <div class="flex flex-col gap-2 sm:flex-row">
                <Input
                    id="catalogSearch"
                    r#type="search"
                    placeholder=kind.search_placeholder()
                    bind_value=search
                    class="sm:flex-1"
                />
                <NativeSelect
                    id="catalogCategory"
                    choices=category_choices(kind)
                    bind_value=category
                    aria_label="Filter by category"
                    class="sm:w-48"
                />
            </div>

            <CardList list=list on_select=on_select on_details=on_details />
        </div>
    }
    .into_any()
}

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    catalog_page(
        "Announcements",
        "Save the notices you want to keep on your dashboard.",
        announcements(),
    )
}

#[component]
pub fn ClubsPage() -> impl IntoView {
    catalog_page("Clubs", "Find a club and join in.", clubs())
}

#[component]
pub fn EventsPage() -> impl IntoView {
    catalog_page(
        "Events",
        "Register for upcoming events around campus.",
        events(),
    )
}

/// One dashboard section: selected items of a catalog, or a placeholder.
fn summary_card<T>(state: AppState, catalog: Vec<T>) -> impl IntoView
where
    T: CatalogItem + Send + Sync + 'static,
{
    let kind = T::KIND;
    let selection = state.selection(kind);
    let limit = state.config.with_value(|c| c.summary_limit);
    let rows = move || selection.with(|selected| summary_rows(&catalog, selected, limit));

    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-sm">{kind.selection_title()}</CardTitle>
            </CardHeader>
            <CardContent>
                {move || {
                    let rows = rows();
                    if rows.is_empty() {
                        view! {
                            <p class="text-sm text-muted-foreground">
                                {kind.nothing_selected_message()}
                            </p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <SummaryList>
                                {rows
                                    .into_iter()
                                    .map(|row| view! { <CardItem attr:data-item-id=row.id.to_string()>{row.text}</CardItem> })
                                    .collect_view()}
                            </SummaryList>
                        }
                        .into_any()
                    }
                }}
            </CardContent>
        </Card>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let Some(state) = use_app_state("DashboardPage") else {
        return ().into_any();
    };
    for kind in CatalogKind::ALL {
        state.reload_selection(kind);
    }

    let name_input: RwSignal<String> = RwSignal::new(state.username.get_untracked());
    let name_error: RwSignal<Option<String>> = RwSignal::new(None);

    let save_name = move || {
        let result = state
            .store
            .with_value(|store| save_display_name(store, &name_input.get_untracked()));
        match result {
            Ok(name) => {
                name_error.set(None);
                name_input.set(name.clone());
                state.username.set(name);
                state
                    .notifier
                    .show_toast("Name saved successfully.", ToastKind::Success);
            }
            Err(e) => {
                let message = e.to_string();
                name_error.set(Some(message.clone()));
                state.notifier.show_toast(message, ToastKind::Error);
            }
        }
    };
    let on_submit = Callback::new(move |_: ()| save_name());

    let welcome = move || state.username.with(|n| greeting(n));

    view! {
        <div class="space-y-4">
            <div class="space-y-1">
                <h1 id="dashboardGreeting" class="text-xl font-semibold">
                    {move || welcome().unwrap_or_else(|| "Dashboard".to_string())}
                </h1>
                <p class="text-xs text-muted-foreground">
                    "Last visited: "
                    <span id="lastVisitedDisplay" class="font-medium">
                        {move || state.previous_page.get()}
                    </span>
                </p>
            </div>

            <Card>
                <CardHeader>
                    <CardTitle class="text-sm">"Profile"</CardTitle>
                    <CardDescription class="text-xs">"Shown in your greeting on every visit."</CardDescription>
                </CardHeader>
                <CardContent class="flex flex-col gap-3">
                    <div class="flex flex-col gap-1.5">
                        <Label html_for="usernameInput" class="text-xs">"Display name"</Label>
                        <div class="flex gap-2">
                            <Input
                                id="usernameInput"
                                placeholder="Your name"
                                bind_value=name_input
                                on_submit=on_submit
                                class="h-8 text-sm"
                            />
                            <Button size=ButtonSize::Sm on:click=move |_| save_name()>
                                "Save"
                            </Button>
                        </div>
                    </div>

                    {move || {
                        name_error.get().map(|e| {
                            view! {
                                <Alert class="border-destructive/30">
                                    <AlertDescription class="text-destructive text-xs">
                                        {e}
                                    </AlertDescription>
                                </Alert>
                            }
                        })
                    }}

                    <div class="flex items-center gap-2 text-xs text-muted-foreground">
                        "Theme: "
                        <span class="font-medium text-foreground">{move || state.theme.get().to_string()}</span>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            on:click=move |_| state.toggle_theme()
                        >
                            "Toggle theme"
                        </Button>
                    </div>
                </CardContent>
            </Card>

            <div class="grid gap-4 md:grid-cols-3">
                {summary_card(state, announcements())}
                {summary_card(state, events())}
                {summary_card(state, clubs())}
            </div>
        </div>
    }
    .into_any()
}
