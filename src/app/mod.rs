pub mod chrome;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::components::{DetailModal, ToastRegion};
use crate::config::PortalConfig;
use crate::models::Theme;
use crate::pages::{AnnouncementsPage, ClubsPage, DashboardPage, EventsPage, HomePage};
use crate::state::{use_app_state, AppContext, AppState};
use crate::storage::KeyValueStore;
use crate::util::current_year;
use chrome::{apply_theme, page_identifier, record_last_visited};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::hooks::use_location;
use leptos_router::path;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/announcements", "Announcements"),
    ("/events", "Events"),
    ("/clubs", "Clubs"),
    ("/dashboard", "Dashboard"),
];

#[component]
pub fn App(config: PortalConfig, store: KeyValueStore) -> impl IntoView {
    provide_context(AppContext(AppState::new(config, store)));

    // Router hooks (`use_location`) need the <Router> context, so the shell sits inside it.
    view! {
        <Router>
            <PortalShell>
                <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                    <Route path=path!("announcements") view=AnnouncementsPage />
                    <Route path=path!("clubs") view=ClubsPage />
                    <Route path=path!("events") view=EventsPage />
                    <Route path=path!("dashboard") view=DashboardPage />
                    <Route path=path!("") view=HomePage />
                </Routes>
            </PortalShell>
        </Router>
    }
}

/// Header, footer, toasts and the details overlay around every page.
#[component]
fn PortalShell(children: Children) -> impl IntoView {
    let Some(state) = use_app_state("PortalShell") else {
        return children().into_any();
    };
    let nav_open: RwSignal<bool> = RwSignal::new(false);

    Effect::new(move |_| apply_theme(state.theme.get()));

    let location = use_location();
    Effect::new(move |_| {
        let page = page_identifier(&location.pathname.get());
        let previous = state
            .store
            .with_value(|store| record_last_visited(store, &page));
        state.previous_page.set(previous);
        nav_open.set(false);
    });

    let nav_class = move || {
        if nav_open.get() {
            "flex flex-col gap-1 sm:flex sm:flex-row sm:items-center"
        } else {
            "hidden sm:flex sm:flex-row sm:items-center sm:gap-1"
        }
    };

    view! {
        <div class="min-h-screen bg-background text-foreground flex flex-col">
            <header class="border-b">
                <div class="mx-auto flex w-full max-w-5xl flex-wrap items-center gap-2 px-4 py-3">
                    <A href="/" attr:class="mr-auto text-sm font-semibold">"Campus Portal"</A>

                    <Button
                        class="sm:hidden"
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        attr:id="navToggle"
                        attr:aria-expanded=move || nav_open.get().to_string()
                        on:click=move |_| nav_open.update(|open| *open = !*open)
                    >
                        "Menu"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        attr:id="themeToggle"
                        on:click=move |_| state.toggle_theme()
                    >
                        {move || match state.theme.get() {
                            Theme::Light => "Dark mode",
                            Theme::Dark => "Light mode",
                        }}
                    </Button>

                    <nav id="navLinks" class=move || format!("w-full sm:w-auto {}", nav_class())>
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <A
                                        href=*href
                                        attr:class="rounded-md px-3 py-1.5 text-sm text-muted-foreground hover:bg-accent hover:text-foreground aria-[current=page]:text-foreground aria-[current=page]:font-medium"
                                    >
                                        {*label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </header>

            <main class="mx-auto w-full max-w-5xl flex-1 px-4 py-6">{children()}</main>

            <footer class="border-t">
                <div class="mx-auto w-full max-w-5xl px-4 py-4 text-xs text-muted-foreground">
                    "© " <span id="year">{current_year()}</span> " Campus Portal"
                </div>
            </footer>

            <ToastRegion notifier=state.notifier />
            <DetailModal notifier=state.notifier />
        </div>
    }
    .into_any()
}
