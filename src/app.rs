//! SWAPI Catalog App
//!
//! Router shell: header navigation, notice banner and the three routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::NoticeBanner;
use crate::config::CatalogConfig;
use crate::context::AppContext;
use crate::pages::{CharacterDetailPage, CharacterListPage, FavoritesPage};
use crate::store::{CatalogState, CatalogStateStoreFields};

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    // State
    let store = Store::new(CatalogState::default());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(config, store));

    let favorites_label = move || format!("Favorites ({})", store.favorites().read().len());

    view! {
        <Router>
            <header class="app-header">
                <a class="app-title" href="/">"Star Wars Character App"</a>
                <nav class="app-nav">
                    <a href="/">"Characters"</a>
                    <a href="/favorites">{favorites_label}</a>
                </nav>
            </header>

            <NoticeBanner />

            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=CharacterListPage />
                    <Route path=path!("/character/:id") view=CharacterDetailPage />
                    <Route path=path!("/favorites") view=FavoritesPage />
                </Routes>
            </main>
        </Router>
    }
}
