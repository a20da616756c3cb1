//! Shop Frontend App
//!
//! Application shell: header, navigation and route selection.

use leptos::ev;
use leptos::prelude::*;

use feature_todo::TodoApp;

use crate::components::{NavBar, ProductDetail, ProductList};
use crate::routes::Route;

/// Resolve the current hash, rewriting it when it is not canonical
fn resolve_location() -> Route {
    let location = window().location();
    let hash = location.hash().unwrap_or_default();
    let route = Route::parse(&hash);
    if !route.is_canonical(&hash) {
        log::debug!("[APP] Redirecting {:?} to {}", hash, route.href());
        if let Err(e) = location.replace(&route.href()) {
            log::error!("[APP] Redirect failed: {:?}", e);
        }
    }
    route
}

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(resolve_location());

    // The shell lives as long as the page, so the listener is never removed
    let _ = window_event_listener(ev::hashchange, move |_| {
        let next = resolve_location();
        if route.get_untracked() != next {
            log::debug!("[APP] Route {}", next.path());
            set_route.set(next);
        }
    });

    view! {
        <div class="app">
            <header class="app-header">
                <div class="header-content">
                    <h1 class="app-title">"Official Shop Demo"</h1>
                    <NavBar route=route />
                </div>
            </header>

            <main class="app-main">
                {move || match route.get() {
                    Route::Products => view! { <ProductList /> }.into_any(),
                    Route::ProductDetail(id) => view! { <ProductDetail id=id /> }.into_any(),
                    Route::Todos => view! { <TodoApp /> }.into_any(),
                }}
            </main>
        </div>
    }
}
