//! Nav Bar Component
//!
//! Links between the top-level sections.

use leptos::prelude::*;

use crate::routes::{Route, Section};

#[component]
pub fn NavBar(route: ReadSignal<Route>) -> impl IntoView {
    view! {
        <nav class="app-nav">
            {Section::ALL.into_iter().map(move |section| {
                let is_active = move || route.with(|r| r.section() == section);
                view! {
                    <a
                        href=section.route().href()
                        class=move || if is_active() { "nav-link active" } else { "nav-link" }
                    >
                        {section.label()}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
