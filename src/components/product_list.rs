//! Product List Component

use leptos::prelude::*;

use crate::products::{catalog, format_price};
use crate::routes::Route;

#[component]
pub fn ProductList() -> impl IntoView {
    view! {
        <section class="product-list">
            <h2>"Products"</h2>
            <ul class="product-grid">
                {catalog().iter().map(|product| {
                    let href = Route::ProductDetail(product.id.to_string()).href();
                    view! {
                        <li class="product-card">
                            <a href=href>
                                <span class="product-name">{product.name}</span>
                                <span class="product-category">{product.category}</span>
                                <span class="product-price">{format_price(product.price_cents)}</span>
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>
    }
}
