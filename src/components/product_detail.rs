//! Product Detail Component
//!
//! One product, or a not-found state for unknown ids.

use leptos::prelude::*;

use crate::products::{find_product_by_segment, format_price};
use crate::routes::Route;

#[component]
pub fn ProductDetail(id: String) -> impl IntoView {
    let back = Route::Products.href();

    match find_product_by_segment(&id) {
        Some(product) => view! {
            <article class="product-detail">
                <a class="back-link" href=back>"← All products"</a>
                <h2 class="product-name">{product.name}</h2>
                <p class="product-category">{product.category}</p>
                <p class="product-price">{format_price(product.price_cents)}</p>
                <p class="product-description">{product.description}</p>
            </article>
        }
        .into_any(),
        None => {
            log::warn!("[APP] Unknown product id {:?}", id);
            view! {
                <div class="product-not-found">
                    <p>"Product not found"</p>
                    <a class="back-link" href=back>"← All products"</a>
                </div>
            }
            .into_any()
        }
    }
}
