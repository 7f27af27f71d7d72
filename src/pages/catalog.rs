//! Product catalog page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the default route. It reads the product collection once per
//! mount and renders it as a table in received order; there is no further
//! interaction on this view.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::catalog::CatalogState;

/// Catalog page — fetches the menu on mount and renders one row per product.
///
/// A fetch failure is logged and leaves whatever was last displayed in
/// place; the view stays interactive either way.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            catalog.update(|state| state.loading = true);
            let result = crate::net::api::fetch_products().await;
            // The page may have been torn down while the request ran.
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(products) => catalog.update(|state| {
                    state.products = products;
                    state.loading = false;
                }),
                Err(err) => {
                    log::error!("unable to load products: {err}");
                    catalog.update(|state| state.loading = false);
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="catalog-page">
            <h1 class="catalog-page__title">"Menu"</h1>
            <Show
                when=move || !catalog.get().loading
                fallback=move || view! { <p class="catalog-page__loading">"Loading menu..."</p> }
            >
                <table class="product-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Price"</th>
                            <th>"SKU"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            product_rows(&catalog.get().products)
                                .into_iter()
                                .map(|(name, price, sku)| {
                                    view! {
                                        <tr class="product-table__row">
                                            <td>{name}</td>
                                            <td>{price}</td>
                                            <td>{sku}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

/// Build the row model for the table: one `(name, price, sku)` triple per
/// product, in received order.
fn product_rows(products: &[Product]) -> Vec<(String, String, String)> {
    products
        .iter()
        .map(|product| {
            (
                product.name.clone(),
                format_price(product.price),
                product.sku.clone(),
            )
        })
        .collect()
}

/// Render a price the way the service reports it: `3.5` stays "3.5" and
/// whole numbers drop the fraction.
fn format_price(price: f64) -> String {
    price.to_string()
}
