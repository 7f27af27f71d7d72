//! Static navigation chrome for the storefront shell.

use leptos::prelude::*;

/// Top navigation bar with the brand and the two view links.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Coffee Shop"
            </a>
            <div class="nav-bar__links">
                <a class="nav-bar__link" href="/">
                    "Home"
                </a>
                <a class="nav-bar__link" href="/admin">
                    "Admin"
                </a>
            </div>
        </nav>
    }
}
