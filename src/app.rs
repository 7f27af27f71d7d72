//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{admin::AdminPage, catalog::CatalogPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The navigation bar stays mounted across route changes; `/admin` shows
/// the upload form and every other path falls back to the catalog.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Coffee Shop"/>

        <Router>
            <NavBar/>
            <main class="app__main">
                <Routes fallback=|| view! { <CatalogPage/> }>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("") view=CatalogPage/>
                </Routes>
            </main>
        </Router>
    }
}
