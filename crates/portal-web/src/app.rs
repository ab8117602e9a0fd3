use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages;

/// Document title shared by every page.
pub const PORTAL_TITLE: &str = "Citizen Services Portal";

/// HTML shell wrapping all pages (rendered server-side).
/// This is a plain function, NOT a #[component].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = format!("/{}/{}.css", options.site_pkg_dir, options.output_name);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=stylesheet/>
                <HydrationScripts options islands=true/>
                <MetaTags/>
            </head>
            <body class="bg-white text-gray-900 min-h-screen">
                <App/>
            </body>
        </html>
    }
}

/// Main application component with router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=PORTAL_TITLE/>
        <Router>
            // Unmatched paths never reach the router server-side
            <Routes fallback=|| "Not Found">
                <Route path=path!("/") view=pages::home::HomePage/>
            </Routes>
        </Router>
    }
}
