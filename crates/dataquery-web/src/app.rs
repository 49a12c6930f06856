//! Main App Component

use dataquery_core::site::METADATA;
use leptos::prelude::*;
use leptos_meta::{Html, Meta, provide_meta_context};
use leptos_router::{components::*, path};

use crate::chrome::{Footer, Header};
use crate::pages::{HomePage, NotFoundPage, PlaceholderPage};

/// Root layout: header and footer around the routed page
///
/// Each page sets its own `<Title>`, so the tab title follows navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html attr:lang=METADATA.lang />
        <Meta name="description" content=METADATA.description />
        <Router>
            <div class="bg-gray-50 text-gray-900 flex flex-col min-h-screen">
                <Header />
                <main class="flex-grow">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/blog") view=|| view! { <PlaceholderPage path="/blog" /> } />
                        <Route path=path!("/login") view=|| view! { <PlaceholderPage path="/login" /> } />
                        <Route path=path!("/signup") view=|| view! { <PlaceholderPage path="/signup" /> } />
                        <Route path=path!("/contato") view=|| view! { <PlaceholderPage path="/contato" /> } />
                        <Route path=path!("/termos") view=|| view! { <PlaceholderPage path="/termos" /> } />
                        <Route path=path!("/privacidade") view=|| view! { <PlaceholderPage path="/privacidade" /> } />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
