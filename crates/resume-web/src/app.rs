use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::SectionsPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"404 - Page not found"</p> }>
                <Route path=path!("/") view=SectionsPage />
            </Routes>
        </Router>
    }
}
