//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{login::LoginPage, workspace::WorkspacePage};
use crate::services::WebController;

/// Root application component.
///
/// Provides the controller and config contexts and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    provide_context(WebController::from_config(&config));
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/cestas-web.css"/>
        <Title text="Cestas Básicas"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("app") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}
