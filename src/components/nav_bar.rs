//! Section navigation bar with the logout action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::WebController;
use crate::state::nav::Section;

#[component]
pub fn NavBar() -> impl IntoView {
    let controller = expect_context::<WebController>();
    let nav = controller.stores.nav;

    let buttons = Section::ALL
        .into_iter()
        .map(|section| {
            let controller = controller.clone();
            let nav_id = section.nav_id();
            let is_active = {
                let nav_id = nav_id.clone();
                move || nav.with(|n| n.is_nav_active(&nav_id))
            };
            view! {
                <button
                    id=nav_id
                    class="nav-btn"
                    class:active=is_active
                    on:click=move |_| {
                        let controller = controller.clone();
                        spawn_local(async move { controller.activate_section(section).await });
                    }
                >
                    {section.title()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let on_logout = move |_| {
        let controller = controller.clone();
        spawn_local(async move { controller.logout().await });
    };

    view! {
        <nav class="nav-bar">
            {buttons}
            <span class="nav-bar__spacer"></span>
            <button class="nav-btn nav-btn--logout" on:click=on_logout>
                "Sair"
            </button>
        </nav>
    }
}
