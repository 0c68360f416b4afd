//! Authenticated workspace: navigation plus one visible section.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::dashboard_panel::DashboardPanel;
use crate::components::delivery_form::DeliveryFormPanel;
use crate::components::delivery_history::DeliveryHistoryPanel;
use crate::components::family_form::FamilyFormPanel;
use crate::components::family_search::FamilySearchPanel;
use crate::components::kits_panel::KitsPanel;
use crate::components::nav_bar::NavBar;
use crate::components::session_guard::SessionGuard;
use crate::components::stock_panel::StockPanel;
use crate::components::supplies_panel::SuppliesPanel;
use crate::services::WebController;
use crate::state::nav::Section;

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let controller = expect_context::<WebController>();
    let nav = controller.stores.nav;

    Effect::new(move || {
        let controller = controller.clone();
        spawn_local(async move { controller.activate_section(Section::Dashboard).await });
    });

    let sections = Section::ALL
        .into_iter()
        .map(|section| {
            let body = match section {
                Section::Dashboard => view! { <DashboardPanel/> }.into_any(),
                Section::FamilyRegistration => view! { <FamilyFormPanel/> }.into_any(),
                Section::Deliveries => view! { <DeliveryFormPanel/> }.into_any(),
                Section::FamilySearch => view! { <FamilySearchPanel/> }.into_any(),
                Section::History => view! { <DeliveryHistoryPanel/> }.into_any(),
                Section::SupplyItems => view! { <SuppliesPanel/> }.into_any(),
                Section::Kits => view! { <KitsPanel/> }.into_any(),
                Section::Stock => view! { <StockPanel/> }.into_any(),
            };
            view! {
                <section
                    id=section.id()
                    class="section"
                    class:active=move || nav.with(|n| n.is_visible(section))
                    class:hidden=move || !nav.with(|n| n.is_visible(section))
                >
                    <h2>{section.title()}</h2>
                    {body}
                </section>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="workspace">
            <NavBar/>
            <main class="workspace__content">{sections}</main>
            <SessionGuard/>
        </div>
    }
}
