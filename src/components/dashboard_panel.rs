//! Dashboard counters and latest deliveries.

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::services::WebController;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let dashboard = expect_context::<WebController>().stores.dashboard;

    let counter = move |label: &'static str, pick: fn(&crate::state::dashboard::DashboardCounters) -> String| {
        view! {
            <div class="stat-card">
                <span class="stat-card__value">{move || dashboard.with(|d| pick(&d.counters))}</span>
                <span class="stat-card__label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="stats-grid">
            {counter("Famílias cadastradas", |c| c.total_families.clone())}
            {counter("Cestas entregues no mês", |c| c.baskets_this_month.clone())}
            {counter("Pessoas atendidas", |c| c.total_people.clone())}
            {counter("Cestas em estoque", |c| c.baskets_in_stock.clone())}
        </div>
        <h3>"Últimas entregas"</h3>
        <DataTable
            headers=&["Data", "Família", "Responsável", "Quantidade"]
            rows=Signal::derive(move || dashboard.with(|d| d.recent_rows.clone()))
        />
    }
}
