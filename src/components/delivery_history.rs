//! Delivery history with date and family filters.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::data_table::DataTable;
use crate::components::form_field::{SelectField, TextField};
use crate::services::WebController;

#[component]
pub fn DeliveryHistoryPanel() -> impl IntoView {
    let controller = expect_context::<WebController>();
    let deliveries = controller.stores.deliveries;

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move { controller.list_deliveries().await });
    };

    view! {
        <form class="filter-bar" on:submit=on_filter>
            <TextField
                id="dataInicio"
                label="De"
                kind="date"
                value=Signal::derive(move || deliveries.with(|s| s.filter.start_date.clone()))
                on_input=Callback::new(move |v: String| deliveries.update(|s| s.filter.start_date = v))
            />
            <TextField
                id="dataFim"
                label="Até"
                kind="date"
                value=Signal::derive(move || deliveries.with(|s| s.filter.end_date.clone()))
                on_input=Callback::new(move |v: String| deliveries.update(|s| s.filter.end_date = v))
            />
            <SelectField
                id="filtroFamilia"
                label="Família"
                options=Signal::derive(move || deliveries.with(|s| s.filter_options.clone()))
                value=Signal::derive(move || deliveries.with(|s| s.filter.family_id.clone()))
                on_change=Callback::new(move |v: String| deliveries.update(|s| s.filter.family_id = v))
            />
            <button type="submit" class="btn btn-primary">
                "Filtrar"
            </button>
        </form>
        <DataTable
            headers=&["Data", "Família", "Responsável", "Quantidade", "Entregue por"]
            rows=Signal::derive(move || deliveries.with(|s| s.rows.clone()))
        />
    }
}
