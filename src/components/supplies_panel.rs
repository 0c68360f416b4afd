//! Supply item management: creation form and list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::data_table::DataTable;
use crate::components::form_field::TextField;
use crate::services::WebController;

#[component]
pub fn SuppliesPanel() -> impl IntoView {
    let controller = expect_context::<WebController>();
    let supplies = controller.stores.supplies;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn_local(async move { controller.submit_supply_item().await });
    };

    view! {
        <form class="inline-form" on:submit=on_submit>
            <TextField
                id="insumoNome"
                label="Nome"
                value=Signal::derive(move || supplies.with(|s| s.new_supply_name.clone()))
                on_input=Callback::new(move |v: String| supplies.update(|s| s.new_supply_name = v))
            />
            <TextField
                id="insumoUnidade"
                label="Unidade"
                value=Signal::derive(move || supplies.with(|s| s.new_supply_unit.clone()))
                on_input=Callback::new(move |v: String| supplies.update(|s| s.new_supply_unit = v))
            />
            <button type="submit" class="btn btn-primary">
                "Adicionar insumo"
            </button>
        </form>
        {move || supplies.with(|s| s.supply_message.clone()).map(|m| view! { <p class="form-message">{m}</p> })}
        <DataTable
            headers=&["ID", "Nome", "Unidade", "Ativo"]
            rows=Signal::derive(move || supplies.with(|s| s.supply_rows.clone()))
        />
    }
}
