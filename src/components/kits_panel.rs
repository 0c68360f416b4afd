//! Kit management and kit composition.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::data_table::DataTable;
use crate::components::form_field::{SelectField, TextField};
use crate::services::WebController;
use crate::util::rows::RowAction;

#[component]
pub fn KitsPanel() -> impl IntoView {
    let controller = expect_context::<WebController>();
    let supplies = controller.stores.supplies;

    let on_submit_kit = {
        let controller = controller.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let controller = controller.clone();
            spawn_local(async move { controller.submit_kit().await });
        }
    };
    let on_submit_item = {
        let controller = controller.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let controller = controller.clone();
            spawn_local(async move { controller.submit_kit_item().await });
        }
    };
    let on_select_kit = {
        let controller = controller.clone();
        Callback::new(move |value: String| {
            let controller = controller.clone();
            spawn_local(async move { controller.select_kit(value).await });
        })
    };
    let on_action = Callback::new(move |action: RowAction| {
        if let RowAction::RemoveKitItem(id) = action {
            let controller = controller.clone();
            spawn_local(async move { controller.remove_kit_item(id).await });
        }
    });

    view! {
        <form class="inline-form" on:submit=on_submit_kit>
            <TextField
                id="kitNome"
                label="Nome do kit"
                value=Signal::derive(move || supplies.with(|s| s.new_kit_name.clone()))
                on_input=Callback::new(move |v: String| supplies.update(|s| s.new_kit_name = v))
            />
            <TextField
                id="kitDescricao"
                label="Descrição"
                value=Signal::derive(move || supplies.with(|s| s.new_kit_description.clone()))
                on_input=Callback::new(move |v: String| supplies.update(|s| s.new_kit_description = v))
            />
            <button type="submit" class="btn btn-primary">
                "Criar kit"
            </button>
        </form>
        {move || supplies.with(|s| s.kit_message.clone()).map(|m| view! { <p class="form-message">{m}</p> })}
        <DataTable
            headers=&["ID", "Nome", "Descrição", "Ativo"]
            rows=Signal::derive(move || supplies.with(|s| s.kit_rows.clone()))
        />

        <h3>"Itens do kit"</h3>
        <form class="inline-form" on:submit=on_submit_item>
            <SelectField
                id="kitSelecionado"
                label="Kit"
                options=Signal::derive(move || supplies.with(|s| s.kit_options.clone()))
                value=Signal::derive(move || supplies.with(|s| s.selected_kit.clone()))
                on_change=on_select_kit
            />
            <SelectField
                id="kitInsumo"
                label="Insumo"
                options=Signal::derive(move || supplies.with(|s| s.supply_options.clone()))
                value=Signal::derive(move || supplies.with(|s| s.selected_supply.clone()))
                on_change=Callback::new(move |v: String| supplies.update(|s| s.selected_supply = v))
            />
            <TextField
                id="kitQuantidade"
                label="Quantidade"
                value=Signal::derive(move || supplies.with(|s| s.item_quantity.clone()))
                on_input=Callback::new(move |v: String| supplies.update(|s| s.item_quantity = v))
            />
            <button type="submit" class="btn btn-primary">
                "Adicionar ao kit"
            </button>
        </form>
        {move || supplies.with(|s| s.kit_item_message.clone()).map(|m| view! { <p class="form-message">{m}</p> })}
        <DataTable
            headers=&["ID", "Insumo", "Quantidade", "Unidade", "Ações"]
            rows=Signal::derive(move || supplies.with(|s| s.kit_item_rows.clone()))
            on_action=on_action
        />
    }
}
