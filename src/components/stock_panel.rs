//! Basket stock: balance, entry form and ledger.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::data_table::DataTable;
use crate::components::form_field::{TextAreaField, TextField};
use crate::services::WebController;

#[component]
pub fn StockPanel() -> impl IntoView {
    let controller = expect_context::<WebController>();
    let stock = controller.stores.stock;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if stock.with_untracked(|s| s.submitting) {
            return;
        }
        let controller = controller.clone();
        spawn_local(async move { controller.submit_stock_entry().await });
    };

    view! {
        <div class="stat-card">
            <span class="stat-card__value">{move || stock.with(|s| s.balance_label())}</span>
            <span class="stat-card__label">"Cestas em estoque"</span>
        </div>
        <form class="inline-form" on:submit=on_submit>
            <TextField
                id="estoqueQuantidade"
                label="Quantidade de cestas"
                kind="number"
                value=Signal::derive(move || stock.with(|s| s.form.quantity.clone()))
                on_input=Callback::new(move |v: String| stock.update(|s| s.form.quantity = v))
            />
            <TextField
                id="estoqueFornecedor"
                label="Fornecedor"
                value=Signal::derive(move || stock.with(|s| s.form.supplier.clone()))
                on_input=Callback::new(move |v: String| stock.update(|s| s.form.supplier = v))
            />
            <TextAreaField
                id="estoqueObservacoes"
                label="Observações"
                value=Signal::derive(move || stock.with(|s| s.form.notes.clone()))
                on_input=Callback::new(move |v: String| stock.update(|s| s.form.notes = v))
            />
            <button type="submit" class="btn btn-primary" disabled=move || stock.with(|s| s.submitting)>
                "Registrar entrada"
            </button>
        </form>
        {move || stock.with(|s| s.message.clone()).map(|m| view! { <p class="form-message">{m}</p> })}
        <DataTable
            headers=&["Data", "Entrada", "Saída", "Motivo", "Responsável"]
            rows=Signal::derive(move || stock.with(|s| s.movement_rows.clone()))
        />
    }
}
