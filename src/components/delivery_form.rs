//! Delivery registration form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::form_field::{SelectField, TextField};
use crate::services::WebController;

#[component]
pub fn DeliveryFormPanel() -> impl IntoView {
    let controller = expect_context::<WebController>();
    let deliveries = controller.stores.deliveries;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if deliveries.with_untracked(|s| s.submitting) {
            return;
        }
        let controller = controller.clone();
        spawn_local(async move { controller.submit_delivery().await });
    };

    view! {
        <form class="delivery-form" on:submit=on_submit>
            <SelectField
                id="familiaEntrega"
                label="Família"
                options=Signal::derive(move || deliveries.with(|s| s.family_options.clone()))
                value=Signal::derive(move || deliveries.with(|s| s.form.family_id.clone()))
                on_change=Callback::new(move |v: String| deliveries.update(|s| s.form.family_id = v))
            />
            <TextField
                id="dataEntrega"
                label="Data da entrega"
                kind="date"
                required=true
                value=Signal::derive(move || deliveries.with(|s| s.form.date.clone()))
                on_input=Callback::new(move |v: String| deliveries.update(|s| s.form.date = v))
            />
            <TextField
                id="quantidadeCestas"
                label="Quantidade de cestas"
                kind="number"
                required=true
                value=Signal::derive(move || deliveries.with(|s| s.form.quantity.clone()))
                on_input=Callback::new(move |v: String| deliveries.update(|s| s.form.quantity = v))
            />
            <TextField
                id="responsavelEntrega"
                label="Responsável pela entrega"
                value=Signal::derive(move || deliveries.with(|s| s.form.delivered_by.clone()))
                on_input=Callback::new(move |v: String| deliveries.update(|s| s.form.delivered_by = v))
            />
            <button type="submit" class="btn btn-primary" disabled=move || deliveries.with(|s| s.submitting)>
                "Registrar entrega"
            </button>
        </form>
    }
}
