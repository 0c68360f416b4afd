//! Family search box and results table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::data_table::DataTable;
use crate::services::WebController;
use crate::util::rows::RowAction;

#[component]
pub fn FamilySearchPanel() -> impl IntoView {
    let controller = expect_context::<WebController>();
    let families = controller.stores.families;

    let on_search = {
        let controller = controller.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let controller = controller.clone();
            spawn_local(async move { controller.search_families().await });
        }
    };
    let on_clear = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn_local(async move { controller.clear_search().await });
        }
    };
    let on_action = Callback::new(move |action: RowAction| match action {
        RowAction::EditFamily(id) => controller.edit_family(id),
        RowAction::FamilyDetails(id) => {
            let controller = controller.clone();
            spawn_local(async move { controller.show_family_details(id).await });
        }
        RowAction::RemoveKitItem(_) => {}
    });

    view! {
        <form class="search-bar" on:submit=on_search>
            <input
                id="buscaFamilia"
                type="search"
                placeholder="Nome ou CPF"
                prop:value=move || families.with(|s| s.query.clone())
                on:input=move |ev| families.update(|s| s.query = event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary">
                "Buscar"
            </button>
            <button type="button" class="btn btn-secondary" on:click=on_clear>
                "Limpar"
            </button>
        </form>
        <DataTable
            headers=&["Nome", "CPF", "Telefone", "Pessoas", "Última entrega", "Ações"]
            rows=Signal::derive(move || families.with(|s| s.search_rows.clone()))
            on_action=on_action
        />
    }
}
