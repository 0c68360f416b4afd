//! Family registration form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::form_field::{TextAreaField, TextField};
use crate::net::types::FamilyForm;
use crate::services::WebController;

#[component]
pub fn FamilyFormPanel() -> impl IntoView {
    let controller = expect_context::<WebController>();
    let families = controller.stores.families;

    let field = move |get: fn(&FamilyForm) -> String| Signal::derive(move || families.with(|s| get(&s.form)));
    let setter = move |set: fn(&mut FamilyForm, String)| {
        Callback::new(move |value: String| families.update(|s| set(&mut s.form, value)))
    };

    let on_birth_date = {
        let controller = controller.clone();
        Callback::new(move |value: String| controller.set_birth_date(value))
    };
    let on_submit = {
        let controller = controller.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if families.with_untracked(|s| s.submitting) {
                return;
            }
            let controller = controller.clone();
            spawn_local(async move { controller.submit_family().await });
        }
    };
    let on_clear = move |_| controller.clear_family_form();

    view! {
        <form class="family-form" on:submit=on_submit>
            <TextField
                id="responsavelNome"
                label="Nome do responsável"
                required=true
                value=field(|f| f.responsible_name.clone())
                on_input=setter(|f, v| f.responsible_name = v)
            />
            <TextField
                id="responsavelCPF"
                label="CPF"
                required=true
                value=field(|f| f.cpf.clone())
                on_input=setter(|f, v| f.cpf = v)
            />
            <TextField
                id="responsavelNascimento"
                label="Data de nascimento"
                kind="date"
                value=field(|f| f.birth_date.clone())
                on_input=on_birth_date
            />
            <div class="form-group">
                <label for="responsavelIdade">"Idade"</label>
                <input id="responsavelIdade" type="text" readonly prop:value=move || families.with(|s| s.form.age.clone()) />
            </div>
            <TextField
                id="responsavelGenero"
                label="Gênero"
                value=field(|f| f.gender.clone())
                on_input=setter(|f, v| f.gender = v)
            />
            <TextField
                id="responsavelEndereco"
                label="Endereço"
                value=field(|f| f.address.clone())
                on_input=setter(|f, v| f.address = v)
            />
            <TextField
                id="telefone"
                label="Telefone"
                kind="tel"
                value=field(|f| f.phone.clone())
                on_input=setter(|f, v| f.phone = v)
            />
            <TextField
                id="numeroPessoas"
                label="Número de pessoas"
                kind="number"
                required=true
                value=field(|f| f.household_size.clone())
                on_input=setter(|f, v| f.household_size = v)
            />
            <TextField
                id="numeroFilhos"
                label="Número de filhos"
                kind="number"
                value=field(|f| f.child_count.clone())
                on_input=setter(|f, v| f.child_count = v)
            />
            <TextAreaField
                id="observacoes"
                label="Observações"
                value=field(|f| f.notes.clone())
                on_input=setter(|f, v| f.notes = v)
            />
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || families.with(|s| s.submitting)>
                    "Salvar cadastro"
                </button>
                <button type="button" class="btn btn-secondary" on:click=on_clear>
                    "Limpar"
                </button>
            </div>
        </form>
    }
}
