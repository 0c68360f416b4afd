//! Labelled inputs and selects bound to page state.

use leptos::prelude::*;

use crate::util::rows::SelectOption;

/// A labelled `<input>`; every keystroke is forwarded to `on_input`.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type=kind
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// A labelled multi-line input.
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <textarea id=id prop:value=move || value.get() on:input=move |ev| on_input.run(event_target_value(&ev))></textarea>
        </div>
    }
}

/// A labelled `<select>` rendered from option descriptors.
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select id=id prop:value=move || value.get() on:change=move |ev| on_change.run(event_target_value(&ev))>
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|o| {
                            let is_selected = o.value == selected;
                            view! {
                                <option value=o.value selected=is_selected>
                                    {o.label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </div>
    }
}
