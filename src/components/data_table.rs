//! Generic table rendering row descriptors.
//!
//! DESIGN
//! ======
//! Rows arrive fully mapped from page state; this component only turns
//! cells into markup and forwards action clicks to the owning section.

use leptos::prelude::*;

use crate::util::rows::{Cell, RowAction, TableRow};

#[component]
pub fn DataTable(
    headers: &'static [&'static str],
    #[prop(into)] rows: Signal<Vec<TableRow>>,
    #[prop(optional)] on_action: Option<Callback<RowAction>>,
) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>{headers.iter().map(|h| view! { <th>{*h}</th> }).collect::<Vec<_>>()}</tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|row| (row.key.clone(), row.texts())
                    children=move |row| {
                        view! {
                            <tr>
                                {row.cells.into_iter().map(|cell| render_cell(cell, on_action)).collect::<Vec<_>>()}
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

fn render_cell(cell: Cell, on_action: Option<Callback<RowAction>>) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
        Cell::Wide { text, span } => {
            view! { <td class="data-table__message" colspan=span.to_string()>{text}</td> }.into_any()
        }
        Cell::Actions(actions) => view! {
            <td class="data-table__actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        view! {
                            <button
                                class=format!("btn btn-sm {}", action.css_class())
                                on:click=move |_| {
                                    if let Some(on_action) = on_action {
                                        on_action.run(action);
                                    }
                                }
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </td>
        }
        .into_any(),
    }
}
