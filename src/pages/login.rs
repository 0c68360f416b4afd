//! Sign-in page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::WebController;

#[component]
pub fn LoginPage() -> impl IntoView {
    let controller = expect_context::<WebController>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());

        let controller = controller.clone();
        let username_value = username.get();
        let password_value = password.get();
        spawn_local(async move {
            if let Err(message) = controller.login(&username_value, &password_value).await {
                info.set(message);
                busy.set(false);
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Cestas Básicas"</h1>
                <p class="login-card__subtitle">"Acesso ao sistema"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Usuário"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Senha"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Entrar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
