use web_sys::{window, HtmlInputElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::config::load_config;
use crate::hooks::use_session_context;
use crate::routes::Route;
use crate::services::ApiClient;

const LOGIN_FAILED: &str = "Invalid email or password";

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session_context();
    let navigator = use_navigator().expect("router no montado");

    let loading = use_state(|| false);
    let error = use_state(String::new);
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let loading = loading.clone();
        let error = error.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value();
            let password = password_input.value();

            loading.set(true);
            error.set(String::new());

            let session = session.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match load_config().await {
                    Ok(config) => ApiClient::new(&config).login(&email, &password).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(response) => {
                        log::info!("✅ Login exitoso: {}", response.user.email);
                        session.login.emit((response.user, response.token));
                        loading.set(false);
                        navigator.push(&Route::Home);
                    }
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        error.set(LOGIN_FAILED.to_string());
                        loading.set(false);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message(
                                "Login failed. Please check your email and password.",
                            );
                        }
                    }
                }
            });
        })
    };

    let go_signup = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Signup))
    };

    html! {
        <>
            <Navbar />
            <div>
                <h2>{"Inicio de Sesion"}</h2>
                <form onsubmit={on_submit}>
                    <div>
                        <label>{"Email:"}</label>
                        <input type="email" ref={email_ref} />
                    </div>
                    <div>
                        <label>{"Password:"}</label>
                        <input type="password" ref={password_ref} />
                    </div>
                    if !error.is_empty() {
                        <p class="error-message">{(*error).clone()}</p>
                    }
                    <button type="submit" disabled={*loading}>
                        { if *loading { "Cargando..." } else { "Iniciar Sesion" } }
                    </button>
                </form>
            </div>
            <div>
                <p>{"¿Aun no tienes una cuenta?"}</p>
                <button onclick={go_signup}>{"Registrate"}</button>
            </div>
        </>
    }
}
