use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::config::load_config;
use crate::models::SignupRequest;
use crate::routes::Route;
use crate::services::ApiClient;

#[function_component(Signup)]
pub fn signup() -> Html {
    let navigator = use_navigator().expect("router no montado");
    let error = use_state(String::new);

    let name_ref = use_node_ref();
    let last_name_ref = use_node_ref();
    let dni_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let navigator = navigator.clone();
        let error = error.clone();
        let refs = [
            name_ref.clone(),
            last_name_ref.clone(),
            dni_ref.clone(),
            email_ref.clone(),
            password_ref.clone(),
        ];

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(String::new());

            let values: Vec<String> = refs
                .iter()
                .filter_map(|r| r.cast::<HtmlInputElement>())
                .map(|input| input.value())
                .collect();
            let [name, last_name, dni, email, password] = match <[String; 5]>::try_from(values) {
                Ok(values) => values,
                Err(_) => return,
            };

            let request = SignupRequest {
                name,
                last_name,
                dni,
                email,
                password,
            };

            let navigator = navigator.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match load_config().await {
                    Ok(config) => ApiClient::new(&config).signup(&request).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(()) => navigator.push(&Route::Login),
                    Err(e) => {
                        log::error!("❌ Error en registro: {}", e);
                        error.set("Error".to_string());
                    }
                }
            });
        })
    };

    html! {
        <>
            <Navbar />
            <div>
                <h2>{"Registrate"}</h2>
                <form onsubmit={on_submit}>
                    <div>
                        <label>{"Nombre:"}</label>
                        <input type="text" ref={name_ref} />
                    </div>
                    <div>
                        <label>{"Apellido:"}</label>
                        <input type="text" ref={last_name_ref} />
                    </div>
                    <div>
                        <label>{"DNI:"}</label>
                        <input type="text" ref={dni_ref} />
                    </div>
                    <div>
                        <label>{"Email:"}</label>
                        <input type="email" ref={email_ref} />
                    </div>
                    <div>
                        <label>{"Clave:"}</label>
                        <input type="password" ref={password_ref} />
                    </div>
                    if !error.is_empty() {
                        <p class="error-message">{(*error).clone()}</p>
                    }
                    <button type="submit">{"Registrate"}</button>
                </form>
            </div>
        </>
    }
}
