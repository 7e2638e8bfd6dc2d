use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::load_hotel::REQUIRED_FIELDS;
use crate::components::{Guard, Navbar};
use crate::config::load_config;
use crate::hooks::use_session_context;
use crate::models::NewAmenity;
use crate::routes::Route;
use crate::services::ApiClient;

#[function_component(LoadAmenity)]
pub fn load_amenity() -> Html {
    html! {
        <Guard admin=true>
            <LoadAmenityInner />
        </Guard>
    }
}

#[function_component(LoadAmenityInner)]
fn load_amenity_inner() -> Html {
    let session = use_session_context();
    let navigator = use_navigator().expect("router no montado");

    let error = use_state(String::new);
    let name_ref = use_node_ref();

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let error = error.clone();
        let name_ref = name_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(String::new());

            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            // Validación local antes de tocar la red
            if name.is_empty() {
                error.set(REQUIRED_FIELDS.to_string());
                return;
            }

            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match load_config().await {
                    Ok(config) => {
                        let api = ApiClient::with_session(&config, session.session());
                        api.create_amenity(&NewAmenity { name }).await
                    }
                    Err(e) => Err(e),
                };

                match result {
                    Ok(()) => navigator.push(&Route::Home),
                    Err(e) => {
                        log::error!("❌ Error creando amenity: {}", e);
                        error.set(e);
                    }
                }
            });
        })
    };

    html! {
        <>
            <Navbar />
            <div class="contenedorLoad">
                <h2>{"Cargar Amenity"}</h2>
                <form onsubmit={on_submit}>
                    <div>
                        <label>{"Nombre:"}</label>
                        <input type="text" ref={name_ref} />
                    </div>
                    if !error.is_empty() {
                        <p class="error-message">{(*error).clone()}</p>
                    }
                    <button type="submit">{"Cargar Amenity"}</button>
                </form>
            </div>
        </>
    }
}
