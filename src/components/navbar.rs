use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session_context;
use crate::routes::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session_context();

    html! {
        <header>
            <div class="container">
                <Link<Route> classes="nav-link" to={Route::Home}>
                    <h1 class="asd">{"MIRANDA HOTELS"}</h1>
                </Link<Route>>
                <div class="contenedorBotones">
                    <Link<Route> classes="nav-link" to={Route::Availability}>
                        <button class="boton">{"Ver Disponibilidad"}</button>
                    </Link<Route>>
                    {
                        match session.session().profile.as_ref().filter(|_| session.session().authenticated) {
                            Some(profile) => html! {
                                <Link<Route> classes="nav-link" to={Route::Profile}>
                                    <button class="boton">{format!("Hola {}", profile.name)}</button>
                                </Link<Route>>
                            },
                            None => html! {
                                <Link<Route> classes="nav-link" to={Route::Login}>
                                    <button class="boton">{"Iniciar sesion"}</button>
                                </Link<Route>>
                            },
                        }
                    }
                </div>
            </div>
        </header>
    }
}
