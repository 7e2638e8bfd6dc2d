use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::hooks::{use_resource, use_session_context, Resource};
use crate::models::Role;
use crate::routes::Route;
use crate::services::ApiClient;
use crate::session::{can_access, ACCESS_DENIED};

#[derive(Properties, PartialEq)]
pub struct UserDetailsProps {
    pub id: i64,
}

#[function_component(UserDetails)]
pub fn user_details(props: &UserDetailsProps) -> Html {
    let session = use_session_context();
    let navigator = use_navigator().expect("router no montado");

    let id = props.id;
    let session_for_fetch = session.clone();
    let user = use_resource(move |config| async move {
        let api = ApiClient::with_session(&config, session_for_fetch.session());
        api.get_user(id).await
    });

    match &*user {
        Resource::Error(error) => html! {
            <>
                <Navbar />
                <p class="fullscreen">{error.clone()}</p>
            </>
        },
        Resource::Loading => html! {
            <div>{"Loading..."}</div>
        },
        Resource::Ready(_) if !can_access(session.session(), Some(&Role::Admin)) => html! {
            <>
                <Navbar />
                <p class="fullscreen">{ACCESS_DENIED}</p>
            </>
        },
        Resource::Ready(user) => {
            let see_reservations = {
                let navigator = navigator.clone();
                let id = user.id;
                Callback::from(move |_| {
                    navigator.push(&Route::UserReservations { id: id.to_string() })
                })
            };

            html! {
                <>
                    <Navbar />
                    <div class="UserDetail">
                        <h3>{"Perfil de Usuario"}</h3>
                        <p>{format!("Nombre: {}", user.name)}</p>
                        <p>{format!("Apellido: {}", user.last_name)}</p>
                        <p>{format!("DNI: {}", user.dni)}</p>
                        <p>{format!("Email: {}", user.email)}</p>
                        <p>{format!("Número de usuario: {}", user.id)}</p>
                        <button onclick={see_reservations}>{"Ver Reservas"}</button>
                    </div>
                </>
            }
        }
    }
}
