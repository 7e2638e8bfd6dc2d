use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{AdminPanel, Guard, Navbar};
use crate::hooks::use_session_context;
use crate::routes::Route;

#[function_component(Profile)]
pub fn profile() -> Html {
    html! {
        <Guard>
            <ProfileInner />
        </Guard>
    }
}

#[function_component(ProfileInner)]
fn profile_inner() -> Html {
    let session = use_session_context();
    let navigator = use_navigator().expect("router no montado");

    let Some(profile) = session.session().profile.clone() else {
        // Guard garantiza sesión; sin perfil no hay nada que mostrar
        return html! { <Navbar /> };
    };

    let my_reservations = {
        let navigator = navigator.clone();
        let id = profile.id;
        Callback::from(move |_| {
            navigator.push(&Route::UserReservations { id: id.to_string() })
        })
    };

    let range_reservations = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::UserReservations { id: "range".to_string() })
        })
    };

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session.logout.emit(());
            navigator.push(&Route::Home);
        })
    };

    html! {
        <>
            <Navbar />
            <div class="UserDetail">
                <h3>{"Perfil de Usuario"}</h3>
                <p>{format!("Nombre: {}", profile.name)}</p>
                <p>{format!("Apellido: {}", profile.last_name)}</p>
                <p>{format!("DNI: {}", profile.dni)}</p>
                <p>{format!("Email: {}", profile.email)}</p>
                <p>{format!("Número de usuario: {}", profile.id)}</p>
                if profile.role.is_admin() {
                    <AdminPanel />
                } else {
                    <div class="customerControls">
                        <button onclick={my_reservations}>{"Mis Reservas"}</button>
                        <button onclick={range_reservations}>{"Reservas por Rango"}</button>
                    </div>
                }
                <button onclick={on_logout}>{"Cerrar sesion"}</button>
            </div>
        </>
    }
}
