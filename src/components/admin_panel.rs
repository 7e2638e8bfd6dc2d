use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Accesos de administración. Solo se monta desde el perfil de un Admin.
#[function_component(AdminPanel)]
pub fn admin_panel() -> Html {
    html! {
        <div class="adminPanel">
            <h3>{"Panel de Administración"}</h3>
            <Link<Route> to={Route::LoadHotel}>
                <button>{"Nuevo Hotel"}</button>
            </Link<Route>>
            <Link<Route> to={Route::LoadAmenity}>
                <button>{"Nuevo Amenity"}</button>
            </Link<Route>>
            <Link<Route> to={Route::AdminHotelReservations}>
                <button>{"Ver reservas por Hotel"}</button>
            </Link<Route>>
            <Link<Route> to={Route::AdminUserReservations}>
                <button>{"Ver reservas por usuario"}</button>
            </Link<Route>>
        </div>
    }
}
