use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    AdminHotelReservations, AdminUserReservations, HotelDetails, HotelList, LoadAmenity,
    LoadHotel, Login, Profile, ReservationDetails, Signup, UserDetails, UserReservations,
};

#[derive(Routable, Debug, Clone, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    // El segmento fijo va antes que el dinámico /hotel/:id.
    #[at("/hotel/availability")]
    Availability,
    #[at("/hotel/:id")]
    HotelDetails { id: i64 },
    #[at("/reservation/:id")]
    ReservationDetails { id: i64 },
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/profile")]
    Profile,
    #[at("/loadhotel")]
    LoadHotel,
    #[at("/loadamenity")]
    LoadAmenity,
    #[at("/user/reservations/:id")]
    UserReservations { id: String },
    #[at("/user/:id")]
    UserDetails { id: i64 },
    #[at("/admin/reservations/hotel")]
    AdminHotelReservations,
    #[at("/admin/reservations/user")]
    AdminUserReservations,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html!(<HotelList />),
        Route::Availability => html!(<HotelList />),
        Route::HotelDetails { id } => html!(<HotelDetails {id} />),
        Route::ReservationDetails { id } => html!(<ReservationDetails {id} />),
        Route::Login => html!(<Login />),
        Route::Signup => html!(<Signup />),
        Route::Profile => html!(<Profile />),
        Route::LoadHotel => html!(<LoadHotel />),
        Route::LoadAmenity => html!(<LoadAmenity />),
        Route::UserReservations { id } => html!(<UserReservations {id} />),
        Route::UserDetails { id } => html!(<UserDetails {id} />),
        Route::AdminHotelReservations => html!(<AdminHotelReservations />),
        Route::AdminUserReservations => html!(<AdminUserReservations />),
        Route::NotFound => html!(<h1>{"404 - Not Found"}</h1>),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_gana_al_segmento_dinamico() {
        assert_eq!(
            Route::recognize("/hotel/availability"),
            Some(Route::Availability)
        );
        assert_eq!(
            Route::recognize("/hotel/7"),
            Some(Route::HotelDetails { id: 7 })
        );
    }

    #[test]
    fn detalle_de_reserva_por_numero() {
        assert_eq!(
            Route::recognize("/reservation/42"),
            Some(Route::ReservationDetails { id: 42 })
        );
    }
}
