use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::hooks::{use_resource, use_session_context, Resource};
use crate::models::{Reservation, Role};
use crate::routes::Route;
use crate::services::ApiClient;
use crate::session::{can_access, ACCESS_DENIED};

pub(crate) fn reservations_for_hotel(
    hotel_id: i64,
    reservations: &[Reservation],
) -> Vec<&Reservation> {
    reservations
        .iter()
        .filter(|r| r.hotel_id == hotel_id)
        .collect()
}

#[function_component(AdminHotelReservations)]
pub fn admin_hotel_reservations() -> Html {
    let session = use_session_context();

    // Fetch dependiente: primero reservas, después hoteles
    let session_for_fetch = session.clone();
    let data = use_resource(move |config| async move {
        let api = ApiClient::with_session(&config, session_for_fetch.session());
        let reservations = api.get_reservations().await?;
        let hotels = api.get_hotels().await?;
        Ok((hotels, reservations))
    });

    match &*data {
        Resource::Error(error) => html! {
            <div>{format!("Error: {}", error)}</div>
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
        Resource::Ready((hotels, reservations)) => html! {
            <>
                <Navbar />
                <h2>{"Reservas"}</h2>
                <div class="containerReservations">
                    <ul class="list-group">
                        { for hotels.iter().map(|hotel| {
                            let for_hotel = reservations_for_hotel(hotel.id, reservations);
                            html! {
                                <li key={hotel.id} class="list-group-item list-group-item-dark">
                                    <Link<Route> to={Route::HotelDetails { id: hotel.id }}>
                                        <h3>{&hotel.name}</h3>
                                    </Link<Route>>
                                    if for_hotel.is_empty() {
                                        <p>{"Sin reservas."}</p>
                                    } else {
                                        <ul class="list-group">
                                            { for for_hotel.iter().map(|reservation| html! {
                                                <li key={reservation.id} class="list-group-item">
                                                    <p>{format!("Nº Reserva: {}", reservation.id)}</p>
                                                    <p>{format!("Inicio: {}", reservation.start_date)}</p>
                                                    <p>{format!("Fin: {}", reservation.end_date)}</p>
                                                    <p>{format!("Costo: {}", reservation.amount)}</p>
                                                    <Link<Route> to={Route::UserDetails { id: reservation.user_id }}>
                                                        <p>{format!("Nº Usuario: {}", reservation.user_id)}</p>
                                                    </Link<Route>>
                                                </li>
                                            }) }
                                        </ul>
                                    }
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(id: i64, hotel_id: i64, user_id: i64) -> Reservation {
        Reservation {
            id,
            hotel_id,
            user_id,
            start_date: "2023-01-01".into(),
            end_date: "2023-01-05".into(),
            amount: 600.0,
        }
    }

    #[test]
    fn filtra_reservas_por_hotel() {
        let all = vec![
            reservation(1, 1, 10),
            reservation(2, 2, 10),
            reservation(3, 1, 11),
        ];
        let for_hotel = reservations_for_hotel(1, &all);
        assert_eq!(
            for_hotel.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn hotel_sin_reservas_queda_vacio() {
        let all = vec![reservation(1, 1, 10)];
        assert!(reservations_for_hotel(99, &all).is_empty());
    }
}
