use yew::prelude::*;

use crate::components::Navbar;
use crate::hooks::{use_resource, use_session_context, Resource};
use crate::services::ApiClient;
use crate::session::{can_access, ACCESS_DENIED};

#[derive(Properties, PartialEq)]
pub struct ReservationDetailsProps {
    pub id: i64,
}

/// Detalle de una reserva recién creada (o consultada por número).
#[function_component(ReservationDetails)]
pub fn reservation_details(props: &ReservationDetailsProps) -> Html {
    let session = use_session_context();

    let id = props.id;
    let session_for_fetch = session.clone();
    let reservation = use_resource(move |config| async move {
        let api = ApiClient::with_session(&config, session_for_fetch.session());
        api.get_reservation(id).await
    });

    match &*reservation {
        Resource::Error(error) => html! {
            <>
                <Navbar />
                <p class="fullscreen">{error.clone()}</p>
            </>
        },
        Resource::Loading => html! {
            <div>{"Loading..."}</div>
        },
        Resource::Ready(_) if !can_access(session.session(), None) => html! {
            <>
                <Navbar />
                <p class="fullscreen">{ACCESS_DENIED}</p>
            </>
        },
        Resource::Ready(reservation) => html! {
            <>
                <Navbar />
                <div class="reservationDetail">
                    <h3>{"Detalle de Reserva"}</h3>
                    <p>{format!("Nº Reserva: {}", reservation.id)}</p>
                    <p>{format!("Hotel: {}", reservation.hotel_id)}</p>
                    <p>{format!("Inicio: {}", reservation.start_date)}</p>
                    <p>{format!("Fin: {}", reservation.end_date)}</p>
                    <p>{format!("Costo total: ${}", reservation.amount)}</p>
                </div>
            </>
        },
    }
}
