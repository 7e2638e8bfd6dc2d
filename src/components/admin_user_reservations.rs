use std::collections::BTreeMap;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::hooks::{use_resource, use_session_context, Resource};
use crate::models::{Reservation, Role};
use crate::routes::Route;
use crate::services::ApiClient;
use crate::session::{can_access, ACCESS_DENIED};

/// Agrupa reservas por usuario, ordenadas por número de usuario.
pub(crate) fn group_by_user(reservations: &[Reservation]) -> BTreeMap<i64, Vec<&Reservation>> {
    let mut groups: BTreeMap<i64, Vec<&Reservation>> = BTreeMap::new();
    for reservation in reservations {
        groups.entry(reservation.user_id).or_default().push(reservation);
    }
    groups
}

#[function_component(AdminUserReservations)]
pub fn admin_user_reservations() -> Html {
    let session = use_session_context();

    let session_for_fetch = session.clone();
    let data = use_resource(move |config| async move {
        let api = ApiClient::with_session(&config, session_for_fetch.session());
        api.get_reservations().await
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
        Resource::Ready(reservations) => {
            let groups = group_by_user(reservations);
            html! {
                <>
                    <Navbar />
                    <h2>{"Reservas por usuario"}</h2>
                    <div class="containerReservations">
                        <ul class="list-group">
                            { for groups.iter().map(|(user_id, reservations)| html! {
                                <li key={*user_id} class="list-group-item list-group-item-dark">
                                    <Link<Route> to={Route::UserDetails { id: *user_id }}>
                                        <h3>{format!("Nº Usuario: {}", user_id)}</h3>
                                    </Link<Route>>
                                    <ul class="list-group">
                                        { for reservations.iter().map(|reservation| html! {
                                            <li key={reservation.id} class="list-group-item">
                                                <p>{format!("Nº Reserva: {}", reservation.id)}</p>
                                                <p>{format!("Inicio: {}", reservation.start_date)}</p>
                                                <p>{format!("Fin: {}", reservation.end_date)}</p>
                                                <p>{format!("Costo: {}", reservation.amount)}</p>
                                            </li>
                                        }) }
                                    </ul>
                                </li>
                            }) }
                        </ul>
                    </div>
                </>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(id: i64, user_id: i64) -> Reservation {
        Reservation {
            id,
            hotel_id: 1,
            user_id,
            start_date: "2023-01-01".into(),
            end_date: "2023-01-05".into(),
            amount: 100.0,
        }
    }

    #[test]
    fn agrupa_y_ordena_por_usuario() {
        let all = vec![reservation(1, 20), reservation(2, 10), reservation(3, 20)];
        let groups = group_by_user(&all);
        let users: Vec<i64> = groups.keys().copied().collect();
        assert_eq!(users, vec![10, 20]);
        assert_eq!(groups[&20].len(), 2);
    }

    #[test]
    fn sin_reservas_no_hay_grupos() {
        assert!(group_by_user(&[]).is_empty());
    }
}
