use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{Guard, Navbar};
use crate::hooks::{use_resource, use_session_context, Resource};
use crate::models::Reservation;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct UserReservationsProps {
    /// Número de usuario, o el literal "range" para filtrar por fechas.
    pub id: String,
}

pub(crate) fn reservations_of_user(user_id: i64, reservations: &[Reservation]) -> Vec<&Reservation> {
    reservations
        .iter()
        .filter(|r| r.user_id == user_id)
        .collect()
}

/// Filtro por rango de fechas (ISO-8601, comparación lexicográfica).
/// Un extremo vacío no limita ese lado del rango.
pub(crate) fn reservations_in_range<'a>(
    reservations: &[&'a Reservation],
    start: &str,
    end: &str,
) -> Vec<&'a Reservation> {
    reservations
        .iter()
        .copied()
        .filter(|r| (start.is_empty() || r.start_date.as_str() >= start)
            && (end.is_empty() || r.end_date.as_str() <= end))
        .collect()
}

#[function_component(UserReservations)]
pub fn user_reservations(props: &UserReservationsProps) -> Html {
    html! {
        <Guard>
            <UserReservationsInner id={props.id.clone()} />
        </Guard>
    }
}

#[function_component(UserReservationsInner)]
fn user_reservations_inner(props: &UserReservationsProps) -> Html {
    let session = use_session_context();
    let by_range = props.id == "range";

    // En modo rango se listan las reservas del usuario de la sesión
    let user_id = if by_range {
        session.session().profile.as_ref().map(|p| p.id)
    } else {
        props.id.parse::<i64>().ok()
    };

    let start = use_state(String::new);
    let end = use_state(String::new);
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();

    let session_for_fetch = session.clone();
    let data = use_resource(move |config| async move {
        let api = ApiClient::with_session(&config, session_for_fetch.session());
        api.get_reservations().await
    });

    let Some(user_id) = user_id else {
        return html! {
            <>
                <Navbar />
                <div class="fullscreen">{"Error: Error"}</div>
            </>
        };
    };

    let on_filter = {
        let start = start.clone();
        let end = end.clone();
        let start_ref = start_ref.clone();
        let end_ref = end_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value())
                    .unwrap_or_default()
            };
            start.set(value(&start_ref));
            end.set(value(&end_ref));
        })
    };

    match &*data {
        Resource::Error(error) => html! {
            <>
                <Navbar />
                <div class="fullscreen">{format!("Error: {}", error)}</div>
            </>
        },
        Resource::Loading => html! {
            <div>{"Loading..."}</div>
        },
        Resource::Ready(reservations) => {
            let mine = reservations_of_user(user_id, reservations);
            let visible = if by_range {
                reservations_in_range(&mine, &start, &end)
            } else {
                mine
            };

            html! {
                <>
                    <Navbar />
                    <h2>{ if by_range { "Reservas por Rango" } else { "Mis Reservas" } }</h2>
                    if by_range {
                        <form onsubmit={on_filter}>
                            <label>{"Inicio:"}</label>
                            <input type="date" ref={start_ref} />
                            <label>{"Fin:"}</label>
                            <input type="date" ref={end_ref} />
                            <button type="submit">{"Filtrar"}</button>
                        </form>
                    }
                    if visible.is_empty() {
                        <p>{"Sin reservas."}</p>
                    } else {
                        <ul class="list-group">
                            { for visible.iter().map(|reservation| html! {
                                <li key={reservation.id} class="list-group-item">
                                    <p>{format!("Nº Reserva: {}", reservation.id)}</p>
                                    <p>{format!("Inicio: {}", reservation.start_date)}</p>
                                    <p>{format!("Fin: {}", reservation.end_date)}</p>
                                    <p>{format!("Costo: {}", reservation.amount)}</p>
                                </li>
                            }) }
                        </ul>
                    }
                </>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(id: i64, user_id: i64, start: &str, end: &str) -> Reservation {
        Reservation {
            id,
            hotel_id: 1,
            user_id,
            start_date: start.into(),
            end_date: end.into(),
            amount: 100.0,
        }
    }

    #[test]
    fn filtra_las_reservas_del_usuario() {
        let all = vec![
            reservation(1, 1, "2023-01-01", "2023-01-05"),
            reservation(2, 2, "2023-02-01", "2023-02-05"),
        ];
        let mine = reservations_of_user(1, &all);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, 1);
    }

    #[test]
    fn rango_vacio_no_filtra_nada() {
        let all = vec![
            reservation(1, 1, "2023-01-01", "2023-01-05"),
            reservation(2, 1, "2023-06-01", "2023-06-05"),
        ];
        let mine = reservations_of_user(1, &all);
        assert_eq!(reservations_in_range(&mine, "", "").len(), 2);
    }

    #[test]
    fn rango_acota_por_ambos_extremos() {
        let all = vec![
            reservation(1, 1, "2023-01-01", "2023-01-05"),
            reservation(2, 1, "2023-06-01", "2023-06-05"),
            reservation(3, 1, "2023-12-01", "2023-12-05"),
        ];
        let mine = reservations_of_user(1, &all);
        let visible = reservations_in_range(&mine, "2023-02-01", "2023-07-01");
        assert_eq!(visible.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    }
}
