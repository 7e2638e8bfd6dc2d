use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::load_hotel::REQUIRED_FIELDS;
use crate::config::load_config;
use crate::hooks::use_session_context;
use crate::models::NewReservation;
use crate::routes::Route;
use crate::services::ApiClient;

pub(crate) const INVALID_RANGE: &str = "La fecha de fin debe ser posterior a la de inicio";

/// Días desde la época civil (1970-01-01), calendario gregoriano proléptico.
fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

fn parse_date(value: &str) -> Option<(i64, i64, i64)> {
    let mut parts = value.split('-');
    let y = parts.next()?.parse::<i64>().ok()?;
    let m = parts.next()?.parse::<i64>().ok()?;
    let d = parts.next()?.parse::<i64>().ok()?;
    if parts.next().is_some() || !(1..=12).contains(&m) || !(1..=31).contains(&d) {
        return None;
    }
    Some((y, m, d))
}

/// Noches entre dos fechas ISO-8601 (`YYYY-MM-DD`).
pub(crate) fn nights_between(start: &str, end: &str) -> Option<i64> {
    let (sy, sm, sd) = parse_date(start)?;
    let (ey, em, ed) = parse_date(end)?;
    Some(days_from_civil(ey, em, ed) - days_from_civil(sy, sm, sd))
}

/// Valida el rango y calcula el costo total de la reserva.
/// Corre antes de cualquier llamada de red.
pub(crate) fn booking_amount(start: &str, end: &str, rate: f64) -> Result<f64, String> {
    if start.is_empty() || end.is_empty() {
        return Err(REQUIRED_FIELDS.to_string());
    }
    let nights = nights_between(start, end).ok_or_else(|| REQUIRED_FIELDS.to_string())?;
    if nights <= 0 {
        return Err(INVALID_RANGE.to_string());
    }
    Ok(nights as f64 * rate)
}

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub hotel_id: i64,
    pub hotel_rate: f64,
}

/// Formulario de reserva del detalle de hotel. Solo se monta con sesión
/// iniciada; postea la reserva a nombre del usuario de la sesión.
#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let session = use_session_context();
    let navigator = use_navigator().expect("router no montado");

    let error = use_state(String::new);
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let error = error.clone();
        let start_ref = start_ref.clone();
        let end_ref = end_ref.clone();
        let hotel_id = props.hotel_id;
        let rate = props.hotel_rate;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(String::new());

            let value = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value())
                    .unwrap_or_default()
            };
            let start = value(&start_ref);
            let end = value(&end_ref);

            let amount = match booking_amount(&start, &end, rate) {
                Ok(amount) => amount,
                Err(e) => {
                    error.set(e);
                    return;
                }
            };

            let Some(user_id) = session.session().profile.as_ref().map(|p| p.id) else {
                return;
            };
            let reservation = NewReservation {
                start_date: start,
                end_date: end,
                user_id,
                hotel_id,
                amount,
            };

            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match load_config().await {
                    Ok(config) => {
                        let api = ApiClient::with_session(&config, session.session());
                        api.create_reservation(&reservation).await
                    }
                    Err(e) => Err(e),
                };

                match result {
                    Ok(created) => {
                        log::info!("✅ Reserva creada: {}", created.id);
                        navigator.push(&Route::ReservationDetails { id: created.id });
                    }
                    Err(e) => {
                        log::error!("❌ Error creando reserva: {}", e);
                        error.set(e);
                    }
                }
            });
        })
    };

    html! {
        <div class="bookingForm">
            <h3>{"Reservar"}</h3>
            <form onsubmit={on_submit}>
                <div>
                    <label>{"Inicio:"}</label>
                    <input type="date" ref={start_ref} />
                </div>
                <div>
                    <label>{"Fin:"}</label>
                    <input type="date" ref={end_ref} />
                </div>
                if !error.is_empty() {
                    <p class="error-message">{(*error).clone()}</p>
                }
                <button type="submit">{"Reservar"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuenta_noches_entre_fechas() {
        assert_eq!(nights_between("2024-11-10", "2024-11-11"), Some(1));
        assert_eq!(nights_between("2024-11-10", "2024-11-15"), Some(5));
        // cruza el límite de año
        assert_eq!(nights_between("2023-12-30", "2024-01-02"), Some(3));
    }

    #[test]
    fn fechas_invalidas_no_cuentan() {
        assert_eq!(nights_between("2024-13-01", "2024-12-02"), None);
        assert_eq!(nights_between("hoy", "2024-12-02"), None);
        assert_eq!(nights_between("2024-11-10", ""), None);
    }

    #[test]
    fn el_costo_es_noches_por_tarifa() {
        assert_eq!(booking_amount("2024-11-10", "2024-11-15", 150.0), Ok(750.0));
    }

    #[test]
    fn fechas_vacias_cortan_antes_de_la_red() {
        assert_eq!(
            booking_amount("", "", 150.0).unwrap_err(),
            REQUIRED_FIELDS
        );
        assert_eq!(
            booking_amount("2024-11-10", "", 150.0).unwrap_err(),
            REQUIRED_FIELDS
        );
    }

    #[test]
    fn la_reserva_no_puede_terminar_antes_de_empezar() {
        assert_eq!(
            booking_amount("2024-11-15", "2024-11-10", 150.0).unwrap_err(),
            INVALID_RANGE
        );
        // mismo día tampoco suma noches
        assert_eq!(
            booking_amount("2024-11-10", "2024-11-10", 150.0).unwrap_err(),
            INVALID_RANGE
        );
    }
}
