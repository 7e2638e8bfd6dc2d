use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{BookingForm, Navbar};
use crate::hooks::{use_resource, use_session_context, Resource};
use crate::routes::Route;
use crate::services::ApiClient;
use crate::session::{can_access, ACCESS_DENIED};

#[derive(Properties, PartialEq)]
pub struct HotelDetailsProps {
    pub id: i64,
}

#[function_component(HotelDetails)]
pub fn hotel_details(props: &HotelDetailsProps) -> Html {
    let session = use_session_context();
    let navigator = use_navigator().expect("router no montado");

    let id = props.id;
    let hotel = use_resource(move |config| async move {
        let api = ApiClient::new(&config);
        let hotel = api.get_hotel(id).await?;
        Ok((config, hotel))
    });

    match &*hotel {
        Resource::Error(error) => html! {
            <div>{format!("Error: {}", error)}</div>
        },
        Resource::Loading => html! {
            <div>{"Loading..."}</div>
        },
        Resource::Ready(_) if !can_access(session.session(), None) => html! {
            <>
                <Navbar />
                <p>{ACCESS_DENIED}</p>
            </>
        },
        Resource::Ready((config, hotel)) => {
            let is_admin = session
                .session()
                .profile
                .as_ref()
                .map(|p| p.role.is_admin())
                .unwrap_or(false);

            let on_delete = {
                let config = config.clone();
                let session = session.clone();
                let navigator = navigator.clone();
                Callback::from(move |_| {
                    let api = ApiClient::with_session(&config, session.session());
                    let navigator = navigator.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match api.delete_hotel(id).await {
                            Ok(()) => navigator.push(&Route::Home),
                            Err(e) => log::error!("❌ Error borrando hotel: {}", e),
                        }
                    });
                })
            };

            html! {
                <>
                    <Navbar />
                    <h1>{&hotel.name}</h1>
                    <p>{format!("Dirección: {} {}", hotel.street_name, hotel.street_number)}</p>
                    <p>{format!("Description: {}", hotel.description)}</p>
                    <p>{format!("Precio por noche: ${}", hotel.rate)}</p>
                    <BookingForm hotel_id={id} hotel_rate={hotel.rate} />
                    if is_admin {
                        <div class="adminControls">
                            <button>{"Modificar Hotel"}</button>
                            <button onclick={on_delete}>{"Borrar Hotel"}</button>
                        </div>
                    }
                </>
            }
        }
    }
}
