use web_sys::{FormData, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Guard, Navbar};
use crate::hooks::{use_resource, use_session_context, Resource};
use crate::models::NewHotel;
use crate::routes::Route;
use crate::services::ApiClient;

pub(crate) const REQUIRED_FIELDS: &str = "Complete todos los campos requeridos";

/// Campos crudos del formulario. La validación corre antes de cualquier
/// llamada de red: si falta un campo requerido no se arma ningún request.
#[derive(Debug, Default, Clone)]
pub(crate) struct HotelForm {
    pub name: String,
    pub street_name: String,
    pub street_number: String,
    pub room_amount: String,
    pub rate: String,
    pub description: String,
    pub amenities: Vec<String>,
}

pub(crate) fn parse_hotel_form(form: &HotelForm) -> Result<NewHotel, String> {
    if form.name.is_empty()
        || form.street_name.is_empty()
        || form.street_number.is_empty()
        || form.room_amount.is_empty()
        || form.rate.is_empty()
    {
        return Err(REQUIRED_FIELDS.to_string());
    }

    let street_number = form
        .street_number
        .parse::<i64>()
        .map_err(|_| REQUIRED_FIELDS.to_string())?;
    let room_amount = form
        .room_amount
        .parse::<i64>()
        .map_err(|_| REQUIRED_FIELDS.to_string())?;
    let rate = form
        .rate
        .parse::<f64>()
        .map_err(|_| REQUIRED_FIELDS.to_string())?;

    Ok(NewHotel {
        name: form.name.clone(),
        street_name: form.street_name.clone(),
        street_number,
        room_amount,
        rate,
        description: form.description.clone(),
        amenities: form.amenities.clone(),
    })
}

#[function_component(LoadHotel)]
pub fn load_hotel() -> Html {
    html! {
        <Guard admin=true>
            <LoadHotelInner />
        </Guard>
    }
}

#[function_component(LoadHotelInner)]
fn load_hotel_inner() -> Html {
    let session = use_session_context();
    let navigator = use_navigator().expect("router no montado");

    let amenities = use_resource(|config| async move {
        let api = ApiClient::new(&config);
        let amenities = api.get_amenities().await?;
        Ok((config, amenities))
    });

    let error = use_state(String::new);
    let loaded_hotel = use_state(|| None::<i64>);
    let selected_amenities = use_state(Vec::<String>::new);

    let name_ref = use_node_ref();
    let street_name_ref = use_node_ref();
    let street_number_ref = use_node_ref();
    let room_amount_ref = use_node_ref();
    let rate_ref = use_node_ref();
    let description_ref = use_node_ref();
    let images_ref = use_node_ref();

    let (config, amenity_list) = match &*amenities {
        Resource::Error(e) => {
            return html! {
                <>
                    <Navbar />
                    <div class="fullscreen">{format!("Error: {}", e)}</div>
                </>
            }
        }
        Resource::Loading => {
            return html! {
                <>
                    <Navbar />
                    <h2>{"Cargar Hotel"}</h2>
                </>
            }
        }
        Resource::Ready((config, amenities)) => (config.clone(), amenities.clone()),
    };

    let on_amenity_toggle = {
        let selected = selected_amenities.clone();
        Callback::from(move |(name, checked): (String, bool)| {
            let mut current = (*selected).clone();
            if checked {
                current.push(name);
            } else {
                current.retain(|n| n != &name);
            }
            selected.set(current);
        })
    };

    let on_submit = {
        let session = session.clone();
        let config = config.clone();
        let error = error.clone();
        let loaded_hotel = loaded_hotel.clone();
        let selected = selected_amenities.clone();
        let name_ref = name_ref.clone();
        let street_name_ref = street_name_ref.clone();
        let street_number_ref = street_number_ref.clone();
        let room_amount_ref = room_amount_ref.clone();
        let rate_ref = rate_ref.clone();
        let description_ref = description_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(String::new());

            let value = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value())
                    .unwrap_or_default()
            };
            let form = HotelForm {
                name: value(&name_ref),
                street_name: value(&street_name_ref),
                street_number: value(&street_number_ref),
                room_amount: value(&room_amount_ref),
                rate: value(&rate_ref),
                description: description_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|t| t.value())
                    .unwrap_or_default(),
                amenities: (*selected).clone(),
            };

            let new_hotel = match parse_hotel_form(&form) {
                Ok(hotel) => hotel,
                Err(e) => {
                    error.set(e);
                    return;
                }
            };

            let api = ApiClient::with_session(&config, session.session());
            let error = error.clone();
            let loaded_hotel = loaded_hotel.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.create_hotel(&new_hotel).await {
                    Ok(created) => {
                        log::info!("✅ Hotel creado: {}", created.id);
                        loaded_hotel.set(Some(created.id));
                    }
                    Err(e) => {
                        log::error!("❌ Error creando hotel: {}", e);
                        error.set(e);
                    }
                }
            });
        })
    };

    let on_upload_images = {
        let session = session.clone();
        let config = config.clone();
        let navigator = navigator.clone();
        let error = error.clone();
        let loaded_hotel = loaded_hotel.clone();
        let images_ref = images_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(hotel_id) = *loaded_hotel else {
                return;
            };
            let Some(input) = images_ref.cast::<HtmlInputElement>() else {
                return;
            };

            let Ok(form) = FormData::new() else {
                error.set("Error".to_string());
                return;
            };
            if let Some(files) = input.files() {
                for i in 0..files.length() {
                    if let Some(file) = files.item(i) {
                        let _ = form.append_with_blob("images", &file);
                    }
                }
            }

            let api = ApiClient::with_session(&config, session.session());
            let navigator = navigator.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.upload_hotel_images(hotel_id, form).await {
                    Ok(()) => navigator.push(&Route::Home),
                    Err(e) => {
                        log::error!("❌ Error subiendo imágenes: {}", e);
                        error.set(e);
                    }
                }
            });
        })
    };

    html! {
        <>
            <Navbar />
            <div class="contenedorLoadHotel">
                <h2>{"Cargar Hotel"}</h2>
                <form onsubmit={on_submit}>
                    <div>
                        <label>{"Nombre:"}</label>
                        <input type="text" ref={name_ref} />
                    </div>
                    <div>
                        <label>{"Calle:"}</label>
                        <input type="text" ref={street_name_ref} />
                    </div>
                    <div>
                        <label>{"Número:"}</label>
                        <input type="number" ref={street_number_ref} />
                    </div>
                    <div>
                        <label>{"Cantidad de habitaciones:"}</label>
                        <input type="number" ref={room_amount_ref} />
                    </div>
                    <div>
                        <label>{"Rate:"}</label>
                        <input type="number" step="0.1" ref={rate_ref} />
                    </div>
                    <div>
                        <label>{"Descripción:"}</label>
                        <textarea ref={description_ref}></textarea>
                    </div>
                    <div>
                        <label>{"Amenities:"}</label>
                        { for amenity_list.iter().map(|amenity| {
                            let name = amenity.name.clone();
                            let on_toggle = on_amenity_toggle.clone();
                            let onchange = Callback::from(move |e: Event| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    on_toggle.emit((name.clone(), input.checked()));
                                }
                            });
                            html! {
                                <div key={amenity.name.clone()}>
                                    <input type="checkbox" {onchange} />
                                    {&amenity.name}
                                </div>
                            }
                        }) }
                    </div>
                    if !error.is_empty() {
                        <p class="error-message">{(*error).clone()}</p>
                    }
                    <button type="submit">{"Cargar Hotel"}</button>
                </form>

                if loaded_hotel.is_some() {
                    <form onsubmit={on_upload_images}>
                        <div>
                            <label>{"Subir Imágenes:"}</label>
                            <input type="file" multiple=true ref={images_ref} />
                        </div>
                        <button type="submit">{"Cargar Imágenes"}</button>
                    </form>
                }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> HotelForm {
        HotelForm {
            name: "Hotel 1".into(),
            street_name: "Hotel St".into(),
            street_number: "123".into(),
            room_amount: "10".into(),
            rate: "150.5".into(),
            description: "Frente al mar".into(),
            amenities: vec!["Pileta".into()],
        }
    }

    #[test]
    fn formulario_completo_parsea() {
        let hotel = parse_hotel_form(&full_form()).unwrap();
        assert_eq!(hotel.street_number, 123);
        assert_eq!(hotel.room_amount, 10);
        assert_eq!(hotel.rate, 150.5);
        assert_eq!(hotel.amenities, vec!["Pileta".to_string()]);
    }

    #[test]
    fn campos_vacios_cortan_antes_de_la_red() {
        let result = parse_hotel_form(&HotelForm::default());
        assert_eq!(result.unwrap_err(), REQUIRED_FIELDS);
    }

    #[test]
    fn cada_campo_requerido_es_obligatorio() {
        for missing in ["name", "street_name", "street_number", "room_amount", "rate"] {
            let mut form = full_form();
            match missing {
                "name" => form.name.clear(),
                "street_name" => form.street_name.clear(),
                "street_number" => form.street_number.clear(),
                "room_amount" => form.room_amount.clear(),
                _ => form.rate.clear(),
            }
            assert_eq!(
                parse_hotel_form(&form).unwrap_err(),
                REQUIRED_FIELDS,
                "falta {missing}"
            );
        }
    }

    #[test]
    fn descripcion_es_opcional() {
        let mut form = full_form();
        form.description.clear();
        assert!(parse_hotel_form(&form).is_ok());
    }

    #[test]
    fn numeros_invalidos_no_generan_request() {
        let mut form = full_form();
        form.rate = "abc".into();
        assert_eq!(parse_hotel_form(&form).unwrap_err(), REQUIRED_FIELDS);
    }
}
