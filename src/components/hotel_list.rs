use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::hooks::{use_resource, Resource};
use crate::routes::Route;
use crate::services::ApiClient;

#[function_component(HotelList)]
pub fn hotel_list() -> Html {
    let hotels = use_resource(|config| async move {
        let api = ApiClient::new(&config);
        let hotels = api.get_hotels().await?;
        Ok((api, hotels))
    });

    match &*hotels {
        Resource::Error(error) => html! {
            <>
                <Navbar />
                <div class="fullscreen">{format!("Error: {}", error)}</div>
            </>
        },
        Resource::Loading => html! {
            <>
                <Navbar />
                <h2>{"Hoteles"}</h2>
            </>
        },
        Resource::Ready((_, hotels)) if hotels.is_empty() => html! {
            <>
                <Navbar />
                <h2>{"Hoteles"}</h2>
                <p class="fullscreen">{"No hay hoteles disponibles"}</p>
            </>
        },
        Resource::Ready((api, hotels)) => html! {
            <>
                <Navbar />
                <h2>{"Hoteles"}</h2>
                <div class="row">
                    { for hotels.iter().map(|hotel| {
                        let image = hotel
                            .images
                            .as_ref()
                            .and_then(|images| images.first())
                            .map(|image| api.image_url(&image.id_text()));
                        html! {
                            <div key={hotel.id} class="col-md-4 mb-4">
                                <div class="card">
                                    if let Some(src) = image {
                                        <img
                                            class="card-img-top"
                                            alt={format!("Image for {}", hotel.name)}
                                            {src}
                                        />
                                    }
                                    <div class="card-body">
                                        <h5 class="card-title">
                                            <Link<Route> to={Route::HotelDetails { id: hotel.id }}>
                                                {&hotel.name}
                                            </Link<Route>>
                                        </h5>
                                        <p class="card-text">
                                            {format!("Dirección: {} {}", hotel.street_name, hotel.street_number)}
                                        </p>
                                        <p class="card-text">{format!("${}", hotel.rate)}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </>
        },
    }
}
