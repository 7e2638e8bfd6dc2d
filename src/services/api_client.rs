// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Una instancia por vista, construida con la config remota ya resuelta.
// Si la sesión tiene token, las llamadas protegidas lo adjuntan como Bearer.
// ============================================================================

use gloo_net::http::{Request, Response};
use web_sys::FormData;

use crate::config::RemoteConfig;
use crate::models::{
    Amenity, ApiError, CreatedHotel, Hotel, LoginRequest, LoginResponse, NewAmenity, NewHotel,
    NewReservation, Reservation, SignupRequest, UserProfile,
};
use crate::session::Session;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            base_url: config.api_url.clone(),
            token: None,
        }
    }

    /// Cliente con las credenciales de la sesión actual.
    pub fn with_session(config: &RemoteConfig, session: &Session) -> Self {
        Self {
            base_url: config.api_url.clone(),
            token: session.token.clone(),
        }
    }

    fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// POST /login. El backend responde 202 con `{token, user}`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, String> {
        let url = format!("{}/login", self.base_url);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() != 202 {
            return Err(error_from_response(response).await);
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// POST /user (registro). Éxito es 201.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), String> {
        let url = format!("{}/user", self.base_url);
        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() != 201 {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    pub async fn get_hotels(&self) -> Result<Vec<Hotel>, String> {
        let url = format!("{}/hotel", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Vec<Hotel>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn get_hotel(&self, id: i64) -> Result<Hotel, String> {
        let url = format!("{}/hotel/{}", self.base_url, id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Hotel>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// POST /hotel. Éxito es 201 con `{id}` del hotel creado.
    pub async fn create_hotel(&self, hotel: &NewHotel) -> Result<CreatedHotel, String> {
        let url = format!("{}/hotel", self.base_url);
        let mut builder = Request::post(&url);
        if let Some(auth) = self.bearer() {
            builder = builder.header("Authorization", &auth);
        }

        let response = builder
            .json(hotel)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() != 201 {
            return Err(error_from_response(response).await);
        }
        response
            .json::<CreatedHotel>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn delete_hotel(&self, id: i64) -> Result<(), String> {
        let url = format!("{}/hotel/{}", self.base_url, id);
        let mut builder = Request::delete(&url);
        if let Some(auth) = self.bearer() {
            builder = builder.header("Authorization", &auth);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    pub async fn get_amenities(&self) -> Result<Vec<Amenity>, String> {
        let url = format!("{}/amenity", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err("Error fetching amenities".to_string());
        }
        response
            .json::<Vec<Amenity>>()
            .await
            .map_err(|_| "Error fetching amenities".to_string())
    }

    /// POST /amenity. Éxito es 201.
    pub async fn create_amenity(&self, amenity: &NewAmenity) -> Result<(), String> {
        let url = format!("{}/amenity", self.base_url);
        let mut builder = Request::post(&url);
        if let Some(auth) = self.bearer() {
            builder = builder.header("Authorization", &auth);
        }

        let response = builder
            .json(amenity)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() != 201 {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    pub async fn get_reservations(&self) -> Result<Vec<Reservation>, String> {
        let url = format!("{}/reservation", self.base_url);
        let mut builder = Request::get(&url);
        if let Some(auth) = self.bearer() {
            builder = builder.header("Authorization", &auth);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Vec<Reservation>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// POST /reservation. Éxito es 201 con la reserva creada.
    pub async fn create_reservation(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, String> {
        let url = format!("{}/reservation", self.base_url);
        let mut builder = Request::post(&url);
        if let Some(auth) = self.bearer() {
            builder = builder.header("Authorization", &auth);
        }

        let response = builder
            .json(reservation)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() != 201 {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Reservation>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn get_reservation(&self, id: i64) -> Result<Reservation, String> {
        let url = format!("{}/reservation/{}", self.base_url, id);
        let mut builder = Request::get(&url);
        if let Some(auth) = self.bearer() {
            builder = builder.header("Authorization", &auth);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<Reservation>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn get_user(&self, id: i64) -> Result<UserProfile, String> {
        let url = format!("{}/user/{}", self.base_url, id);
        let mut builder = Request::get(&url);
        if let Some(auth) = self.bearer() {
            builder = builder.header("Authorization", &auth);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<UserProfile>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// POST /hotel/:id/images (multipart). Las imágenes van en el campo `images`.
    pub async fn upload_hotel_images(&self, hotel_id: i64, form: FormData) -> Result<(), String> {
        let url = format!("{}/hotel/{}/images", self.base_url, hotel_id);
        let mut builder = Request::post(&url);
        if let Some(auth) = self.bearer() {
            builder = builder.header("Authorization", &auth);
        }

        let response = builder
            .body(form)
            .map_err(|e| format!("Request error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    /// URL pública de una imagen de hotel.
    pub fn image_url(&self, image_id: &str) -> String {
        format!("{}/image/{}", self.base_url, image_id)
    }
}

/// Extrae el campo `error` del cuerpo JSON de una respuesta fallida;
/// si no hay cuerpo parseable cae al genérico "Error".
pub(crate) fn extract_error(body: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| "Error".to_string())
}

async fn error_from_response(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = extract_error(&body);
    log::error!("❌ HTTP {}: {}", status, message);
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrae_el_campo_error_del_cuerpo() {
        assert_eq!(extract_error(r#"{"error":"Hotel not found"}"#), "Hotel not found");
    }

    #[test]
    fn cuerpo_sin_campo_error_cae_al_generico() {
        assert_eq!(extract_error(r#"{"message":"boom"}"#), "Error");
        assert_eq!(extract_error(""), "Error");
        assert_eq!(extract_error("<html>"), "Error");
    }
}
