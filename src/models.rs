use serde::{Deserialize, Serialize};

/// Rol de un usuario. El backend lo entrega como string; cualquier valor
/// desconocido se conserva pero nunca otorga permisos de administrador.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Customer,
    Other(String),
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Admin" => Role::Admin,
            "Customer" => Role::Customer,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "Admin".to_string(),
            Role::Customer => "Customer".to_string(),
            Role::Other(value) => value,
        }
    }
}

/// Perfil de usuario. Snapshot inmutable: se reemplaza entero en cada login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelImage {
    pub id: serde_json::Value,
}

impl HotelImage {
    /// Id como texto para armar la URL de la imagen.
    pub fn id_text(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub street_name: String,
    pub street_number: i64,
    #[serde(default)]
    pub room_amount: i64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Option<Vec<HotelImage>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub hotel_id: i64,
    pub user_id: i64,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewHotel {
    pub name: String,
    pub street_name: String,
    pub street_number: i64,
    pub room_amount: i64,
    pub rate: f64,
    pub description: String,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAmenity {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReservation {
    pub start_date: String,
    pub end_date: String,
    pub user_id: i64,
    pub hotel_id: i64,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedHotel {
    pub id: i64,
}

/// Cuerpo de error que devuelve el backend en respuestas no-2xx.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_conocido_se_parsea() {
        let admin: Role = serde_json::from_str("\"Admin\"").unwrap();
        let customer: Role = serde_json::from_str("\"Customer\"").unwrap();
        assert!(admin.is_admin());
        assert!(!customer.is_admin());
    }

    #[test]
    fn role_desconocido_nunca_es_admin() {
        for raw in ["\"SuperAdmin\"", "\"admin\"", "\"\"", "\"User\""] {
            let role: Role = serde_json::from_str(raw).unwrap();
            assert!(!role.is_admin(), "{raw} no debe ser Admin");
        }
    }

    #[test]
    fn role_desconocido_conserva_el_string_original() {
        let role: Role = serde_json::from_str("\"Gerente\"").unwrap();
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"Gerente\"");
    }

    #[test]
    fn perfil_round_trip_por_storage() {
        let profile = UserProfile {
            id: 1,
            name: "John".into(),
            last_name: "Doe".into(),
            dni: "123456".into(),
            email: "johndoe@email.com".into(),
            role: Role::Customer,
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }

    #[test]
    fn hotel_parsea_con_campos_minimos() {
        let hotel: Hotel = serde_json::from_str(
            r#"{"id":1,"name":"Hotel 1","street_name":"Hotel St","street_number":123}"#,
        )
        .unwrap();
        assert_eq!(hotel.name, "Hotel 1");
        assert_eq!(hotel.street_number, 123);
        assert!(hotel.images.is_none());
    }

    #[test]
    fn imagen_acepta_id_string_o_numerico() {
        let img: HotelImage = serde_json::from_str(r#"{"id":"img1"}"#).unwrap();
        assert_eq!(img.id_text(), "img1");
        let img: HotelImage = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(img.id_text(), "7");
    }
}
