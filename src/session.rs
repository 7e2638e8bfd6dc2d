// ============================================================================
// SESSION - fuente única de verdad sobre quién está logueado
// ============================================================================
// Es el único módulo que lee y escribe las claves de localStorage.
// Las vistas acceden al estado vía el contexto de hooks/session_context.
// ============================================================================

use crate::models::{Role, UserProfile};
use crate::utils::{
    load_raw, remove_from_storage, save_json, save_raw, STORAGE_KEY_TOKEN,
    STORAGE_KEY_USER_PROFILE,
};

/// Estado de sesión visible para todo el árbol de vistas.
///
/// Invariante: `authenticated == true` implica `profile` presente.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub authenticated: bool,
    pub profile: Option<UserProfile>,
    pub token: Option<String>,
}

impl Session {
    /// Decisión pura de restauración: autenticado si y solo si hay token
    /// y el perfil guardado parsea como JSON válido. Idempotente.
    pub fn restore_from(token: Option<String>, profile_json: Option<&str>) -> Session {
        match (token, profile_json) {
            (Some(token), Some(json)) => match serde_json::from_str::<UserProfile>(json) {
                Ok(profile) => Session {
                    authenticated: true,
                    profile: Some(profile),
                    token: Some(token),
                },
                Err(_) => Session::default(),
            },
            _ => Session::default(),
        }
    }

    /// Lee las claves durables y restaura la sesión si ambas están presentes.
    pub fn restore() -> Session {
        let token = load_raw(STORAGE_KEY_TOKEN);
        let profile = load_raw(STORAGE_KEY_USER_PROFILE);
        let session = Session::restore_from(token, profile.as_deref());
        if session.authenticated {
            log::info!("✅ Sesión restaurada desde storage");
        }
        session
    }

    /// Persiste las credenciales y devuelve la sesión autenticada.
    /// El storage se escribe antes de actualizar el estado: una sesión
    /// autenticada siempre es restaurable.
    pub fn login(profile: UserProfile, token: String) -> Session {
        if let Err(e) = save_raw(STORAGE_KEY_TOKEN, &token) {
            log::error!("❌ No se pudo guardar el token: {}", e);
        }
        if let Err(e) = save_json(STORAGE_KEY_USER_PROFILE, &profile) {
            log::error!("❌ No se pudo guardar el perfil: {}", e);
        }
        Session {
            authenticated: true,
            profile: Some(profile),
            token: Some(token),
        }
    }

    /// Borra las claves durables y devuelve la sesión limpia.
    pub fn logout() -> Session {
        let _ = remove_from_storage(STORAGE_KEY_TOKEN);
        let _ = remove_from_storage(STORAGE_KEY_USER_PROFILE);
        log::info!("👋 Logout");
        Session::default()
    }
}

/// Gate de autorización por vista. Puro y síncrono: nunca dispara red
/// ni redirecciones; la denegación se renderiza en el lugar.
pub fn can_access(session: &Session, required: Option<&Role>) -> bool {
    if !session.authenticated {
        return false;
    }
    match required {
        None => true,
        Some(role) => session
            .profile
            .as_ref()
            .map(|p| &p.role == role)
            .unwrap_or(false),
    }
}

/// Mensaje fijo que renderizan las vistas denegadas.
pub const ACCESS_DENIED: &str = "No puedes acceder a este sitio.";

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: 1,
            name: "John".into(),
            last_name: "Doe".into(),
            dni: "123456".into(),
            email: "johndoe@email.com".into(),
            role,
        }
    }

    fn profile_json(role: &str) -> String {
        format!(
            r#"{{"id":1,"name":"John","last_name":"Doe","dni":"123456","email":"johndoe@email.com","role":"{role}"}}"#
        )
    }

    #[test]
    fn restaura_solo_con_token_y_perfil_valido() {
        let json = profile_json("Customer");
        let session = Session::restore_from(Some("tok".into()), Some(&json));
        assert!(session.authenticated);
        assert_eq!(session.token.as_deref(), Some("tok"));
        assert_eq!(session.profile.unwrap().name, "John");
    }

    #[test]
    fn sin_token_no_hay_sesion() {
        let json = profile_json("Admin");
        let session = Session::restore_from(None, Some(&json));
        assert_eq!(session, Session::default());
    }

    #[test]
    fn sin_perfil_no_hay_sesion() {
        let session = Session::restore_from(Some("tok".into()), None);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn perfil_corrupto_deja_la_sesion_en_default() {
        let session = Session::restore_from(Some("tok".into()), Some("{no json"));
        assert!(!session.authenticated);
        assert!(session.profile.is_none());
    }

    #[test]
    fn restauracion_es_idempotente() {
        let json = profile_json("Customer");
        let a = Session::restore_from(Some("tok".into()), Some(&json));
        let b = Session::restore_from(Some("tok".into()), Some(&json));
        assert_eq!(a, b);
    }

    #[test]
    fn invariante_autenticado_implica_perfil() {
        for (token, json) in [
            (None, None),
            (Some("tok".to_string()), None),
            (Some("tok".to_string()), Some(profile_json("Admin"))),
            (Some("tok".to_string()), Some("basura".to_string())),
        ] {
            let session = Session::restore_from(token, json.as_deref());
            assert_eq!(session.authenticated, session.profile.is_some());
        }
    }

    #[test]
    fn sin_rol_requerido_basta_estar_autenticado() {
        let mut session = Session::default();
        assert!(!can_access(&session, None));

        session = Session {
            authenticated: true,
            profile: Some(profile(Role::Customer)),
            token: Some("tok".into()),
        };
        assert!(can_access(&session, None));
    }

    #[test]
    fn admin_requerido_rechaza_customer_y_roles_desconocidos() {
        for role in [Role::Customer, Role::Other("SuperAdmin".into())] {
            let session = Session {
                authenticated: true,
                profile: Some(profile(role)),
                token: Some("tok".into()),
            };
            assert!(!can_access(&session, Some(&Role::Admin)));
        }
    }

    #[test]
    fn admin_requerido_acepta_admin() {
        let session = Session {
            authenticated: true,
            profile: Some(profile(Role::Admin)),
            token: Some("tok".into()),
        };
        assert!(can_access(&session, Some(&Role::Admin)));
    }

    #[test]
    fn no_autenticado_nunca_accede() {
        assert!(!can_access(&Session::default(), Some(&Role::Admin)));
        assert!(!can_access(&Session::default(), None));
    }
}
