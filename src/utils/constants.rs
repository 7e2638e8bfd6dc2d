/// Claves fijas de localStorage. Solo el módulo de sesión debe usarlas.
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_USER_PROFILE: &str = "userProfile";
