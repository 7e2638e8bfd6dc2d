use gloo_net::http::Request;
use serde::Deserialize;

/// Configuración remota servida desde el propio origen de la app.
/// Se pide una vez por montaje de vista; no se cachea entre vistas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteConfig {
    #[serde(rename = "apiUrl")]
    pub api_url: String,
}

pub const CONFIG_URL: &str = "/config.json";

/// Mensaje fijo para cualquier fallo al resolver la configuración.
pub const CONFIG_LOAD_ERROR: &str = "Failed to load configuration";

/// Resuelve la URL base del API. Cualquier fetch dependiente debe esperar
/// a que esto resuelva; un fallo es terminal para la vista (sin reintentos).
pub async fn load_config() -> Result<RemoteConfig, String> {
    let response = Request::get(CONFIG_URL).send().await.map_err(|e| {
        log::error!("❌ Error cargando config: {}", e);
        CONFIG_LOAD_ERROR.to_string()
    })?;

    if !response.ok() {
        log::error!("❌ Config respondió HTTP {}", response.status());
        return Err(CONFIG_LOAD_ERROR.to_string());
    }

    response.json::<RemoteConfig>().await.map_err(|e| {
        log::error!("❌ Config malformada: {}", e);
        CONFIG_LOAD_ERROR.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parsea_api_url() {
        let config: RemoteConfig =
            serde_json::from_str(r#"{"apiUrl":"https://apimock.com"}"#).unwrap();
        assert_eq!(config.api_url, "https://apimock.com");
    }

    #[test]
    fn config_sin_api_url_es_invalida() {
        assert!(serde_json::from_str::<RemoteConfig>(r#"{"url":"x"}"#).is_err());
    }
}
