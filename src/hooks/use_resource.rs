// ============================================================================
// USE RESOURCE - máquina de estados compartida de fetch por vista
// ============================================================================
// Toda vista con datos sigue el mismo ciclo: Loading -> Error | Ready.
// Error y Ready son terminales; solo un remount vuelve a Loading.
// ============================================================================

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::{load_config, RemoteConfig};

#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Error(String),
    Ready(T),
}

/// Secuencia config -> fetch. Si la config falló, el fetch dependiente
/// nunca se ejecuta y la vista queda en error terminal.
pub(crate) async fn resolve<T, F, Fut>(
    config: Result<RemoteConfig, String>,
    fetch: F,
) -> Resource<T>
where
    F: FnOnce(RemoteConfig) -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    match config {
        Err(e) => Resource::Error(e),
        Ok(config) => match fetch(config).await {
            Ok(data) => Resource::Ready(data),
            Err(e) => Resource::Error(e),
        },
    }
}

/// Hook de datos por vista: resuelve la config remota al montar y recién
/// entonces ejecuta el fetch de la vista con la URL base resuelta.
///
/// Si la vista se desmonta antes de resolver, el resultado se descarta
/// en vez de escribir estado sobre un componente muerto.
#[hook]
pub fn use_resource<T, F, Fut>(fetch: F) -> UseStateHandle<Resource<T>>
where
    T: 'static,
    F: FnOnce(RemoteConfig) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_state(|| Resource::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let on_unmount = alive.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = resolve(load_config().await, fetch).await;
                if alive.get() {
                    state.set(result);
                }
            });

            move || on_unmount.set(false)
        });
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn config() -> RemoteConfig {
        RemoteConfig {
            api_url: "https://apimock.com".to_string(),
        }
    }

    #[test]
    fn fallo_de_config_no_ejecuta_el_fetch() {
        let called = Cell::new(false);
        let result: Resource<i32> = block_on(resolve(
            Err("Failed to load configuration".to_string()),
            |_| {
                called.set(true);
                async { Ok(1) }
            },
        ));
        assert_eq!(
            result,
            Resource::Error("Failed to load configuration".to_string())
        );
        assert!(!called.get(), "el fetch dependiente no debe ejecutarse");
    }

    #[test]
    fn fetch_exitoso_termina_en_ready() {
        let result = block_on(resolve(Ok(config()), |config| async move {
            assert_eq!(config.api_url, "https://apimock.com");
            Ok("Hotel 1".to_string())
        }));
        assert_eq!(result, Resource::Ready("Hotel 1".to_string()));
    }

    #[test]
    fn fetch_fallido_propaga_el_mensaje_del_servidor() {
        let result: Resource<()> = block_on(resolve(Ok(config()), |_| async {
            Err(crate::services::api_client::extract_error(
                r#"{"error":"Hotel not found"}"#,
            ))
        }));
        assert_eq!(result, Resource::Error("Hotel not found".to_string()));
    }
}
