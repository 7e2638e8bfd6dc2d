use yew::prelude::*;

use crate::models::UserProfile;
use crate::session::Session;

/// Handle de sesión compartido por contexto a todo el árbol.
/// Las vistas hoja solo leen el estado y emiten `login`/`logout`;
/// nunca tocan localStorage directamente.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    state: UseStateHandle<Session>,
    pub login: Callback<(UserProfile, String)>,
    pub logout: Callback<()>,
}

impl SessionHandle {
    pub fn session(&self) -> &Session {
        &self.state
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    let state = use_state(Session::default);

    // Restaurar desde storage una sola vez al montar el provider
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let restored = Session::restore();
            if restored != *state {
                state.set(restored);
            }
            || ()
        });
    }

    let login = {
        let state = state.clone();
        Callback::from(move |(profile, token): (UserProfile, String)| {
            state.set(Session::login(profile, token));
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            state.set(Session::logout());
        })
    };

    SessionHandle {
        state,
        login,
        logout,
    }
}

/// Acceso al contexto de sesión desde cualquier vista.
#[hook]
pub fn use_session_context() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionProvider no está montado")
}
