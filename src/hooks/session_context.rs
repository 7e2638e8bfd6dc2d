// ============================================================================
// SESSION CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session, SessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y expone el `SessionHandle` global.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let handle = use_session();

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}
