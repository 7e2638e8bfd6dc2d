use yew::prelude::*;

use crate::components::Navbar;
use crate::hooks::use_session_context;
use crate::models::Role;
use crate::session::{can_access, ACCESS_DENIED};

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    /// Exigir rol Admin además de sesión iniciada.
    #[prop_or_default]
    pub admin: bool,
    pub children: Children,
}

/// Envuelve contenido protegido. La denegación se renderiza en el lugar,
/// nunca como redirect, para que el contenido protegido no exista en el DOM.
#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    let session = use_session_context();
    let required = if props.admin { Some(Role::Admin) } else { None };

    if can_access(session.session(), required.as_ref()) {
        html! { <>{props.children.clone()}</> }
    } else {
        html! {
            <>
                <Navbar />
                <p class="fullscreen">{ACCESS_DENIED}</p>
            </>
        }
    }
}
