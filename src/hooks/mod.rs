pub mod session_context;
pub mod use_resource;
pub mod use_session;

pub use session_context::SessionProvider;
pub use use_resource::{use_resource, Resource};
pub use use_session::{use_session, use_session_context, SessionHandle};
