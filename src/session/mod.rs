//! Client-side session: the bearer token and the signed-in identity.

pub mod state;
pub mod store;

pub use state::Session;
pub use store::SessionStore;
