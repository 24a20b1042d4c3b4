pub mod controllers;
pub mod error;
pub mod routers;
pub mod secrets;
pub mod serve;
pub mod state;

pub use error::RelayError;
pub use routers::app;
pub use secrets::{Config, Hosting};
pub use state::AppState;
