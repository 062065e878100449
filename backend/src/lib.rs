pub mod backend;

pub use backend::{create_router, initialize_backend, AppState};
pub use backend::config::Config;
