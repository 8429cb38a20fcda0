//! API layer - HTTP endpoints and schemas

pub mod chat;
pub mod health;
pub mod router;
pub mod search;
pub mod state;
pub mod status;
pub mod types;

pub use router::create_router;
pub use state::AppState;
