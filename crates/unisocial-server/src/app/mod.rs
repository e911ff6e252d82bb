mod bootstrap;
mod state;

pub use bootstrap::build_router;
pub use state::{AppState, SharedState};
