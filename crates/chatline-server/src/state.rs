use chatline::agent::Agent;

/// Shared application state, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub agent: Agent,
}

impl AppState {
    pub fn new(agent: Agent) -> Self {
        Self { agent }
    }
}
