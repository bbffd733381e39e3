//! Support modules for the dashboard BDD tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use runtime::ensure_runtime;
pub(crate) use state::DashboardScenarioState;
