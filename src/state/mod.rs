//! State module for tracking the lifecycle of a crawl run
//!
//! A run owns exactly one browsing session. `RunState` records where that
//! session is in its life so the coordinator can refuse to fetch before the
//! session starts or to close it twice.

mod run_state;

pub use run_state::RunState;
