//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `copy`, `ui`) so individual
//! components can depend on small focused models. `actions` holds the async
//! flows that move the session through its states.

pub mod actions;
pub mod copy;
pub mod session;
pub mod ui;
