//! # Async Tasks
//!
//! Network work spawned by the orchestrator. Tasks hold a `Weak` handle to the
//! orchestrator so a dropped orchestrator is never kept alive by its timers.

pub(crate) mod swap;
