//! Background Tasks Module
//!
//! Contains background tasks that run alongside a long-lived store.
//!
//! # Tasks
//! - TTL Cleanup: Sweeps expired in-memory store entries at configured
//!   intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
