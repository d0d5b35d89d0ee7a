//! Background Tasks Module
//!
//! Optional tasks that run alongside a [`crate::SharedCache`].
//!
//! # Tasks
//! - TTL Cleanup: Sweeps expired entries at a fixed interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
