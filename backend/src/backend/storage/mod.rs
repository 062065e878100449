//! # Storage Module
//!
//! Persists properties and their host-authored availability periods.
//!
//! The domain layer only sees the traits in [`traits`]. Two backends exist:
//!
//! - **csv**: one directory per property holding `property.yaml` and
//!   `availability.csv`, written atomically
//! - **remote**: a JSON HTTP API owned by the listings platform
//!
//! Both keep periods in authoring order, which the availability resolver
//! depends on when periods overlap.

pub mod traits;
pub mod csv;
pub mod remote;

pub use traits::*;
