//! # Domain Module
//!
//! Contains all business logic for the booking calendar and the host
//! availability manager.
//!
//! This module encapsulates the date arithmetic and pricing rules behind the
//! booking flow. It operates independently of any specific UI framework or
//! storage mechanism.
//!
//! ## Module Organization
//!
//! - **calendar**: 6-week month grids, month navigation and the current date
//! - **availability**: resolving each day against a property's availability periods
//! - **range_selector**: the two-click check-in/check-out state machine
//! - **pricing**: nights and totals for a selected stay, capped at a year
//! - **availability_service**: orchestration over storage for the REST layer
//!
//! ## Core Concepts
//!
//! - **Availability Period**: host-defined date range with an availability flag
//!   and an optional special price
//! - **Availability Day**: a calendar cell resolved against the periods, with
//!   its selectability and nightly price
//! - **Range Selection**: the check-in/check-out pair picked by two clicks
//! - **Quote**: available nights in a range, priced and summed with fixed fees
//!
//! ## Business Rules
//!
//! - The calendar grid always has 42 days
//! - Past days are never available
//! - The last period covering a day decides it
//! - Completed selections always have start <= end
//! - A stay with no available nights costs nothing and cannot be booked

pub mod calendar;
pub mod availability;
pub mod range_selector;
pub mod pricing;
pub mod availability_service;
pub mod commands;
pub mod models;

pub use calendar::*;
pub use availability::*;
pub use range_selector::*;
pub use pricing::*;
pub use availability_service::*;
