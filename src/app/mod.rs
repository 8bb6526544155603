//! Application core — pure domain logic, zero direct I/O.
//!
//! This module contains the business rules for the alarm: remote command
//! classification and the poll loop that ties the PIR, the status LED and
//! the modem together.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
