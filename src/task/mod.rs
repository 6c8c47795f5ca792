//! Task management for taskdeck.
//!
//! This module implements the task resource end to end: the task record
//! itself, the persistence port it is stored through, the adapters fulfilling
//! that port, and the service that maps inbound requests onto port
//! operations. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
