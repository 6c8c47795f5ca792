//! Taskdeck: a minimal task-management HTTP service.
//!
//! This crate exposes a single "task" resource over HTTP with create, read,
//! update, and delete operations backed by a document-style persistence port.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task records with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//! - **Services**: Orchestration mapping requests to port operations
//!
//! # Modules
//!
//! - [`task`]: Task record, persistence port, adapters, and service layer
//! - [`http`]: axum routing, request handlers, and error mapping
//! - [`config`]: environment-derived service configuration

pub mod config;
pub mod http;
pub mod task;
