//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: REST endpoints, the realtime websocket relay,
//! business rules, data access and background jobs. Axum serves HTTP and websockets, SeaORM
//! talks to the database and utoipa generates the OpenAPI document.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, access checks and notification fan-out
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//! - **Realtime** (`realtime/`) - Websocket connection hub and event envelope
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, realtime hub, config)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs for housekeeping (expired session cleanup)
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** resolves the bearer token to a user
//! 3. **Controller** converts DTOs to params and calls a service
//! 4. **Service** enforces ownership and membership rules, then calls the data layer
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Service** emits realtime events for the affected users
//! 7. **Controller** converts the domain model to a DTO inside the success envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod realtime;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
