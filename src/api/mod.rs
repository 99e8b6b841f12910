//! API Module
//!
//! HTTP handlers and routing for the lookup service.
//!
//! # Endpoints
//! - `GET /classes?crm=` - ALIADA class of a CRM class
//! - `GET /event-types?crm=` - ALIADA class of a CRM event type
//! - `GET /jobs/:id` - Job configuration (read-through cache)
//! - `DELETE /jobs/:id` - Drop a cached job configuration
//! - `GET /stats` - Job cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
