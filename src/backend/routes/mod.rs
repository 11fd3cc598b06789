//! Route Configuration Module
//!
//! This module configures all HTTP routes for the comment server.
//!
//! - **`router`** - Main router creation, fallback and response layers
//! - **`api_routes`** - The `/api` comment endpoints
//!
//! # Route Organization
//!
//! 1. **API Routes** - `/api` and `/api/comments[/{id}]`
//! 2. **Fallback Handler** - JSON 404 for everything else

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
