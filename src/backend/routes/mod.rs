//! Route Configuration Module
//!
//! - **`router`** - router assembly, status endpoint and tower layers
//! - **`api_routes`** - `/api` routes, split into public and protected sets
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API route table
//! ```

/// Main router creation
pub mod router;

/// API route table
pub mod api_routes;

pub use router::create_router;
