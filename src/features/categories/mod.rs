//! Categories feature.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | All categories under a `categories` key |
//! | GET | `/categories/{code}` | Single category by its code, 404 when unknown |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
