//! Events feature.
//!
//! Events reference their category by `category_code` only; nothing checks
//! that the category exists.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/events` | All events under an `events` key |
//! | GET | `/events/{category_code}` | Events of one category, 404 when there are none |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::EventService;
