pub mod categories;
pub mod events;
