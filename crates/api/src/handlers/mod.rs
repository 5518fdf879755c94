//! Request handlers, one module per resource.

pub mod movie;
pub mod review;
pub mod stats;
pub mod user;
pub mod watchlist;
