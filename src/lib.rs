pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod gauge;
pub mod geometry;
pub mod input;
pub mod logging;
