//! Infrastructure layer - Concrete implementations of domain contracts

pub mod logging;
pub mod seed;
pub mod user;
