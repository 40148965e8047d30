pub mod config;
pub mod encode;
pub mod model;
pub mod page;
pub mod session;
pub mod stats;
pub mod types;
