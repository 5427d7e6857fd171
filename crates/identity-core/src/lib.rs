pub mod connection;
pub mod tracing;
