pub mod initialize;
pub mod schema;
pub mod seed;
