mod helpers;
mod initialize_test;
mod schema_test;
mod seed_test;
