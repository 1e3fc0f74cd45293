pub mod app_error_impl;
pub mod docs;
pub mod middleware;
pub mod routes;
pub mod schema;
pub mod spa;
pub mod validation;
