pub mod ids;
pub mod routes;
