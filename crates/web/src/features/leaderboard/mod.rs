pub mod codeforces;
pub mod handlers;
pub mod routes;
pub mod services;
