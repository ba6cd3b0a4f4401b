pub mod handlers;
pub mod middleware;
pub mod plan;
pub mod routes;

pub use routes::create_router;
