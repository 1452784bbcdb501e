pub mod badges;
pub mod handlers;
pub mod routes;
pub mod views;

pub use handlers::PortalState;
pub use routes::routes;
