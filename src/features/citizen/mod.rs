pub mod handlers;
pub mod leaderboard;
pub mod routes;
pub mod session;
pub mod views;

pub use handlers::CitizenState;
pub use routes::routes;
