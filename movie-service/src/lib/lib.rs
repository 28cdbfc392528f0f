pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::favorite;
pub use domain::movie;
pub use domain::ownership;
pub use domain::review;
pub use domain::user;
pub use domain::watchlist;
pub use outbound::repositories;
