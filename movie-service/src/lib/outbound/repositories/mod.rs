pub mod favorite;
pub mod memory;
pub mod review;
pub mod user;
pub mod watchlist;

pub use favorite::PostgresFavoriteRepository;
pub use memory::InMemoryStore;
pub use review::PostgresReviewRepository;
pub use user::PostgresUserRepository;
pub use watchlist::PostgresWatchlistRepository;
