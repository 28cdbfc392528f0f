pub mod favorite;
pub mod movie;
pub mod ownership;
pub mod review;
pub mod user;
pub mod watchlist;
