pub mod account;
pub mod article;
pub mod tag;
pub mod user;
