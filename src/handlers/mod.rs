pub mod category;
pub mod dashboard;
pub mod product;
pub mod purchase;
pub mod sale;
pub mod supplier;
pub mod user;
