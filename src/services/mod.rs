pub mod dashboard;
pub mod inventory;
pub mod normalize;
pub mod query;
