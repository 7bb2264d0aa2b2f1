pub mod activity;
pub mod audit;
