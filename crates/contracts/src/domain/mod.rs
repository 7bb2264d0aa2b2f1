pub mod companies;
pub mod plans;
pub mod users;
