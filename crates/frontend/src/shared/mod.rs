pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod filter;
pub mod forms;
pub mod icons;
pub mod list_state;
pub mod mock;
pub mod modal;
pub mod pagination;
pub mod sort;
