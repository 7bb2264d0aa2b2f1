pub mod confirm_dialog;
pub mod date_input;
pub mod error_banner;
pub mod filter_panel;
pub mod pagination_controls;
pub mod search_input;
pub mod sortable_header;
