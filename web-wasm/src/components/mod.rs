pub mod header;
pub mod search_bar;
pub mod menu;
pub mod footer;
