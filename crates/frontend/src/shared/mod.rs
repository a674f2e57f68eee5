pub mod api_utils;
pub mod date_utils;
pub mod detail_view;
pub mod format;
pub mod icons;
pub mod list_placeholder;
pub mod page_frame;
