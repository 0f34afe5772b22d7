pub mod error_banner;
pub mod header;
pub mod preview;
pub mod result_card;
pub mod theme_toggle;
pub mod upload_zone;
pub mod utils;
