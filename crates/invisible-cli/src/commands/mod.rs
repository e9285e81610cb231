pub mod hide;
pub mod reveal_cover;
pub mod unveil;
pub mod unveil_raw;
