// src/scrape/mod.rs
mod scrape;

pub use scrape::collect;
pub use scrape::fetch_team;
pub use scrape::scrape_team;
