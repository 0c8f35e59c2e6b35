pub mod description;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod otomoto;
pub mod record;
pub mod traits;
pub mod types;

pub use otomoto::OtomotoScraper;
pub use traits::ListingScraper;
pub use types::ScrapeConfig;
