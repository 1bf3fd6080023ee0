pub mod browser;
pub mod droid;
pub mod extraction_driver;
pub mod listing_preparer;
pub mod page_harvester;
pub mod pagination;
pub mod record_extractor;
pub mod snapshot;

pub use browser::*;
pub use droid::*;
pub use extraction_driver::*;
pub use listing_preparer::*;
pub use page_harvester::*;
pub use pagination::*;
pub use record_extractor::*;
pub use snapshot::*;
