mod session;

pub use session::{BrowseSession, PageLoad, SearchOutcome};
