mod sections;

pub use sections::{FetchSections, SectionsPage, fetch_sections};
