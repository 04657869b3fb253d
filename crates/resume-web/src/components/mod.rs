mod section;
mod section_toggle;

pub use section::Section;
pub use section_toggle::SectionToggle;
