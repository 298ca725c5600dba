//! Page components for the single informational page.

pub mod asking_guide;
pub mod error_guide;
pub mod intro;
pub mod learning_sources;
pub mod page_footer;
pub mod section_heading;
pub mod theme_toggle;
