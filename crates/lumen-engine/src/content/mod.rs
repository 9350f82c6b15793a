pub mod project;
pub mod theme;

pub use project::{escape_html, ProjectInfo};
pub use theme::Theme;
