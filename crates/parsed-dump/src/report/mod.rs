pub mod fold;
pub mod summary;
pub mod yaml;

pub use summary::Summary;
pub use yaml::{build_dump, render_dump, write_dump, Dump};
