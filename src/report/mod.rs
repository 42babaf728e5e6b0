pub mod dot;
pub mod table;

pub use dot::render_dot;
pub use table::{render_glossary, render_schedule_table};
