pub mod cli;
pub mod icon;
pub mod layout;
pub mod output;
pub mod shape;

pub use icon::{build_icon, render_icon};
pub use layout::IconLayout;
