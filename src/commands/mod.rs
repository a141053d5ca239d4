pub mod patch;
mod project_root;
