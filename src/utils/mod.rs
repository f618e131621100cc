pub mod classes;
pub mod format;
