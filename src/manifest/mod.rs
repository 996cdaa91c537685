pub mod changelog;
pub mod lock;
pub mod package;
