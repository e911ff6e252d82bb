pub mod catalog;
pub mod helper;
pub mod play;
pub mod report;
