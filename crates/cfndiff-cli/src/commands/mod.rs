pub mod files;
pub mod output;
pub mod stack;
