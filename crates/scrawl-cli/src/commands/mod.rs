pub mod add;
pub mod clear;
pub mod common;
pub mod completions;
pub mod compose;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod settings;
pub mod show;
