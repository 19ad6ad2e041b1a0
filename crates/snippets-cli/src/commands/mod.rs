pub mod catalog;
pub mod get;
pub mod put;
pub mod search;
