pub mod catalog;
pub mod expander;
pub mod grammar;
pub mod interpreter;
pub mod render;
