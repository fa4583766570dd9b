pub mod catalog;
pub mod filters;
pub mod ingredients;
pub mod matching;
pub mod recommendations;
pub mod selection;
