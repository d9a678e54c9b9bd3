pub mod coloring;
pub mod creation;
pub mod query;
