pub mod booth;
pub mod opts;
