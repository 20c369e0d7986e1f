pub mod adapter;
pub mod classifier;
pub mod element_list;
pub mod snapshot;
