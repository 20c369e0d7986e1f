pub mod export;
pub mod feature_model;
pub mod renderer;
pub mod steps;
