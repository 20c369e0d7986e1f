pub mod count;
pub mod expansion;
pub mod permutation;
pub mod pipeline;
