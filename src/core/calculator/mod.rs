pub mod consumed;
pub mod gauge;
pub mod grouping;
pub mod renumber;
