pub mod group;
pub mod subphase;
pub mod summary;
