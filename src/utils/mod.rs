pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::gauge_bar;
pub use formatting::hours2readable;
