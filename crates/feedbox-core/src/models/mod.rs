pub mod feedback;
pub mod filter;
pub mod stats;
