pub mod limit;
pub mod snapshot;
