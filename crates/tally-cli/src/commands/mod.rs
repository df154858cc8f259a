pub mod clean;
pub mod context;
pub mod dispatch;
pub mod quality;
pub mod roles;
pub mod schema;
pub mod shared;
