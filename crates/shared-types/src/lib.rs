pub mod config;
pub mod delete_flow;
pub mod error;
pub mod feature_flags;
pub mod models;
pub mod permissions;
pub mod requests;
pub mod store;

pub use config::*;
pub use delete_flow::*;
pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use permissions::*;
pub use requests::*;
pub use store::*;
