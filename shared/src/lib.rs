pub mod ids;
pub mod models;
pub mod sanitize;
pub mod validate;

pub use ids::*;
pub use models::*;
pub use sanitize::*;
pub use validate::*;
