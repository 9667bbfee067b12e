pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod validation;

pub use entities::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
pub use validation::*;
