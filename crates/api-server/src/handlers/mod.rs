pub mod dashboard;
pub mod products;
pub mod profiles;

pub use dashboard::*;
pub use products::*;
pub use profiles::*;
