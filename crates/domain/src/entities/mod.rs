pub mod product;
pub mod profile;
pub mod user;

pub use product::*;
pub use profile::*;
pub use user::*;
