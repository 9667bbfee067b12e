//! Data shapes shared by the API server and the dashboard client.

pub mod category;
pub mod records;
pub mod responses;

pub use category::*;
pub use records::*;
pub use responses::*;
