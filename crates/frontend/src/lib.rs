//! Client side of the admin dashboard: a typed HTTP client for the API and
//! the view state behind each page.

pub mod api;
pub mod notice;
pub mod reconcile;
pub mod routes;
pub mod views;

pub use api::{ApiClient, ClientError, ProductForm};
pub use notice::{Notice, NoticeLevel};
pub use reconcile::{apply_patch, Identified, Patch};
pub use routes::Route;
pub use views::*;
