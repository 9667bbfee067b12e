pub mod chat_view;
pub mod customer_view;
pub mod dashboard_view;
pub mod product_view;

pub use chat_view::{ChatMessage, ChatView};
pub use customer_view::{CustomerView, ProfileDraft};
pub use dashboard_view::DashboardView;
pub use product_view::{filter_products, ProductEdit, ProductView};
