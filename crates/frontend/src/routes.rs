#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Products,
    Customers,
    Chat,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Dashboard, Route::Products, Route::Customers, Route::Chat];

    /// Unknown paths land on the dashboard.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "/products" | "products" => Route::Products,
            "/customers" | "customers" => Route::Customers,
            "/chat" | "chat" => Route::Chat,
            _ => Route::Dashboard,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Products => "/products",
            Route::Customers => "/customers",
            Route::Chat => "/chat",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard Details",
            Route::Products => "Products",
            Route::Customers => "Customers",
            Route::Chat => "Chat",
        }
    }
}
