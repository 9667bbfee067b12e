use crate::api::ApiClient;
use crate::notice::Notice;

/// Headline counters
pub struct DashboardView {
    client: ApiClient,
    pub total_users: Option<i64>,
    pub total_products: Option<i64>,
}

impl DashboardView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            total_users: None,
            total_products: None,
        }
    }

    pub async fn load(&mut self) -> Option<Notice> {
        match self.client.total_users().await {
            Ok(total) => self.total_users = Some(total),
            Err(e) => return Some(Notice::error("Error fetching user count.", &e)),
        }

        match self.client.total_products().await {
            Ok(total) => self.total_products = Some(total),
            Err(e) => return Some(Notice::error("Error fetching product count.", &e)),
        }

        None
    }
}
