use common::{
    Category, ErrorResponse, MessageResponse, NewProfileRequest, ProductRecord, ProfileRecord,
    TotalResponse, UpdateProductRequest,
};
use reqwest::header::LOCATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Created product response carried no Location header")]
    MissingLocation,
}

/// Fields of the add-product form. `price` is sent as typed; the server
/// validates it.
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: Category,
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_products(&self) -> Result<Vec<ProductRecord>, ClientError> {
        let response = self.http.get(self.url("/products")).send().await?;
        decode(response).await
    }

    /// Submit the multipart form and return the new product's id, taken from
    /// the `Location` header.
    pub async fn add_product(&self, form: &ProductForm) -> Result<String, ClientError> {
        let mut body = Form::new()
            .text("name", form.name.clone())
            .text("price", form.price.clone())
            .text("description", form.description.clone())
            .text("category", form.category.as_str());

        if let Some(image) = &form.image {
            body = body.part("image", Part::bytes(image.clone()).file_name("image"));
        }

        let response = self
            .http
            .post(self.url("/add-product"))
            .multipart(body)
            .send()
            .await?;
        let response = check(response).await?;

        let id = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|location| location.rsplit('/').next())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or(ClientError::MissingLocation)?;

        debug!("Created product {}", id);
        Ok(id)
    }

    pub async fn update_product(
        &self,
        id: &str,
        request: &UpdateProductRequest,
    ) -> Result<ProductRecord, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/products/{}", id)))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<MessageResponse, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/products/{}", id)))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn list_profiles(&self) -> Result<Vec<ProfileRecord>, ClientError> {
        let response = self.http.get(self.url("/profiles")).send().await?;
        decode(response).await
    }

    pub async fn add_profile(
        &self,
        request: &NewProfileRequest,
    ) -> Result<ProfileRecord, ClientError> {
        let response = self
            .http
            .post(self.url("/profiles"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_profile(&self, id: &str) -> Result<MessageResponse, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/profiles/{}", id)))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn total_users(&self) -> Result<i64, ClientError> {
        let response = self.http.get(self.url("/total-users")).send().await?;
        let total: TotalResponse = decode(response).await?;
        Ok(total.total)
    }

    pub async fn total_products(&self) -> Result<i64, ClientError> {
        let response = self.http.get(self.url("/total-products")).send().await?;
        let total: TotalResponse = decode(response).await?;
        Ok(total.total)
    }
}

/// Pass 2xx responses through; turn anything else into `ClientError::Api`
/// using the `{ message }` body when there is one.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|error| error.message)
        .unwrap_or(body);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = check(response).await?;
    Ok(response.json().await?)
}
