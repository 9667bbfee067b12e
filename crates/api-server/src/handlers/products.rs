use crate::dto::{price_text, product_record};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{
        multipart::MultipartRejection, rejection::JsonRejection, Multipart, Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use common::{MessageResponse, ProductRecord, UpdateProductRequest};
use domain::{NewProductInput, ProductUpdateInput};
use tracing::debug;

/// `POST /add-product` - multipart form with an optional `image` file
pub async fn add_product(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart?;
    let mut input = NewProductInput::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "image" => {
                let bytes = field.bytes().await?;
                debug!("Received image upload of {} bytes", bytes.len());
                input.image = Some(bytes.to_vec());
            }
            "name" => input.name = Some(field.text().await?),
            "price" => input.price = Some(field.text().await?),
            "description" => input.description = Some(field.text().await?),
            "category" => input.category = Some(field.text().await?),
            other => debug!("Ignoring form field {:?}", other),
        }
    }

    debug!(
        "Add product request: name={:?} price={:?} category={:?}",
        input.name, input.price, input.category
    );

    let product = state
        .admin_app
        .product_service
        .create_product(input)
        .await
        .map_err(|e| state.fail(e, "Error saving product."))?;

    let location = format!("/products/{}", product.id.unwrap_or_default());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(MessageResponse::new("Product added successfully.")),
    ))
}

/// `PUT /products/:id`
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ProductRecord>, ApiError> {
    let Json(request) = payload?;

    let input = ProductUpdateInput {
        name: request.name,
        price: price_text(&request.price),
        description: request.description,
        category: request.category,
    };

    let product = state
        .admin_app
        .product_service
        .update_product(&id, input)
        .await
        .map_err(|e| state.fail(e, "Error updating product."))?;

    Ok(Json(product_record(product)))
}

/// `GET /products`
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductRecord>>, ApiError> {
    let products = state
        .admin_app
        .product_service
        .list_products()
        .await
        .map_err(|e| state.fail(e, "Error fetching products."))?;

    Ok(Json(products.into_iter().map(product_record).collect()))
}

/// `DELETE /products/:id`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .admin_app
        .product_service
        .delete_product(&id)
        .await
        .map_err(|e| state.fail(e, "Error deleting product."))?;

    Ok(Json(MessageResponse::new("Product deleted successfully.")))
}
