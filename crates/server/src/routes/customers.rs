use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::{Customer, CustomerId, CustomerInput, ServiceError};
use tracing::{debug, warn};

use crate::errors::JsonApiError;
use crate::metrics;
use crate::state::AppState;

pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";
/// PATCH answers a missing id with its own wording.
pub const CUSTOMER_NOT_EXIST: &str = "The customer not exist";
pub const CUSTOMER_CONFLICT: &str = "Customer with this ID already exist";

/// Map a store failure onto the route's status and message.
fn reject(op: &'static str, err: ServiceError, not_found_message: &str) -> JsonApiError {
    match err {
        ServiceError::NotFound(detail) => {
            metrics::record_op(op, "not_found");
            debug!(op, %detail, "customer lookup missed");
            JsonApiError::not_found(not_found_message)
        }
        ServiceError::Conflict(detail) => {
            metrics::record_op(op, "conflict");
            debug!(op, %detail, "customer id already taken");
            JsonApiError::conflict(CUSTOMER_CONFLICT)
        }
    }
}

/// Path ids that do not parse as the store's identifier type match nothing.
fn parse_id<K: CustomerId>(op: &'static str, raw: &str, not_found_message: &str) -> Result<K, JsonApiError> {
    K::parse_param(raw).ok_or_else(|| {
        metrics::record_op(op, "not_found");
        debug!(op, raw, scheme = K::SCHEME, "unparseable customer id");
        JsonApiError::not_found(not_found_message)
    })
}

/// Malformed bodies never reach the store; always 400.
fn bad_body(op: &'static str, rejection: JsonRejection) -> JsonApiError {
    metrics::record_op(op, "bad_request");
    warn!(op, error = %rejection.body_text(), "rejected customer payload");
    JsonApiError::bad_request(rejection.body_text())
}

/// `GET /customers`
pub async fn list_customers<K: CustomerId>(State(state): State<AppState<K>>) -> Json<Vec<Customer<K>>> {
    let all = state.customers.list().await;
    metrics::record_op("list", "ok");
    Json(all)
}

/// `GET /customers/:id`
pub async fn get_customer<K: CustomerId>(
    State(state): State<AppState<K>>,
    Path(raw): Path<String>,
) -> Result<Json<Customer<K>>, JsonApiError> {
    let id = parse_id::<K>("get", &raw, CUSTOMER_NOT_FOUND)?;
    let customer = state
        .customers
        .get(&id)
        .await
        .map_err(|e| reject("get", e, CUSTOMER_NOT_FOUND))?;
    metrics::record_op("get", "ok");
    Ok(Json(customer))
}

/// `POST /customers`
pub async fn create_customer<K: CustomerId>(
    State(state): State<AppState<K>>,
    payload: Result<Json<CustomerInput<K>>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer<K>>), JsonApiError> {
    let Json(input) = payload.map_err(|r| bad_body("create", r))?;
    let created = state
        .customers
        .create(input)
        .await
        .map_err(|e| reject("create", e, CUSTOMER_NOT_FOUND))?;
    metrics::record_op("create", "ok");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /customers/:id`, full replacement of everything but the id.
pub async fn replace_customer<K: CustomerId>(
    State(state): State<AppState<K>>,
    Path(raw): Path<String>,
    payload: Result<Json<CustomerInput<K>>, JsonRejection>,
) -> Result<Json<Vec<Customer<K>>>, JsonApiError> {
    let Json(input) = payload.map_err(|r| bad_body("replace", r))?;
    let id = parse_id::<K>("replace", &raw, CUSTOMER_NOT_EXIST)?;
    let all = state
        .customers
        .replace(&id, input)
        .await
        .map_err(|e| reject("replace", e, CUSTOMER_NOT_EXIST))?;
    metrics::record_op("replace", "ok");
    Ok(Json(all))
}

/// `DELETE /customers/:id`
pub async fn delete_customer<K: CustomerId>(
    State(state): State<AppState<K>>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<Customer<K>>>, JsonApiError> {
    let id = parse_id::<K>("delete", &raw, CUSTOMER_NOT_FOUND)?;
    let left = state
        .customers
        .delete(&id)
        .await
        .map_err(|e| reject("delete", e, CUSTOMER_NOT_FOUND))?;
    metrics::record_op("delete", "ok");
    Ok(Json(left))
}
