mod employee;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::services::{EmployeeFacade, FacadeError};

/// Shared handler state: the facade, constructed once at startup.
pub type FacadeState = Arc<EmployeeFacade>;

/// Builds the public `/employee` surface.
///
/// Static segments (`search`, `highestSalary`, ...) are registered alongside
/// the `{id}` capture; the router always prefers the static match.
pub fn build_router(facade: FacadeState) -> Router {
    Router::new()
        .route(
            "/employee",
            get(employee::list_all).post(employee::create),
        )
        .route(
            "/employee/search/{searchString}",
            get(employee::search_by_name),
        )
        .route("/employee/highestSalary", get(employee::highest_salary))
        .route(
            "/employee/topTenHighestEarningEmployeeNames",
            get(employee::top_ten_earner_names),
        )
        .route(
            "/employee/{id}",
            get(employee::get_by_id).delete(employee::delete_by_id),
        )
        .with_state(facade)
}

/// Transport mapping for facade failures. Every error leaves as a fixed
/// status class with a plain-text message; backend detail stays in the logs.
impl IntoResponse for FacadeError {
    fn into_response(self) -> Response {
        match self {
            FacadeError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            FacadeError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
        }
    }
}
