use axum::extract::{Path, State};
use axum::Json;

use crate::endpoints::FacadeState;
use crate::models::{CreateEmployeeRequest, Employee};
use crate::services::FacadeResult;

pub async fn list_all(State(facade): State<FacadeState>) -> FacadeResult<Json<Vec<Employee>>> {
    Ok(Json(facade.list_all().await?))
}

pub async fn search_by_name(
    State(facade): State<FacadeState>,
    Path(search_string): Path<String>,
) -> FacadeResult<Json<Vec<Employee>>> {
    Ok(Json(facade.search_by_name(&search_string).await?))
}

pub async fn get_by_id(
    State(facade): State<FacadeState>,
    Path(id): Path<String>,
) -> FacadeResult<Json<Employee>> {
    Ok(Json(facade.get_by_id(&id).await?))
}

pub async fn highest_salary(State(facade): State<FacadeState>) -> FacadeResult<Json<i64>> {
    Ok(Json(facade.highest_salary().await?))
}

pub async fn top_ten_earner_names(
    State(facade): State<FacadeState>,
) -> FacadeResult<Json<Vec<String>>> {
    Ok(Json(facade.top_ten_earner_names().await?))
}

pub async fn create(
    State(facade): State<FacadeState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> FacadeResult<Json<Employee>> {
    Ok(Json(facade.create(request).await?))
}

/// Returns the deleted employee's name as a plain-text body.
pub async fn delete_by_id(
    State(facade): State<FacadeState>,
    Path(id): Path<String>,
) -> FacadeResult<String> {
    facade.delete_by_id(&id).await
}
