use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::clothing_item::{ClothingItemEditRequest, ClothingItemResponse};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Clothes",
    operation_id = "listClothes",
    summary = "List the caller's clothing items",
    description = "Returns every clothing item owned by the caller, ordered by id, each with its current tags. An empty wardrobe is an empty array.",
    responses(
        (status = 200, description = "Clothing items", body = Vec<ClothingItemResponse>),
        (status = 400, description = "Malformed userId header (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing userId header (UNAUTHORIZED)", body = ErrorBody),
    ),
    security(("user_id" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn list_clothes(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ClothingItemResponse>>, AppError> {
    let items = state.clothes.list_by_user(auth_user.user_id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Clothes",
    operation_id = "getClothingItem",
    summary = "Get a clothing item by ID",
    description = "Returns 404 both for missing items and for items owned by another user.",
    params(("id" = i32, Path, description = "Clothing item ID")),
    responses(
        (status = 200, description = "Clothing item", body = ClothingItemResponse),
        (status = 400, description = "Invalid ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing userId header (UNAUTHORIZED)", body = ErrorBody),
        (status = 404, description = "Clothing item not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("user_id" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn get_clothing_item(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ClothingItemResponse>, AppError> {
    let item = state.clothes.get_by_user_and_id(auth_user.user_id, id).await?;
    Ok(Json(item.into()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Clothes",
    operation_id = "createClothingItem",
    summary = "Create a clothing item",
    description = "Inserts the item and attaches its tags in one transaction. If any tag cannot be attached nothing is stored. `category_id` and every tag id must belong to the caller.",
    request_body = ClothingItemEditRequest,
    responses(
        (status = 201, description = "Clothing item created", body = ClothingItemResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing userId header (UNAUTHORIZED)", body = ErrorBody),
    ),
    security(("user_id" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id, category_id = payload.category_id))]
pub async fn create_clothing_item(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<ClothingItemEditRequest>,
) -> Result<impl IntoResponse, AppError> {
    let item = state
        .clothes
        .create(
            auth_user.user_id,
            payload.category_id,
            &payload.image_url,
            &payload.tag_ids,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ClothingItemResponse::from(item))))
}

#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Clothes",
    operation_id = "updateClothingItem",
    summary = "Update a clothing item",
    description = "Sets category and image and replaces the whole tag list with `tag_ids` (not a merge). The change is atomic.",
    params(("id" = i32, Path, description = "Clothing item ID")),
    request_body = ClothingItemEditRequest,
    responses(
        (status = 200, description = "Clothing item updated", body = ClothingItemResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing userId header (UNAUTHORIZED)", body = ErrorBody),
        (status = 404, description = "Clothing item not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("user_id" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
pub async fn update_clothing_item(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ClothingItemEditRequest>,
) -> Result<Json<ClothingItemResponse>, AppError> {
    let item = state
        .clothes
        .update(
            auth_user.user_id,
            id,
            payload.category_id,
            &payload.image_url,
            &payload.tag_ids,
        )
        .await?;

    Ok(Json(item.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Clothes",
    operation_id = "deleteClothingItem",
    summary = "Delete a clothing item",
    description = "Removes the item and all of its tag associations.",
    params(("id" = i32, Path, description = "Clothing item ID")),
    responses(
        (status = 204, description = "Clothing item deleted"),
        (status = 400, description = "Invalid ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing userId header (UNAUTHORIZED)", body = ErrorBody),
        (status = 404, description = "Clothing item not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("user_id" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn delete_clothing_item(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.clothes.delete(auth_user.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/{id}/tags/{tag_id}",
    tag = "Clothes",
    operation_id = "addClothingItemTag",
    summary = "Attach a tag to a clothing item",
    description = "Both the item and the tag must belong to the caller. Attaching a tag twice is a no-op.",
    params(
        ("id" = i32, Path, description = "Clothing item ID"),
        ("tag_id" = i32, Path, description = "Tag ID"),
    ),
    responses(
        (status = 200, description = "Clothing item with its updated tags", body = ClothingItemResponse),
        (status = 400, description = "Invalid ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing userId header (UNAUTHORIZED)", body = ErrorBody),
        (status = 404, description = "Clothing item or tag not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("user_id" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn add_clothing_item_tag(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath((id, tag_id)): AppPath<(i32, i32)>,
) -> Result<Json<ClothingItemResponse>, AppError> {
    state.clothes.get_by_user_and_id(auth_user.user_id, id).await?;
    state.tags.get_by_id(auth_user.user_id, tag_id).await?;

    state.clothes.add_tag(id, tag_id).await?;

    let item = state.clothes.get_by_user_and_id(auth_user.user_id, id).await?;
    Ok(Json(item.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}/tags/{tag_id}",
    tag = "Clothes",
    operation_id = "removeClothingItemTag",
    summary = "Detach a tag from a clothing item",
    description = "The item must belong to the caller. Detaching a tag that is not attached is a no-op.",
    params(
        ("id" = i32, Path, description = "Clothing item ID"),
        ("tag_id" = i32, Path, description = "Tag ID"),
    ),
    responses(
        (status = 200, description = "Clothing item with its updated tags", body = ClothingItemResponse),
        (status = 400, description = "Invalid ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing userId header (UNAUTHORIZED)", body = ErrorBody),
        (status = 404, description = "Clothing item not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("user_id" = [])),
)]
#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
pub async fn remove_clothing_item_tag(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppPath((id, tag_id)): AppPath<(i32, i32)>,
) -> Result<Json<ClothingItemResponse>, AppError> {
    state.clothes.get_by_user_and_id(auth_user.user_id, id).await?;

    state.clothes.remove_tag(id, tag_id).await?;

    let item = state.clothes.get_by_user_and_id(auth_user.user_id, id).await?;
    Ok(Json(item.into()))
}
