use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::{category, clothing_item, health, tag};
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(health::ping))
        .nest("/clothes", clothes_routes())
        .nest("/categories", category_routes())
        .nest("/tags", tag_routes())
}

fn clothes_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            clothing_item::list_clothes,
            clothing_item::create_clothing_item
        ))
        .routes(routes!(
            clothing_item::get_clothing_item,
            clothing_item::update_clothing_item,
            clothing_item::delete_clothing_item
        ))
        .routes(routes!(
            clothing_item::add_clothing_item_tag,
            clothing_item::remove_clothing_item_tag
        ))
}

fn category_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(category::list_categories, category::create_category))
        .routes(routes!(
            category::get_category,
            category::update_category,
            category::delete_category
        ))
}

fn tag_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(tag::list_tags, tag::create_tag))
        .routes(routes!(tag::get_tag, tag::update_tag, tag::delete_tag))
}
