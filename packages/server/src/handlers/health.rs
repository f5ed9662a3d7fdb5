/// Liveness probe for load balancers. Does not touch the database.
#[utoipa::path(
    get,
    path = "/ping",
    tag = "Health",
    operation_id = "ping",
    summary = "Heartbeat",
    responses((status = 200, description = "Server is up", body = String)),
)]
pub async fn ping() -> &'static str {
    "."
}
