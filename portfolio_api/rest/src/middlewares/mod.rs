use axum::Router;

mod panic_handler;
mod request_id;
mod trace;

/// Wrap the router in all middlewares. The request id is assigned first so
/// that it is available in the request span.
pub fn add(router: Router<()>) -> Router<()> {
    let router = panic_handler::add(router);
    let router = trace::add(router);
    request_id::add(router)
}
