use axum::response::Redirect;

/// GET /
/// Send browsers to the contact form
#[utoipa::path(
    get,
    path = "/",
    tag = "contacts",
    responses(
        (status = 303, description = "Redirect to /form.html")
    )
)]
pub async fn index_handler() -> Redirect {
    Redirect::to("/form.html")
}
