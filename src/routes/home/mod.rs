use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

/// `GET /`
///
/// The brochure page, including the quote form that posts to
/// `/api/contact`.
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        // path relative to this file (checked at compile time!)
        .content_type(ContentType::html())
        .body(include_str!("./home.html"))
}
