use actix_web::HttpResponse;
use uuid::Uuid;

/// Liveness probe. Answers 200 with an empty body while the server accepts requests.
#[tracing::instrument(name = "Health check", fields(probe_id = %Uuid::new_v4()))]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
