use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::subscription::Subscription;

/// Serve the freshest available subscription document.
///
/// Always answers 200, with an empty body when neither upstream nor cache
/// has a document.
pub async fn serve_subscription(
    req: HttpRequest,
    subscription: web::Data<Subscription>,
) -> impl Responder {
    let served = subscription.serve().await;
    debug!(
        "Serving {} bytes from {:?} for {} {}",
        served.body.len(),
        served.source,
        req.method(),
        req.path()
    );

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(served.body)
}
