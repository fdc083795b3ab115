mod subscription;

use actix_web::{web, Route};

/// Every path and method is answered with the subscription document.
pub fn main_service() -> Route {
    web::to(subscription::serve_subscription)
}
