use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::error;

use crate::state::AppState;

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    match state.store.load_document() {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(e) => {
            error!("Loading document failed: {}", e);
            e.error_response()
        }
    }
}
