use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::error;

use crate::state::AppState;

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    match state.store.load_payees() {
        Ok(book) => HttpResponse::Ok().json(book),
        Err(e) => {
            error!("Loading payees failed: {}", e);
            e.error_response()
        }
    }
}
