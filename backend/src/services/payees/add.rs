use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::model::payee::PayeeRecord;
use common::requests::AddPayeeResponse;
use log::error;

use crate::state::AppState;

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<PayeeRecord>,
) -> impl Responder {
    let entry = payload.into_inner();
    if entry.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("收款人名称不能为空");
    }

    match state.store.remember_payees([entry]) {
        Ok(inserted) => HttpResponse::Ok().json(AddPayeeResponse {
            inserted: inserted > 0,
        }),
        Err(e) => {
            error!("Adding payee failed: {}", e);
            e.error_response()
        }
    }
}
