use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::error;

use super::spreadsheet::write_payees;
use crate::error::Result;
use crate::state::AppState;

const FILE_NAME: &str = "payees.csv";

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    match export_payees(&state) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(FILE_NAME.to_string())],
            })
            .body(body),
        Err(e) => {
            error!("Exporting payees failed: {}", e);
            e.error_response()
        }
    }
}

fn export_payees(state: &AppState) -> Result<Vec<u8>> {
    let book = state.store.load_payees()?;
    write_payees(book.entries())
}
