use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::ImportSummary;
use futures_util::StreamExt;
use log::{error, info};

use super::spreadsheet::read_payees;
use crate::error::{Result, ServiceError};
use crate::state::AppState;

/// Uploads larger than this are rejected before parsing.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// HTTP handler wrapper that converts the import result to an `HttpResponse`.
///
/// - On success: returns `200 OK` with an `ImportSummary`.
/// - On a bad upload: returns `400 Bad Request` with the error message.
pub async fn process(state: web::Data<AppState>, payload: Multipart) -> impl Responder {
    match import_payees(&state, payload).await {
        Ok(imported) => {
            info!("Imported {} payee(s)", imported);
            HttpResponse::Ok().json(ImportSummary { imported })
        }
        Err(e) => {
            error!("Payee import failed: {}", e);
            e.error_response()
        }
    }
}

async fn import_payees(state: &AppState, payload: Multipart) -> Result<usize> {
    let data = read_csv_part(payload).await?;
    let entries = read_payees(&data)?;
    if entries.is_empty() {
        return Err(ServiceError::Upload("CSV 文件中没有收款人".to_string()));
    }
    state.store.replace_payees(&entries)
}

/// Collects the bytes of the `file` part, which must be a `.csv` file.
async fn read_csv_part(mut payload: Multipart) -> Result<Vec<u8>> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ServiceError::Upload(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if name.as_deref() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_lowercase()))
            .unwrap_or_default();
        if !filename.ends_with(".csv") {
            return Err(ServiceError::Upload("文件必须是 .csv 格式".to_string()));
        }

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| ServiceError::Upload(e.to_string()))?;
            if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(ServiceError::Upload("文件过大".to_string()));
            }
            data.extend_from_slice(&chunk);
        }
        return Ok(data);
    }
    Err(ServiceError::Upload("缺少 file 字段".to_string()))
}
