pub mod document;
pub mod export;
pub mod payees;

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::state::AppState;
    use actix_web::{test, web, App};
    use clap::Parser;
    use common::model::document::PaymentDocument;
    use common::model::payee::PayeeRecord;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::http::StatusCode;
    use common::requests::{AddPayeeResponse, ImportSummary};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn state(dir: &TempDir) -> AppState {
        let database = dir.path().join("api.sqlite");
        let config = Config::try_parse_from([
            "payreq",
            "--database",
            database.to_str().unwrap(),
            "--dpi",
            "36",
            "--no-browser",
        ])
        .unwrap();
        let state = AppState::new(config, None);
        state.store.init().unwrap();
        state
    }


    #[actix_web::test]
    async fn document_round_trips_through_the_api() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(&dir)))
                .service(super::document::configure_routes()),
        )
        .await;

        let mut document = PaymentDocument::default();
        document.first.payee = "甲公司".into();
        document.duplicate_first();

        let req = test::TestRequest::post()
            .uri("/api/document/save")
            .set_json(&document)
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let req = test::TestRequest::get().uri("/api/document").to_request();
        let loaded: PaymentDocument = test::call_and_read_body_json(&app, req).await;
        assert_eq!(loaded, document);
    }

    #[actix_web::test]
    async fn adding_a_known_payee_reports_no_insert() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(&dir)))
                .service(super::payees::configure_routes()),
        )
        .await;

        let entry = PayeeRecord::new("乙公司", "6228", "农业银行");
        for expected in [true, false] {
            let req = test::TestRequest::post()
                .uri("/api/payees/add")
                .set_json(&entry)
                .to_request();
            let response: AddPayeeResponse = test::call_and_read_body_json(&app, req).await;
            assert_eq!(response.inserted, expected);
        }

        let req = test::TestRequest::get().uri("/api/payees").to_request();
        let payees: Vec<PayeeRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(payees, vec![entry]);
    }

    #[actix_web::test]
    async fn export_captures_new_payees_and_returns_png() {
        let dir = TempDir::new().unwrap();
        let state = state(&dir);
        let store = state.store.clone();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(super::export::configure_routes()),
        )
        .await;

        let mut document = PaymentDocument::default();
        document.first.payee = "丙公司".into();
        document.first.bank_account = "6217".into();
        document.first.bank_name = "建设银行".into();
        document.second.payee = "只有名称".into();

        let req = test::TestRequest::post()
            .uri("/api/export")
            .set_json(&document)
            .to_request();
        let response = test::call_service(&app, req).await;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "image/png"
        );
        let body = test::read_body(response).await;
        assert_eq!(&body[..4], b"\x89PNG");

        let payees = store.load_payees().unwrap();
        assert_eq!(payees.entries(), &[PayeeRecord::new("丙公司", "6217", "建设银行")]);
    }

    const BOUNDARY: &str = "payreq-test-boundary";

    /// A `multipart/form-data` request with a single file part.
    fn upload(field: &str, filename: &str, content: &[u8]) -> test::TestRequest {
        let mut body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: text/csv\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        test::TestRequest::post()
            .uri("/api/payees/import")
            .insert_header((
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn csv_import_replaces_the_whole_table() {
        let dir = TempDir::new().unwrap();
        let state = state(&dir);
        state
            .store
            .remember_payees([PayeeRecord::new("旧公司", "1", "旧银行")])
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(super::payees::configure_routes()),
        )
        .await;

        let csv = "收款人,账号,开户行\n甲公司,6222,工商银行\n乙公司,6228,农业银行\n";
        let req = upload("file", "payees.csv", csv.as_bytes()).to_request();
        let summary: ImportSummary = test::call_and_read_body_json(&app, req).await;
        assert_eq!(summary.imported, 2);

        let req = test::TestRequest::get().uri("/api/payees").to_request();
        let payees: Vec<PayeeRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            payees,
            vec![
                PayeeRecord::new("甲公司", "6222", "工商银行"),
                PayeeRecord::new("乙公司", "6228", "农业银行"),
            ]
        );
    }

    #[actix_web::test]
    async fn unusable_uploads_are_rejected_and_keep_the_table() {
        let dir = TempDir::new().unwrap();
        let state = state(&dir);
        let store = state.store.clone();
        let kept = PayeeRecord::new("丙公司", "6217", "建设银行");
        store.remember_payees([kept.clone()]).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(super::payees::configure_routes()),
        )
        .await;

        let valid = "收款人,账号,开户行\n丁公司,1,银行\n".as_bytes().to_vec();
        let oversized = vec![b'a'; 5 * 1024 * 1024 + 1];
        let cases = [
            upload("file", "payees.txt", &valid),
            upload("file", "payees.csv", "收款人,账号,开户行\n".as_bytes()),
            upload("attachment", "payees.csv", &valid),
            upload("file", "payees.csv", &oversized),
        ];
        for request in cases {
            let response = test::call_service(&app, request.to_request()).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        assert_eq!(store.load_payees().unwrap().entries(), &[kept]);
    }
}
