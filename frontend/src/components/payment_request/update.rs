//! Update function for the payment request editor.
//!
//! Elm-style: receives the current `PaymentRequestComponent`, the `Context`, and
//! a `Msg`, mutates the state, and returns whether the view should re-render.
//!
//! Key behaviors
//! - Form edits run through the cascade reducer with today's date injected.
//! - Saving posts the whole document and records its hash for dirty tracking.
//! - CSV import uploads the chosen file and replaces the payee table.
//! - PNG export posts the document, previews the image in a top sheet and
//!   reloads the payee table, since the backend remembers new payees on export.

use std::rc::Rc;

use common::model::document::PaymentDocument;
use common::model::payee::PayeeRecord;
use common::requests::{AddPayeeResponse, ImportSummary};
use common::{apply_field_change, apply_select_payee};
use gloo_net::http::Request;
use web_sys::{FormData, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{
    document_md5, png_object_url, revoke_object_url, set_window_dirty_flag, show_toast, today,
};
use super::load_payees;
use super::messages::Msg;
use super::state::PaymentRequestComponent;

pub fn update(
    component: &mut PaymentRequestComponent,
    ctx: &Context<PaymentRequestComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::DocumentLoaded(document) => {
            if !component.accept_loaded(document) {
                show_toast("已保留加载前输入的内容，尚未保存。");
            }
            set_window_dirty_flag(component.is_dirty());
            true
        }
        Msg::PayeesLoaded(book) => {
            component.payees = Rc::new(book);
            true
        }
        Msg::ReloadPayees => {
            load_payees(ctx.link().clone());
            false
        }
        Msg::FieldChanged(copy, field, value) => {
            let next = apply_field_change(component.document.copy(copy), field, &value, today());
            *component.document.copy_mut(copy) = next;
            set_window_dirty_flag(component.is_dirty());
            true
        }
        Msg::PayeeSelected(copy, entry) => {
            let next = apply_select_payee(component.document.copy(copy), &entry, today());
            *component.document.copy_mut(copy) = next;
            set_window_dirty_flag(component.is_dirty());
            true
        }
        Msg::RememberPayee(copy) => {
            match PayeeRecord::from_form(component.document.copy(copy)) {
                Some(entry) => remember_payee(ctx, entry),
                None => show_toast("请先填写收款人、账号和开户行。"),
            }
            false
        }
        Msg::DuplicateFirst => {
            component.document.duplicate_first();
            set_window_dirty_flag(component.is_dirty());
            show_toast("已将第一联复制到第二联。");
            true
        }
        Msg::Save => {
            save_document(component, ctx);
            false
        }
        Msg::SaveSucceeded(hash) => {
            component.original_md5 = Some(hash);
            set_window_dirty_flag(component.is_dirty());
            true
        }
        Msg::OpenImportDialog => {
            if let Some(input) = component.import_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::ImportFileSelected(file) => {
            import_payees(ctx, file);
            false
        }
        Msg::Export => {
            if component.exporting {
                return false;
            }
            component.exporting = true;
            export_document(component, ctx);
            true
        }
        Msg::ExportReady(url) => {
            if let Some(previous) = component.export_url.replace(url) {
                revoke_object_url(&previous);
            }
            component.exporting = false;
            open_top_sheet(component.export_dialog_ref.clone());
            true
        }
        Msg::ExportFailed => {
            component.exporting = false;
            true
        }
        Msg::CloseExport => {
            close_top_sheet(component.export_dialog_ref.clone());
            if let Some(url) = component.export_url.take() {
                revoke_object_url(&url);
            }
            true
        }
    }
}

fn save_document(component: &PaymentRequestComponent, ctx: &Context<PaymentRequestComponent>) {
    let document = component.document.clone();
    let hash = document_md5(&document);
    let link = ctx.link().clone();
    spawn_local(async move {
        let request = match Request::post("/api/document/save").json(&document) {
            Ok(request) => request,
            Err(err) => {
                show_toast(&format!("保存失败：{}", err));
                return;
            }
        };
        match request.send().await {
            Ok(response) if response.ok() => {
                link.send_message(Msg::SaveSucceeded(hash));
                show_toast("单据已保存。");
            }
            Ok(response) => show_toast(&format!(
                "保存失败：{}",
                response.text().await.unwrap_or_default()
            )),
            Err(err) => show_toast(&format!("保存失败：{}", err)),
        }
    });
}

fn remember_payee(ctx: &Context<PaymentRequestComponent>, entry: PayeeRecord) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let request = match Request::post("/api/payees/add").json(&entry) {
            Ok(request) => request,
            Err(err) => {
                show_toast(&format!("添加收款人失败：{}", err));
                return;
            }
        };
        match request.send().await {
            Ok(response) if response.ok() => match response.json::<AddPayeeResponse>().await {
                Ok(AddPayeeResponse { inserted: true }) => {
                    show_toast(&format!("已将 {} 加入收款人库。", entry.name));
                    link.send_message(Msg::ReloadPayees);
                }
                Ok(_) => show_toast("收款人库中已有该收款人。"),
                Err(err) => show_toast(&format!("添加收款人失败：{}", err)),
            },
            Ok(response) => show_toast(&format!(
                "添加收款人失败：{}",
                response.text().await.unwrap_or_default()
            )),
            Err(err) => show_toast(&format!("添加收款人失败：{}", err)),
        }
    });
}

fn import_payees(ctx: &Context<PaymentRequestComponent>, file: web_sys::File) {
    let form = match FormData::new() {
        Ok(form) => form,
        Err(_) => {
            show_toast("浏览器不支持文件上传。");
            return;
        }
    };
    if form
        .append_with_blob_and_filename("file", &file, &file.name())
        .is_err()
    {
        show_toast("无法读取所选文件。");
        return;
    }

    let link = ctx.link().clone();
    spawn_local(async move {
        let request = match Request::post("/api/payees/import").body(form) {
            Ok(request) => request,
            Err(err) => {
                show_toast(&format!("导入失败：{}", err));
                return;
            }
        };
        match request.send().await {
            Ok(response) if response.ok() => match response.json::<ImportSummary>().await {
                Ok(summary) => {
                    show_toast(&format!("已导入 {} 个收款人。", summary.imported));
                    link.send_message(Msg::ReloadPayees);
                }
                Err(err) => show_toast(&format!("导入失败：{}", err)),
            },
            Ok(response) => show_toast(&format!(
                "导入失败：{}",
                response.text().await.unwrap_or_default()
            )),
            Err(err) => show_toast(&format!("导入失败：{}", err)),
        }
    });
}

fn export_document(component: &PaymentRequestComponent, ctx: &Context<PaymentRequestComponent>) {
    let document = component.document.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match request_png(&document).await {
            Ok(url) => link.send_message_batch(vec![Msg::ExportReady(url), Msg::ReloadPayees]),
            Err(err) => {
                show_toast(&format!("导出失败：{}", err));
                link.send_message(Msg::ExportFailed);
            }
        }
    });
}

/// Posts the document to the export route and returns an object URL for the image.
async fn request_png(document: &PaymentDocument) -> Result<String, String> {
    let response = Request::post("/api/export")
        .json(document)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(response.text().await.unwrap_or_default());
    }
    let bytes = response.binary().await.map_err(|err| err.to_string())?;
    png_object_url(&bytes).map_err(|_| "无法生成预览".to_string())
}
