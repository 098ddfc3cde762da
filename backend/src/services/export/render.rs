//! Paper layout of the payment request form.
//!
//! The page holds two copies: the first in the top half and the second in the
//! bottom half, separated by a dashed cut line. All measurements are in
//! millimetres from the top-left corner of the copy.

use ab_glyph::FontArc;
use common::model::document::{CopyIndex, PaymentDocument};
use common::model::form::{FormField, FormRecord};
use image::GrayImage;

use super::sheet::{Align, Rect, Sheet, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

const TITLE: &str = "付款申请单";

const MARGIN: f32 = 12.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN;
const LABEL_WIDTH: f32 = 30.0;
const HALF_WIDTH: f32 = (CONTENT_WIDTH - 2.0 * LABEL_WIDTH) / 2.0;

const TITLE_TOP: f32 = 10.0;
const TITLE_HEIGHT: f32 = 10.0;
const HEADER_TOP: f32 = 22.0;
const HEADER_HEIGHT: f32 = 7.0;
const GRID_TOP: f32 = 31.0;
const ROW_HEIGHT: f32 = 10.0;
const REASON_HEIGHT: f32 = 18.0;
const SIGNATURE_HEIGHT: f32 = 14.0;
const SIGNATURES_PER_ROW: usize = 5;

const BORDER: f32 = 0.5;
const RULE: f32 = 0.25;

const TITLE_SIZE: f32 = 7.0;
const LABEL_SIZE: f32 = 3.8;
const VALUE_SIZE: f32 = 4.2;
const SMALL_SIZE: f32 = 3.0;
const PADDING: f32 = 1.5;

/// Renders both copies of `document` onto an A4 page.
pub fn render_document(document: &PaymentDocument, font: Option<&FontArc>, dpi: u32) -> GrayImage {
    let mut sheet = Sheet::a4(dpi, font);
    let half = PAGE_HEIGHT_MM / 2.0;

    for (slot, index) in CopyIndex::BOTH.into_iter().enumerate() {
        draw_form(&mut sheet, document.copy(index), index, half * slot as f32);
    }
    sheet.dashed_hline(0.0, PAGE_WIDTH_MM, half, 3.0, RULE);

    sheet.into_image()
}

fn draw_form(sheet: &mut Sheet, record: &FormRecord, index: CopyIndex, top: f32) {
    let title = Rect::new(MARGIN, top + TITLE_TOP, CONTENT_WIDTH, TITLE_HEIGHT);
    sheet.text(TITLE, title, TITLE_SIZE, Align::Center);
    sheet.text(index.label(), title, SMALL_SIZE, Align::Right);
    let underline_y = title.bottom() - 0.5;
    let underline_half = TITLE_SIZE * 3.2;
    sheet.hline(
        PAGE_WIDTH_MM / 2.0 - underline_half,
        PAGE_WIDTH_MM / 2.0 + underline_half,
        underline_y,
        RULE,
    );

    draw_header(sheet, record, top + HEADER_TOP);
    draw_grid(sheet, record, top + GRID_TOP);
}

fn draw_header(sheet: &mut Sheet, record: &FormRecord, y: f32) {
    let third = CONTENT_WIDTH / 3.0;
    let department = format!("{}：{}", FormField::Department.label(), record.department);
    let date = format!(
        "{}年{}月{}日",
        blank_pad(&record.year, 4),
        blank_pad(&record.month, 2),
        blank_pad(&record.day, 2)
    );
    let serial = format!("{}：{}", FormField::SerialNumber.label(), record.serial_number);

    let column = |index: f32| Rect::new(MARGIN + index * third, y, third, HEADER_HEIGHT);
    sheet.text(&department, column(0.0), LABEL_SIZE, Align::Left);
    sheet.text(&date, column(1.0), LABEL_SIZE, Align::Center);
    sheet.text(&serial, column(2.0), LABEL_SIZE, Align::Right);
}

/// Empty values keep their room on the date line.
fn blank_pad(value: &str, width: usize) -> String {
    if value.is_empty() {
        " ".repeat(width)
    } else {
        value.to_string()
    }
}

fn draw_grid(sheet: &mut Sheet, record: &FormRecord, top: f32) {
    let mut y = top;

    y = full_row(sheet, FormField::Payee, &record.payee, y, ROW_HEIGHT);
    y = split_row(
        sheet,
        y,
        (FormField::BankAccount.label(), record.bank_account.as_str()),
        (FormField::BankName.label(), record.bank_name.as_str()),
    );
    y = full_row(sheet, FormField::AmountWords, &record.amount_words, y, ROW_HEIGHT);

    let digits = if record.amount_digits.is_empty() {
        String::new()
    } else {
        format!("¥{}", record.amount_digits)
    };
    let attachments = format!("{} 张", blank_pad(&record.attachments, 2));
    y = split_row(
        sheet,
        y,
        (FormField::AmountDigits.label(), digits.as_str()),
        (FormField::Attachments.label(), attachments.as_str()),
    );
    y = full_row(sheet, FormField::Reason, &record.reason, y, REASON_HEIGHT);

    for row in FormField::SIGNATURES.chunks(SIGNATURES_PER_ROW) {
        y = signature_row(sheet, record, row, y);
    }

    sheet.rect(Rect::new(MARGIN, top, CONTENT_WIDTH, y - top), BORDER);
}

fn label_cell(sheet: &mut Sheet, label: &str, cell: Rect) {
    sheet.rect(cell, RULE);
    sheet.text(label, cell.inset(PADDING), LABEL_SIZE, Align::Center);
}

fn value_cell(sheet: &mut Sheet, value: &str, cell: Rect) {
    sheet.rect(cell, RULE);
    sheet.text(value, cell.inset(PADDING), VALUE_SIZE, Align::Left);
}

fn full_row(sheet: &mut Sheet, field: FormField, value: &str, y: f32, height: f32) -> f32 {
    label_cell(sheet, field.label(), Rect::new(MARGIN, y, LABEL_WIDTH, height));
    value_cell(
        sheet,
        value,
        Rect::new(MARGIN + LABEL_WIDTH, y, CONTENT_WIDTH - LABEL_WIDTH, height),
    );
    y + height
}

fn split_row(sheet: &mut Sheet, y: f32, left: (&str, &str), right: (&str, &str)) -> f32 {
    let mut x = MARGIN;
    for (label, value) in [left, right] {
        label_cell(sheet, label, Rect::new(x, y, LABEL_WIDTH, ROW_HEIGHT));
        x += LABEL_WIDTH;
        value_cell(sheet, value, Rect::new(x, y, HALF_WIDTH, ROW_HEIGHT));
        x += HALF_WIDTH;
    }
    y + ROW_HEIGHT
}

fn signature_row(sheet: &mut Sheet, record: &FormRecord, fields: &[FormField], y: f32) -> f32 {
    let width = CONTENT_WIDTH / SIGNATURES_PER_ROW as f32;
    let caption_height = SIGNATURE_HEIGHT * 0.4;

    for (column, &field) in fields.iter().enumerate() {
        let cell = Rect::new(MARGIN + width * column as f32, y, width, SIGNATURE_HEIGHT);
        sheet.rect(cell, RULE);

        let caption = Rect::new(cell.x, cell.y, cell.width, caption_height);
        sheet.text(field.label(), caption.inset(PADDING / 2.0), SMALL_SIZE, Align::Left);

        let name = Rect::new(
            cell.x,
            cell.y + caption_height,
            cell.width,
            cell.height - caption_height,
        );
        sheet.text(record.get(field), name.inset(PADDING), VALUE_SIZE, Align::Center);
    }
    y + SIGNATURE_HEIGHT
}
