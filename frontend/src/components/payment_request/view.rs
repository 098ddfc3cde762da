//! View rendering for the payment request editor.
//!
//! A toolbar on top, then the A4 page holding the first copy in the upper half
//! and the second copy in the lower half, as they will be printed.

use common::model::document::CopyIndex;
use common::model::form::FormField;
use common::model::payee::PayeeRecord;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::export::export_dialog;
use super::messages::Msg;
use super::state::PaymentRequestComponent;
use crate::components::payment_form::PaymentFormComponent;
use crate::workspace_grid::WorkspaceGrid;

pub fn view(component: &PaymentRequestComponent, ctx: &Context<PaymentRequestComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="payment-request-root">
            { build_toolbar(component, link) }
            <WorkspaceGrid rows={2}>
                { for CopyIndex::BOTH.into_iter().map(|copy| build_copy(component, link, copy)) }
            </WorkspaceGrid>
            { export_dialog(component, link) }
        </div>
    }
}

fn build_toolbar(
    component: &PaymentRequestComponent,
    link: &Scope<PaymentRequestComponent>,
) -> Html {
    let dirty = component.is_dirty();

    let on_duplicate = link.callback(|_| Msg::DuplicateFirst);
    let on_import = link.callback(|_| Msg::OpenImportDialog);

    html! {
        <div class="icon-toolbar">
            <button
                class="icon-btn"
                onclick={link.callback(|_| Msg::Save)}
                style="position: relative;"
            >
                <i class="material-icons">{ "save" }</i>
                <span class="icon-label">{ "保存" }</span>
                {
                    if dirty {
                        html! {
                            <span
                                title="有未保存的修改"
                                style="position: absolute; top: 4px; right: 6px; width: 8px; height: 8px; background: #e53935; border-radius: 50%;"
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </button>
            { icon_button("content_copy", "复制第一联", on_duplicate, true) }
            { icon_button("upload_file", "导入收款人", on_import, true) }
            <a class="icon-btn wide" href="/api/payees/export" download="payees.csv">
                <i class="material-icons">{ "download" }</i>
                <span class="icon-label">{ "导出收款人" }</span>
            </a>
            <button
                class="icon-btn wide"
                disabled={component.exporting}
                onclick={link.callback(|_| Msg::Export)}
            >
                <i class="material-icons">
                    { if component.exporting { "hourglass_top" } else { "image" } }
                </i>
                <span class="icon-label">{ "导出图片" }</span>
            </button>
            <span class="payee-count">{ format!("收款人库：{} 条", component.payees.len()) }</span>
            <input
                type="file"
                accept=".csv,text/csv"
                style="display: none;"
                ref={component.import_input_ref.clone()}
                onchange={link.batch_callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let file = input.files().and_then(|files| files.get(0));
                    input.set_value("");
                    file.map(Msg::ImportFileSelected)
                })}
            />
        </div>
    }
}

fn build_copy(
    component: &PaymentRequestComponent,
    link: &Scope<PaymentRequestComponent>,
    copy: CopyIndex,
) -> Html {
    html! {
        <div class={classes!("form-cell", (copy == CopyIndex::First).then_some("cut-below"))}>
            <PaymentFormComponent
                copy={copy}
                record={component.document.copy(copy).clone()}
                payees={component.payees.clone()}
                on_change={link.callback(move |(field, value): (FormField, String)| {
                    Msg::FieldChanged(copy, field, value)
                })}
                on_select_payee={link.callback(move |entry: PayeeRecord| {
                    Msg::PayeeSelected(copy, entry)
                })}
                on_remember_payee={link.callback(move |_: ()| Msg::RememberPayee(copy))}
            />
        </div>
    }
}

/// Renders a toolbar button with a Material icon and a label.
fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>, wide: bool) -> Html {
    let class = if wide { "icon-btn wide" } else { "icon-btn" };
    html! {
        <button class={class} onclick={on_click}>
            <i class="material-icons">{ icon_name }</i>
            <span class="icon-label">{ label }</span>
        </button>
    }
}
