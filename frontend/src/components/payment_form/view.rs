//! View rendering for one form copy.
//!
//! The layout follows the printed form: title with the copy caption, a header
//! line with department, date and serial number, the bordered grid of payment
//! details, and two rows of signature boxes.

use common::amount::is_amount;
use common::model::form::FormField;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::suggestions;
use super::messages::Msg;
use super::state::PaymentFormComponent;

const SIGNATURES_PER_ROW: usize = 5;

pub fn view(component: &PaymentFormComponent, ctx: &Context<PaymentFormComponent>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    html! {
        <section class="payment-form">
            <header class="form-title">
                <h1>{ "付款申请单" }</h1>
                <span class="copy-label">{ props.copy.label() }</span>
            </header>
            { build_header_line(ctx, link) }
            <table class="form-grid">
                <tbody>
                    <tr>
                        <th>{ FormField::Payee.label() }</th>
                        <td colspan="3">{ build_payee_input(component, ctx, link) }</td>
                    </tr>
                    <tr>
                        <th>{ FormField::BankAccount.label() }</th>
                        <td>{ field_input(ctx, link, FormField::BankAccount, "") }</td>
                        <th>{ FormField::BankName.label() }</th>
                        <td class="with-action">
                            { field_input(ctx, link, FormField::BankName, "") }
                            <button
                                class="icon-btn small"
                                title="加入收款人库"
                                disabled={!props.record.has_complete_payee()}
                                onclick={link.callback(|_| Msg::RememberPayee)}
                            >
                                <i class="material-icons">{ "person_add" }</i>
                            </button>
                        </td>
                    </tr>
                    <tr>
                        <th>{ FormField::AmountWords.label() }</th>
                        <td colspan="3">
                            <input
                                class="form-input amount-words"
                                type="text"
                                readonly=true
                                tabindex="-1"
                                value={props.record.amount_words.clone()}
                            />
                        </td>
                    </tr>
                    <tr>
                        <th>{ FormField::AmountDigits.label() }</th>
                        <td>{ build_amount_input(ctx, link) }</td>
                        <th>{ FormField::Attachments.label() }</th>
                        <td class="with-suffix">
                            { field_input(ctx, link, FormField::Attachments, "short") }
                            <span>{ "张" }</span>
                        </td>
                    </tr>
                    <tr>
                        <th>{ FormField::Reason.label() }</th>
                        <td colspan="3">{ build_reason_input(ctx, link) }</td>
                    </tr>
                </tbody>
            </table>
            { build_signatures(ctx, link) }
        </section>
    }
}

fn build_header_line(
    ctx: &Context<PaymentFormComponent>,
    link: &Scope<PaymentFormComponent>,
) -> Html {
    html! {
        <div class="form-header">
            <label>
                { format!("{}：", FormField::Department.label()) }
                { field_input(ctx, link, FormField::Department, "") }
            </label>
            <span class="form-date">
                { field_input(ctx, link, FormField::Year, "year") }{ "年" }
                { field_input(ctx, link, FormField::Month, "short") }{ "月" }
                { field_input(ctx, link, FormField::Day, "short") }{ "日" }
            </span>
            <label>
                { format!("{}：", FormField::SerialNumber.label()) }
                { field_input(ctx, link, FormField::SerialNumber, "") }
            </label>
        </div>
    }
}

/// Plain single-line input bound to `field`.
fn field_input(
    ctx: &Context<PaymentFormComponent>,
    link: &Scope<PaymentFormComponent>,
    field: FormField,
    class: &'static str,
) -> Html {
    html! {
        <input
            class={classes!("form-input", class)}
            type="text"
            name={field.as_str()}
            placeholder={field.label()}
            value={ctx.props().record.get(field).to_string()}
            oninput={link.callback(move |e: InputEvent| {
                Msg::Edit(field, e.target_unchecked_into::<HtmlInputElement>().value())
            })}
        />
    }
}

fn build_amount_input(
    ctx: &Context<PaymentFormComponent>,
    link: &Scope<PaymentFormComponent>,
) -> Html {
    let digits = &ctx.props().record.amount_digits;
    let invalid = !digits.trim().is_empty() && !is_amount(digits);

    html! {
        <span class="with-prefix">
            <span>{ "¥" }</span>
            <input
                class={classes!("form-input", invalid.then_some("invalid"))}
                type="text"
                inputmode="decimal"
                name={FormField::AmountDigits.as_str()}
                title={if invalid { "金额格式不正确" } else { "" }}
                value={digits.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Edit(FormField::AmountDigits, input.value())
                })}
            />
        </span>
    }
}

fn build_reason_input(
    ctx: &Context<PaymentFormComponent>,
    link: &Scope<PaymentFormComponent>,
) -> Html {
    html! {
        <textarea
            class="form-input reason"
            rows="2"
            name={FormField::Reason.as_str()}
            value={ctx.props().record.reason.clone()}
            oninput={link.callback(|e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                Msg::Edit(FormField::Reason, input.value())
            })}
        />
    }
}

/// Payee input with the autocomplete list underneath.
fn build_payee_input(
    component: &PaymentFormComponent,
    ctx: &Context<PaymentFormComponent>,
    link: &Scope<PaymentFormComponent>,
) -> Html {
    let matches = if component.suggestions_open {
        suggestions(ctx.props())
    } else {
        Vec::new()
    };

    html! {
        <div class="payee-field">
            <input
                class="form-input"
                type="text"
                autocomplete="off"
                name={FormField::Payee.as_str()}
                placeholder={FormField::Payee.label()}
                value={ctx.props().record.payee.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Edit(FormField::Payee, input.value())
                })}
                onfocus={link.callback(|_: FocusEvent| Msg::OpenSuggestions)}
                onblur={link.callback(|_: FocusEvent| Msg::CloseSuggestions)}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    match e.key().as_str() {
                        "ArrowDown" => {
                            e.prevent_default();
                            Some(Msg::MoveHighlight(1))
                        }
                        "ArrowUp" => {
                            e.prevent_default();
                            Some(Msg::MoveHighlight(-1))
                        }
                        "Enter" => {
                            e.prevent_default();
                            Some(Msg::PickHighlighted)
                        }
                        "Escape" => Some(Msg::CloseSuggestions),
                        _ => None,
                    }
                })}
            />
            {
                if matches.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="payee-suggestions">
                            { for matches.into_iter().enumerate().map(|(index, entry)| {
                                let active = component.highlighted == Some(index);
                                let caption =
                                    format!("{} · {}", entry.bank_name, entry.bank_account);
                                let name = entry.name.clone();
                                // mousedown fires before the input loses focus
                                let onmousedown = link.callback(move |e: MouseEvent| {
                                    e.prevent_default();
                                    Msg::Pick(entry.clone())
                                });
                                html! {
                                    <li class={classes!(active.then_some("active"))} {onmousedown}>
                                        <span class="payee-name">{ name }</span>
                                        <span class="payee-bank">{ caption }</span>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                }
            }
        </div>
    }
}

fn build_signatures(
    ctx: &Context<PaymentFormComponent>,
    link: &Scope<PaymentFormComponent>,
) -> Html {
    html! {
        <table class="form-signatures">
            <tbody>
                { for FormField::SIGNATURES.chunks(SIGNATURES_PER_ROW).map(|row| html! {
                    <tr>
                        { for row.iter().map(|&field| html! {
                            <td>
                                <div class="signature-caption">{ field.label() }</div>
                                { field_input(ctx, link, field, "signature") }
                            </td>
                        }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
