//! Update function for one form copy.
//!
//! Field edits and payee picks are forwarded to the parent through the prop
//! callbacks; this function only keeps the suggestion list in step with them.

use common::model::form::FormField;
use yew::prelude::*;

use super::helpers::{next_highlight, suggestions};
use super::messages::Msg;
use super::state::PaymentFormComponent;

pub fn update(
    component: &mut PaymentFormComponent,
    ctx: &Context<PaymentFormComponent>,
    msg: Msg,
) -> bool {
    let props = ctx.props();
    match msg {
        Msg::Edit(field, value) => {
            if field == FormField::Payee {
                component.suggestions_open = !value.trim().is_empty();
                component.highlighted = None;
            }
            props.on_change.emit((field, value));
            true
        }
        Msg::OpenSuggestions => {
            component.suggestions_open = true;
            true
        }
        Msg::CloseSuggestions => {
            component.close_suggestions();
            true
        }
        Msg::MoveHighlight(delta) => {
            let count = suggestions(props).len();
            component.suggestions_open = true;
            component.highlighted = next_highlight(component.highlighted, delta, count);
            true
        }
        Msg::PickHighlighted => {
            let picked = component
                .highlighted
                .filter(|_| component.suggestions_open)
                .and_then(|index| suggestions(props).into_iter().nth(index));
            match picked {
                Some(entry) => {
                    ctx.link().send_message(Msg::Pick(entry));
                    false
                }
                None => false,
            }
        }
        Msg::Pick(entry) => {
            component.close_suggestions();
            props.on_select_payee.emit(entry);
            true
        }
        Msg::RememberPayee => {
            props.on_remember_payee.emit(());
            false
        }
    }
}
