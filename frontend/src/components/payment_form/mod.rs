//! One copy of the payment request form.
//!
//! The component owns no form data: the record comes in through props and every
//! edit goes back to the parent as `(FormField, value)`, where the cascade rules
//! are applied. The only local state is the payee autocomplete list.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PaymentFormProps;
pub use state::PaymentFormComponent;

impl Component for PaymentFormComponent {
    type Message = Msg;
    type Properties = PaymentFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PaymentFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
