//! Payment request editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Hold the two-copy `PaymentDocument` and the payee lookup table.
//! - Apply the field cascade to every edit coming from a form copy.
//! - On first render, load the saved document and the payee table from the
//!   backend and report failures through toast messages.

use common::model::document::PaymentDocument;
use common::model::payee::PayeeBook;
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

use helpers::show_toast;
pub use messages::Msg;
pub use state::PaymentRequestComponent;

impl Component for PaymentRequestComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        PaymentRequestComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            load_document(ctx.link().clone());
            load_payees(ctx.link().clone());
        }
    }
}

fn load_document(link: Scope<PaymentRequestComponent>) {
    spawn_local(async move {
        match Request::get("/api/document").send().await {
            Ok(resp) if resp.ok() => match resp.json::<PaymentDocument>().await {
                Ok(document) => link.send_message(Msg::DocumentLoaded(document)),
                Err(err) => {
                    gloo_console::error!(format!("Invalid document: {}", err));
                    show_toast("单据数据无法读取，已新建空白单据。");
                    link.send_message(Msg::DocumentLoaded(PaymentDocument::default()));
                }
            },
            Ok(resp) => show_toast(&format!(
                "加载单据失败：{}",
                resp.text().await.unwrap_or_default()
            )),
            Err(err) => show_toast(&format!("加载单据失败：{}", err)),
        }
    });
}

pub(crate) fn load_payees(link: Scope<PaymentRequestComponent>) {
    spawn_local(async move {
        match Request::get("/api/payees").send().await {
            Ok(resp) if resp.ok() => match resp.json::<PayeeBook>().await {
                Ok(book) => link.send_message(Msg::PayeesLoaded(book)),
                Err(err) => gloo_console::error!(format!("Invalid payee table: {}", err)),
            },
            Ok(resp) => show_toast(&format!(
                "加载收款人库失败：{}",
                resp.text().await.unwrap_or_default()
            )),
            Err(err) => show_toast(&format!("加载收款人库失败：{}", err)),
        }
    });
}
