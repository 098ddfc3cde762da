//! Top sheet previewing the exported PNG with a download link.

use yew::html::Scope;
use yew::prelude::*;

use crate::components::payment_request::{Msg, PaymentRequestComponent};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

const DOWNLOAD_NAME: &str = "付款申请单.png";

pub fn export_dialog(
    component: &PaymentRequestComponent,
    link: &Scope<PaymentRequestComponent>,
) -> Html {
    let on_close = link.callback(|_| Msg::CloseExport);

    html! {
        <YwMaterialTopSheet node_ref={component.export_dialog_ref.clone()}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;flex-direction:column;align-items:center;justify-content:center;gap:16px;">
                <button
                    onclick={on_close}
                    style="position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                >
                    { "✕" }
                </button>
                {
                    if let Some(url) = &component.export_url {
                        html! {
                            <>
                                <img
                                    src={url.clone()}
                                    alt="付款申请单"
                                    style="max-width:80vw;max-height:80vh;background:#fff;border-radius:4px;"
                                />
                                <a
                                    class="icon-btn wide"
                                    href={url.clone()}
                                    download={DOWNLOAD_NAME}
                                    style="background:#fff;"
                                >
                                    <i class="material-icons">{ "download" }</i>
                                    <span class="icon-label">{ "下载 PNG" }</span>
                                </a>
                            </>
                        }
                    } else {
                        html! { <div style="color:#fff;">{ "暂无导出图片" }</div> }
                    }
                }
            </div>
        </YwMaterialTopSheet>
    }
}
