use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class="whatsapp-widget">
            <style>
            {r#"
                .whatsapp-widget { position: fixed; bottom: 5rem; right: 1rem; z-index: 50; }
                .whatsapp-toggle {
                    padding: 0.75rem;
                    border-radius: 9999px;
                    border: 1px solid #4ade80;
                    background: #25D366;
                    color: #fff;
                    cursor: pointer;
                }
                .whatsapp-card {
                    position: relative;
                    width: 18rem;
                    padding: 1rem;
                    border-radius: 1rem;
                    border: 1px solid #22c55e;
                    background: linear-gradient(to bottom, #16a34a, #15803d, #166534);
                    color: #fff;
                }
                .whatsapp-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                }
                .whatsapp-card p { font-size: 0.875rem; color: #dcfce7; margin-bottom: 1rem; }
                .whatsapp-start {
                    display: block;
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    background: #25D366;
                    color: #fff;
                    text-align: center;
                    text-decoration: none;
                }
                .whatsapp-start:hover { background: #1ebe5d; }
            "#}
            </style>
            if !*is_open {
                <button class="whatsapp-toggle" onclick={toggle.clone()} aria-label="Chat on WhatsApp">{"🟢"}</button>
            } else {
                <div class="whatsapp-card">
                    <button class="whatsapp-close" onclick={toggle} aria-label="Close">{"✕"}</button>
                    <h3>{"💬 Chat on WhatsApp"}</h3>
                    <p>
                        {"Connect with "}<strong>{"OmRadix Solutions"}</strong>{" instantly on WhatsApp."}
                    </p>
                    <a href={config::whatsapp_url()} target="_blank" rel="noopener noreferrer" class="whatsapp-start">
                        {"Start Chat"}
                    </a>
                </div>
            }
        </div>
    }
}
