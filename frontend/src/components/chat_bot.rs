use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::chat::engine::{Dialogue, PendingReply, Sender, ViewEffect, REPLY_DELAY_MS};

pub enum ChatBotMsg {
    Open,
    Close,
    Select(String),
    Deliver { timer: u64, reply: PendingReply },
    ScrollTo { timer: u64, anchor: &'static str },
}

/// Floating assistant with a scripted option menu.
pub struct ChatBot {
    open: bool,
    dialogue: Dialogue,
    timers: HashMap<u64, Timeout>,
    next_timer: u64,
}

pub fn scroll_to_section(anchor: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(anchor));
    if let Some(element) = element {
        element.scroll_into_view();
    }
}

impl ChatBot {
    fn schedule(&mut self, ctx: &Context<Self>, delay_ms: u32, make: impl FnOnce(u64) -> ChatBotMsg + 'static) {
        let timer = self.next_timer;
        self.next_timer += 1;
        let link = ctx.link().clone();
        let timeout = Timeout::new(delay_ms, move || link.send_message(make(timer)));
        self.timers.insert(timer, timeout);
    }

    fn render_messages(&self) -> Html {
        html! {
            { for self.dialogue.transcript().iter().map(|msg| {
                let (row, bubble, who) = match msg.sender {
                    Sender::Bot => ("chat-row bot", "chat-bubble bot", "Bot message"),
                    Sender::User => ("chat-row user", "chat-bubble user", "User message"),
                };
                html! {
                    <div class={row}>
                        if msg.sender == Sender::Bot {
                            <div class="chat-avatar" aria-label="Chatbot Avatar">{"💬"}</div>
                        }
                        <div class={bubble} aria-label={who}>{ msg.text.clone() }</div>
                        if msg.sender == Sender::User {
                            <div class="chat-avatar user" aria-label="User Avatar">{"👤"}</div>
                        }
                    </div>
                }
            }) }
        }
    }
}

impl Component for ChatBot {
    type Message = ChatBotMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            dialogue: Dialogue::new(),
            timers: HashMap::new(),
            next_timer: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatBotMsg::Open => {
                self.open = true;
                true
            }
            ChatBotMsg::Close => {
                self.open = false;
                // Dropping the timeouts cancels them.
                self.timers.clear();
                self.dialogue.reset();
                true
            }
            ChatBotMsg::Select(label) => {
                info!("Chat option selected: {}", label);
                let selection = self.dialogue.select(&label);
                let reply = selection.reply;
                self.schedule(ctx, REPLY_DELAY_MS, move |timer| ChatBotMsg::Deliver { timer, reply });
                if let Some(ViewEffect::ScrollTo { anchor, delay_ms }) = selection.effect {
                    self.schedule(ctx, delay_ms, move |timer| ChatBotMsg::ScrollTo { timer, anchor });
                }
                true
            }
            ChatBotMsg::Deliver { timer, reply } => {
                self.timers.remove(&timer);
                self.dialogue.deliver(reply)
            }
            ChatBotMsg::ScrollTo { timer, anchor } => {
                self.timers.remove(&timer);
                scroll_to_section(anchor);
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timers.clear();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let open = ctx.link().callback(|_| ChatBotMsg::Open);
        let close = ctx.link().callback(|_| ChatBotMsg::Close);

        html! {
            <div class="chatbot" role="complementary" aria-label="OmRadixSolutions AI Chat Assistant">
                <style>
                {r#"
                    .chatbot { position: fixed; bottom: 1rem; right: 1rem; z-index: 50; }
                    .chatbot-toggle {
                        padding: 0.75rem;
                        border-radius: 9999px;
                        border: 1px solid #374151;
                        background: linear-gradient(to right, #000, #1f2937, #374151);
                        color: #fff;
                        cursor: pointer;
                    }
                    .chatbot-window {
                        width: 22rem;
                        height: 500px;
                        display: flex;
                        flex-direction: column;
                        background: linear-gradient(to bottom, #111827, #000, #030712);
                        color: #fff;
                        border: 1px solid #1f2937;
                        border-radius: 0.75rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .chatbot-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0.75rem;
                        border-bottom: 1px solid #1f2937;
                    }
                    .chatbot-messages { flex: 1; overflow-y: auto; padding: 0.75rem; }
                    .chat-row { display: flex; align-items: flex-end; gap: 0.5rem; margin-bottom: 0.75rem; }
                    .chat-row.bot { justify-content: flex-start; }
                    .chat-row.user { justify-content: flex-end; }
                    .chat-bubble {
                        max-width: 70%;
                        padding: 0.4rem 0.75rem;
                        border-radius: 0.75rem;
                        font-size: 12px;
                        white-space: pre-line;
                    }
                    .chat-bubble.bot { background: #111827; border: 1px solid #374151; }
                    .chat-bubble.user { background: linear-gradient(to right, #fff, #e5e7eb); color: #000; }
                    .chatbot-options {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        padding: 0.5rem;
                        border-top: 1px solid #1f2937;
                    }
                    .chatbot-option {
                        padding: 0.4rem 0.5rem;
                        border: none;
                        border-radius: 0.5rem;
                        font-size: 11px;
                        background: linear-gradient(to right, #fff, #e5e7eb);
                        cursor: pointer;
                    }
                    @media (max-width: 480px) {
                        .chatbot-window { width: 20rem; }
                    }
                "#}
                </style>
                if !self.open {
                    <button class="chatbot-toggle" onclick={open} aria-label="Open OmRadix Chat Assistant">
                        {"💬"}
                    </button>
                } else {
                    <section class="chatbot-window" aria-live="polite">
                        <header class="chatbot-header">
                            <h3>{"🤖 OmRadix Assistant"}</h3>
                            <button class="chatbot-toggle" onclick={close} aria-label="Close Chat">{"✕"}</button>
                        </header>
                        <div class="chatbot-messages">
                            { self.render_messages() }
                        </div>
                        <footer class="chatbot-options">
                            { for self.dialogue.options().iter().map(|option| {
                                let label = option.label();
                                let onclick = ctx.link().callback(move |_| ChatBotMsg::Select(label.to_string()));
                                html! {
                                    <button class="chatbot-option" {onclick} aria-label={format!("Select option: {}", label)}>
                                        { label }
                                    </button>
                                }
                            }) }
                        </footer>
                    </section>
                }
            </div>
        }
    }
}
