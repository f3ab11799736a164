use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::lifecycle::{
    Field, ResetTicket, SubmissionLifecycle, SubmitOutcome, SubmitRejected, STATUS_RESET_MS,
};
use crate::contact::transport::{ContactTransport, GlooTransport};

fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

pub enum ContactMsg {
    SetField(Field, String),
    Submit,
    Settled(SubmitOutcome),
    Expire(ResetTicket),
}

/// Contact section with the enquiry form. Anchored at `#contact`.
pub struct ContactSection {
    lifecycle: SubmissionLifecycle,
    reset_timer: Option<Timeout>,
    transport: Rc<GlooTransport>,
}

impl ContactSection {
    // Replacing the previous timeout drops it, which cancels it.
    fn arm_reset(&mut self, ctx: &Context<Self>, ticket: ResetTicket, delay_ms: u32) {
        let link = ctx.link().clone();
        self.reset_timer = Some(Timeout::new(delay_ms, move || {
            link.send_message(ContactMsg::Expire(ticket))
        }));
    }
}

impl Component for ContactSection {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            lifecycle: SubmissionLifecycle::new(),
            reset_timer: None,
            transport: Rc::new(GlooTransport::new(config::contact_endpoint())),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::SetField(field, value) => {
                self.lifecycle.set_field(field, value);
                true
            }
            ContactMsg::Submit => match self.lifecycle.begin(now_ms()) {
                Ok((payload, ticket)) => {
                    info!("Submitting contact form for {}", payload.email);
                    self.arm_reset(ctx, ticket, STATUS_RESET_MS);
                    let transport = self.transport.clone();
                    ctx.link().send_future(async move {
                        ContactMsg::Settled(transport.send(&payload).await)
                    });
                    true
                }
                Err(SubmitRejected::InFlight) => false,
                Err(SubmitRejected::Incomplete(ticket)) => {
                    warn!("Contact form submitted with empty fields");
                    self.arm_reset(ctx, ticket, STATUS_RESET_MS);
                    true
                }
            },
            ContactMsg::Settled(outcome) => {
                info!("Contact submission settled: {:?}", outcome);
                let ticket = self.lifecycle.settle(outcome, now_ms());
                self.arm_reset(ctx, ticket, STATUS_RESET_MS);
                true
            }
            ContactMsg::Expire(ticket) => {
                let now = now_ms();
                if self.lifecycle.expire(ticket, now) {
                    self.reset_timer = None;
                    return true;
                }
                // Fired a little early; wait out the remainder.
                if let Some(remaining) = self.lifecycle.remaining_ms(ticket, now) {
                    self.arm_reset(ctx, ticket, remaining.max(1));
                }
                false
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.reset_timer = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = self.lifecycle.form();
        let status = self.lifecycle.status();
        let sending = self.lifecycle.is_in_flight();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let on_name = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::SetField(Field::Name, input.value())
        });
        let on_email = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::SetField(Field::Email, input.value())
        });
        let on_message = link.callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::SetField(Field::Message, input.value())
        });

        html! {
            <section id="contact" class="contact-section">
                <style>
                {r#"
                    .contact-section { background: #000; color: #fff; padding: 7rem 1.5rem; }
                    .contact-card {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        padding: 4rem;
                        background: rgba(29, 29, 31, 0.9);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        border-radius: 1rem;
                    }
                    .contact-info h2 { font-size: 3rem; font-weight: 800; line-height: 1.2; }
                    .contact-info p, .contact-info a { color: #d1d5db; }
                    .estimate-button {
                        padding: 0.5rem 1.5rem;
                        background: #fff;
                        color: #000;
                        font-weight: 600;
                        border: none;
                        border-radius: 0.25rem;
                    }
                    .contact-form { display: flex; flex-direction: column; gap: 1rem; }
                    .contact-form input, .contact-form textarea {
                        padding: 0.75rem 1rem;
                        background: transparent;
                        border: 1px solid #374151;
                        border-radius: 0.375rem;
                        color: #fff;
                        resize: none;
                    }
                    .contact-form input:focus, .contact-form textarea:focus { outline: none; border-color: #a855f7; }
                    .contact-submit {
                        padding: 0.75rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: linear-gradient(to right, #a855f7, #3b82f6);
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .contact-submit:disabled { opacity: 0.6; cursor: wait; }
                    .contact-status { font-size: 0.875rem; font-weight: 500; margin-top: 0.5rem; }
                    .contact-status.success { color: #4ade80; }
                    .contact-status.error { color: #f87171; }
                    .contact-status.info { color: #9ca3af; }
                    @media (max-width: 768px) {
                        .contact-card { grid-template-columns: 1fr; padding: 2.5rem; }
                        .contact-info h2 { font-size: 1.875rem; }
                    }
                "#}
                </style>
                <div class="contact-card">
                    <div class="contact-info">
                        <button class="estimate-button">{"Get Estimate"}</button>
                        <h2>{"Let's Talk With"}<br/>{"Experienced"}<br/>{"Creative Agency!"}</h2>
                        <p>
                            {"📞 "}
                            <a href="tel:+919373545169">{"+91 9373545169"}</a>
                            {" / "}
                            <a href="tel:+917378534650">{"+91 7378534650"}</a>
                        </p>
                        <p>{"⏰ 9 AM to 7 PM, Monday to Saturday"}</p>
                        <p>{"📧 omradixsolutions@gmail.com"}</p>
                    </div>
                    <form class="contact-form" {onsubmit}>
                        <input
                            type="text"
                            name="name"
                            placeholder="Your Name"
                            required={true}
                            value={form.name.clone()}
                            oninput={on_name}
                        />
                        <input
                            type="email"
                            name="email"
                            placeholder="Email"
                            required={true}
                            value={form.email.clone()}
                            oninput={on_email}
                        />
                        <textarea
                            name="message"
                            placeholder="Message"
                            rows="4"
                            required={true}
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                        <button type="submit" class="contact-submit" disabled={sending}>
                            {"Submit"}
                        </button>
                        if let Some(message) = status.message() {
                            <p class={classes!("contact-status", status.kind())}>{ message.to_string() }</p>
                        }
                    </form>
                </div>
            </section>
        }
    }
}
