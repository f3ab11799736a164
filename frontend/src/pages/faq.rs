use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

use crate::content::FAQS;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <style>
            {r#"
                .faq-section { max-width: 56rem; margin: 0 auto; padding: 6rem 1.5rem; }
                .faq-item { border-bottom: 1px solid rgba(255, 255, 255, 0.1); }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer { display: none; color: #d1d5db; padding-bottom: 1.25rem; }
                .faq-item.open .faq-answer { display: block; }
            "#}
            </style>
            <h2>{"Frequently Asked Questions"}</h2>
            <p>{"Get quick answers about Omradix Solutions: pricing, process, and support."}</p>
            { for FAQS.iter().map(|faq| html! {
                <FaqItem question={faq.question}>
                    <p>{ faq.answer }</p>
                </FaqItem>
            }) }
        </section>
    }
}
