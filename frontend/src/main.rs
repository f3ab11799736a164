use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod chat {
    pub mod engine;
    pub mod options;
}
mod contact {
    pub mod lifecycle;
    pub mod transport;
}
mod components {
    pub mod chat_bot;
    pub mod contact_form;
    pub mod whatsapp_button;
}
mod pages {
    pub mod faq;
    pub mod landing;
}

use components::{chat_bot::ChatBot, whatsapp_button::WhatsAppButton};
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                </div>
            }
        }
    }
}

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("services", "Services"),
    ("works", "Works"),
    ("team", "Team"),
    ("faq", "FAQ"),
    ("blog", "Blog"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 80.0);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"OmRadix Solutions"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|(anchor, title)| html! {
                        <a href={format!("#{}", anchor)} class="nav-link" onclick={close_menu.clone()}>
                            { *title }
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <WhatsAppButton />
            <ChatBot />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
