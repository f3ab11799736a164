use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::content::{BLOG_POSTS, PARTNERS, SERVICES, TEAM, WORKS};
use crate::pages::faq::FaqSection;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let year = chrono::Utc::now().year();

    html! {
        <div class="landing-page">
            <style>
            {r#"
                .landing-page { color: #fff; font-family: -apple-system, BlinkMacSystemFont, "SF Pro", "Segoe UI", Roboto, sans-serif; }
                .landing-page section { scroll-margin-top: 5rem; }
                .hero { min-height: 90vh; display: flex; flex-direction: column; justify-content: center; align-items: center; text-align: center; padding: 0 1.5rem; }
                .hero h1 { font-size: 3.5rem; font-weight: 800; }
                .hero-subtitle { max-width: 40rem; color: #d1d5db; }
                .hero-cta {
                    display: inline-block;
                    margin-top: 2rem;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #a855f7, #3b82f6);
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                .section-block { max-width: 72rem; margin: 0 auto; padding: 6rem 1.5rem; }
                .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; }
                .card {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }
                .card img { width: 100%; border-radius: 0.75rem; }
                .card p { color: #d1d5db; }
                .partner-strip { display: flex; flex-wrap: wrap; justify-content: center; gap: 2rem; padding: 2rem; color: #9ca3af; }
                .footer { text-align: center; padding: 2rem; color: #9ca3af; border-top: 1px solid rgba(255, 255, 255, 0.1); }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.25rem; }
                }
            "#}
            </style>

            <header class="hero">
                <h1>{"We Build Digital Experiences That Grow Your Business"}</h1>
                <p class="hero-subtitle">
                    {"OmRadix Solutions is a digital agency from Pune & Nashik crafting websites, designs and marketing that deliver."}
                </p>
                <a href="#contact" class="hero-cta">{"Start a Project"}</a>
            </header>

            <section id="services" class="section-block">
                <h2>{"Our Services"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <article class="card">
                            <div class="card-icon">{ service.icon }</div>
                            <h3>{ service.title }</h3>
                            <p>{ service.desc }</p>
                        </article>
                    }) }
                </div>
            </section>

            <section class="partner-strip" aria-label="Clients and partners">
                { for PARTNERS.iter().map(|partner| html! { <span>{ *partner }</span> }) }
            </section>

            <section id="works" class="section-block">
                <h2>{"Our Works"}</h2>
                <div class="card-grid">
                    { for WORKS.iter().map(|work| html! {
                        <article class="card">
                            <img src={work.image} alt={work.title} loading="lazy" />
                            <h3>{ work.title }</h3>
                            <p>{ work.desc }</p>
                        </article>
                    }) }
                </div>
            </section>

            <section id="team" class="section-block">
                <h2>{"Meet Our Team"}</h2>
                <div class="card-grid">
                    { for TEAM.iter().map(|member| html! {
                        <article class="card">
                            <h3>{ member.name }</h3>
                            <h4>{ member.role }</h4>
                            <p>{ member.desc }</p>
                        </article>
                    }) }
                </div>
            </section>

            <FaqSection />

            <section id="blog" class="section-block">
                <h2>{"From Our Blog"}</h2>
                <div class="card-grid">
                    { for BLOG_POSTS.iter().map(|post| html! {
                        <article class="card">
                            <img src={post.image} alt={post.title} loading="lazy" />
                            <h3>{ post.title }</h3>
                            <p>{ post.desc }</p>
                        </article>
                    }) }
                </div>
            </section>

            <ContactSection />

            <footer class="footer">
                <p>{format!("© {} OmRadix Solutions. All rights reserved.", year)}</p>
            </footer>
        </div>
    }
}
