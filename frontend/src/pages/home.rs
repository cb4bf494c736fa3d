use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;
use crate::components::newsletter_signup::NewsletterSignup;
use crate::inquiry::form_data::Service;

#[function_component(Home)]
pub fn home() -> Html {
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

    html! {
        <div class="home-page">
            <section class="home-hero">
                <h1>{"Spaces Built Around You"}</h1>
                <p>{"Interior design, finishes, flooring and civil work from a single team."}</p>
                <Link<Route> to={Route::Contact} classes="hero-cta">
                    {"Start Your Project"}
                </Link<Route>>
            </section>
            <section class="home-services">
                <h2>{"What We Do"}</h2>
                <ul>
                    { for Service::ALL.iter().map(|service| html! {
                        <li>{service.label()}</li>
                    }) }
                </ul>
            </section>
            <NewsletterSignup />
            <style>
                {r#"
                .home-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #3e2723;
                }
                .home-hero {
                    text-align: center;
                    padding: 6rem 2rem;
                    background: linear-gradient(135deg, #5d4037, #c8a165);
                    color: #ffffff;
                }
                .home-hero h1 { font-size: 3rem; margin-bottom: 1rem; }
                .hero-cta {
                    display: inline-block;
                    margin-top: 1.5rem;
                    padding: 0.75rem 1.75rem;
                    border-radius: 8px;
                    background: #ffffff;
                    color: #5d4037;
                    text-decoration: none;
                    font-weight: 600;
                }
                .home-services { max-width: 48rem; margin: 3rem auto; text-align: center; }
                .home-services ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    justify-content: center;
                }
                .home-services li {
                    background: #efebe9;
                    border-radius: 999px;
                    padding: 0.4rem 1rem;
                }
                @media (max-width: 768px) {
                    .home-hero h1 { font-size: 2rem; }
                }
                "#}
            </style>
        </div>
    }
}
