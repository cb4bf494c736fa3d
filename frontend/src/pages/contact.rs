use yew::prelude::*;
use crate::components::contact_wizard::ContactWizard;
use crate::config;
use crate::inquiry::form_data::Language;

/// Picks the page language from the browser's preferred locale, e.g. `hi-IN`.
fn browser_language() -> Language {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .and_then(|tag| tag.split('-').next().and_then(Language::from_code))
        .unwrap_or_default()
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let language = use_state(browser_language);

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
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{language.contact_heading()}</h1>
                <p>{"Ready to transform your space? Let's discuss your project and create something amazing together."}</p>
                <div class="language-switch">
                    { for Language::ALL.iter().map(|lang| {
                        let lang = *lang;
                        let onclick = {
                            let language = language.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                log::debug!("Language switched to {}", lang.code());
                                language.set(lang);
                            })
                        };
                        html! {
                            <button
                                class={classes!("lang-button", (*language == lang).then_some("active"))}
                                {onclick}
                            >
                                {lang.name()}
                            </button>
                        }
                    }) }
                </div>
            </section>
            <section class="contact-body">
                <ContactWizard language={*language} />
                <p class="contact-alt">
                    {"Prefer email? Write to "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </p>
            </section>
            <style>
                {r#"
                .contact-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #faf6f2;
                }
                .contact-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                    background: linear-gradient(90deg, rgba(93, 64, 55, 0.95), rgba(200, 161, 101, 0.85));
                    color: #ffffff;
                }
                .contact-hero h1 { font-size: 3rem; margin-bottom: 1rem; }
                .language-switch { display: flex; gap: 0.5rem; justify-content: center; margin-top: 1.5rem; }
                .lang-button {
                    background: rgba(255, 255, 255, 0.15);
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    color: #ffffff;
                    border-radius: 999px;
                    padding: 0.35rem 1rem;
                    cursor: pointer;
                }
                .lang-button.active { background: #ffffff; color: #5d4037; }
                .contact-body { padding: 3rem 1rem; }
                .contact-alt { text-align: center; color: #8d6e63; margin-top: 2rem; }
                @media (max-width: 768px) {
                    .contact-hero h1 { font-size: 2rem; }
                }
                "#}
            </style>
        </div>
    }
}
