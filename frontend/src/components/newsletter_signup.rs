use yew::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::callback::Timeout;

use crate::newsletter::{self, SubscriptionOutcome};

#[derive(Properties, PartialEq)]
pub struct NewsletterSignupProps {
    #[prop_or(AttrValue::from("Stay Updated with Design Insights"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::from("Subscribe to our newsletter for the latest tips, trends, and expert advice delivered directly to your inbox."))]
    pub description: AttrValue,
}

#[function_component(NewsletterSignup)]
pub fn newsletter_signup(props: &NewsletterSignupProps) -> Html {
    let email = use_state(String::new);
    let agreed = use_state(|| false);
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let on_email = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let on_agree = {
        let agreed = agreed.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            agreed.set(input.checked());
        })
    };

    let on_submit = {
        let email = email.clone();
        let agreed = agreed.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(e) = newsletter::check_request(&email, *agreed) {
                error.set(Some(e.to_string()));
                return;
            }

            is_loading.set(true);
            let address = (*email).clone();
            let email = email.clone();
            let agreed_flag = *agreed;
            let agreed = agreed.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                match newsletter::subscribe(&address, agreed_flag).await {
                    Ok(SubscriptionOutcome::Subscribed { message }) => {
                        email.set(String::new());
                        agreed.set(false);
                        success.set(Some(message));
                        // Let the form come back after a while
                        let success = success.clone();
                        Timeout::new(5_000, move || success.set(None)).forget();
                    }
                    Ok(SubscriptionOutcome::AlreadySubscribed { message }) => {
                        error.set(Some(message));
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    html! {
        <section class="newsletter">
            <h3>{&props.title}</h3>
            <p class="newsletter-description">{&props.description}</p>
            if let Some(message) = (*success).clone() {
                <p class="newsletter-success">{format!("✅ {}", message)}</p>
            } else {
                <form class="newsletter-form" onsubmit={on_submit}>
                    <input
                        type="email"
                        placeholder="Enter your email address"
                        value={(*email).clone()}
                        oninput={on_email}
                        disabled={*is_loading}
                    />
                    <label class="newsletter-terms">
                        <input type="checkbox" checked={*agreed} onchange={on_agree} />
                        {"I agree to receive emails from PentaArch"}
                    </label>
                    <button type="submit" disabled={*is_loading}>
                        { if *is_loading { "Subscribing..." } else { "Subscribe" } }
                    </button>
                    if let Some(message) = (*error).clone() {
                        <p class="newsletter-error">{message}</p>
                    }
                </form>
            }
            <style>
                {r#"
                    .newsletter {
                        max-width: 32rem;
                        margin: 3rem auto;
                        padding: 2rem;
                        text-align: center;
                        background: #faf6f2;
                        border-radius: 16px;
                    }
                    .newsletter-form { display: flex; flex-direction: column; gap: 0.75rem; }
                    .newsletter-form input[type="email"] {
                        padding: 0.6rem 0.75rem;
                        border: 1px solid #d7ccc8;
                        border-radius: 8px;
                    }
                    .newsletter-form button {
                        padding: 0.6rem 1rem;
                        border: none;
                        border-radius: 8px;
                        background: #5d4037;
                        color: #fff;
                        cursor: pointer;
                    }
                    .newsletter-terms { font-size: 0.85rem; display: flex; gap: 0.5rem; justify-content: center; }
                    .newsletter-error { color: #c62828; margin: 0; }
                    .newsletter-success { color: #2e7d32; }
                "#}
            </style>
        </section>
    }
}
