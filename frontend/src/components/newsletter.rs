use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const SUCCESS_MESSAGE: &str = "🎉 E-mail capturado! Fique atento às revelações exclusivas.";
pub const SUCCESS_STYLE: &str = "color: var(--color-accent-gold); font-size: 1.2rem; margin-top: 20px;";

/// Text of the alert shown right after a submission.
pub fn acknowledgment(email: &str) -> String {
    format!(
        "Obrigado por se juntar ao caos, {}! Fique de olho na sua caixa de entrada.",
        email
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsletterState {
    Open,
    Subscribed,
}

impl NewsletterState {
    /// Accepts a submission. Only an open form can be submitted; the
    /// acknowledgment is returned alongside the new state.
    pub fn submit(&self, email: &str) -> Option<(NewsletterState, String)> {
        match self {
            NewsletterState::Open => Some((NewsletterState::Subscribed, acknowledgment(email))),
            NewsletterState::Subscribed => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    #[prop_or(AttrValue::Static("Seu melhor e-mail"))]
    pub placeholder: AttrValue,
}

#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let state = use_state_eq(|| NewsletterState::Open);
    let email_input = use_node_ref();

    let onsubmit = {
        let state = state.clone();
        let email_input = email_input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = email_input.cast::<HtmlInputElement>() else {
                return;
            };
            let email = input.value();
            if let Some((next, message)) = state.submit(&email) {
                // No request is sent, the subscription is simulated
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.alert_with_message(&message) {
                        log::warn!("Newsletter alert failed: {:?}", e);
                    }
                }
                input.set_value("");
                log::info!("Newsletter signup captured");
                state.set(next);
            }
        })
    };

    html! {
        <form id="newsletter-form" class="newsletter-form" {onsubmit}>
            {
                match &*state {
                    NewsletterState::Open => html! {
                        <>
                            <input
                                ref={email_input}
                                type="email"
                                name="email"
                                placeholder={props.placeholder.clone()}
                                required=true
                            />
                            <button type="submit" class="btn btn-primary">{"Quero participar"}</button>
                        </>
                    },
                    NewsletterState::Subscribed => html! {
                        <p class="success-message" style={SUCCESS_STYLE}>{ SUCCESS_MESSAGE }</p>
                    },
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_acknowledges_the_address() {
        let (next, message) = NewsletterState::Open.submit("user@example.com").unwrap();
        assert_eq!(next, NewsletterState::Subscribed);
        assert_eq!(
            message,
            "Obrigado por se juntar ao caos, user@example.com! Fique de olho na sua caixa de entrada."
        );
    }

    #[test]
    fn subscribed_form_cannot_submit_again() {
        assert_eq!(NewsletterState::Subscribed.submit("other@example.com"), None);
    }

    #[test]
    fn success_style_is_inline() {
        assert!(SUCCESS_STYLE.contains("var(--color-accent-gold)"));
        assert!(SUCCESS_STYLE.contains("1.2rem"));
        assert!(SUCCESS_MESSAGE.starts_with("🎉"));
    }
}
