use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::animation::entrance::HeroPart;
use crate::config::use_landing_config;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub subtitle: AttrValue,
    pub title: AttrValue,
    /// Call-to-action buttons.
    pub children: Children,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let config = use_landing_config();
    let revealed = use_state_eq(|| false);

    // One-shot entrance cascade on mount
    {
        let revealed = revealed.clone();
        let delay = config.entrance_delay_ms;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(delay, move || revealed.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let style_for = |part: HeroPart| revealed.then(|| part.revealed_style());

    html! {
        <section id="hero" class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <p class="subtitle" style={style_for(HeroPart::Subtitle)}>{ props.subtitle.clone() }</p>
                <h1 class="title-main" style={style_for(HeroPart::Title)}>{ props.title.clone() }</h1>
                <div class="cta-group" style={style_for(HeroPart::CallToAction)}>
                    { for props.children.iter() }
                </div>
            </div>
        </section>
    }
}
