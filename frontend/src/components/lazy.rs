use yew::prelude::*;

use crate::config::use_landing_config;
use crate::utils::visibility::use_visibility;

/// `transition-delay` for the feature card at `index`, so cards animate in order.
pub fn stagger_delay(index: usize, step_s: f64) -> String {
    let delay_ms = (index as f64 * step_s * 1000.0).round() as u64;
    format!("transition-delay: {}ms;", delay_ms)
}

/// Attributes of a lazy `<img>` before and after it is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LazyImageAttrs {
    pub src: Option<AttrValue>,
    pub data_src: Option<AttrValue>,
    pub class: Classes,
}

/// Keeps the source deferred in `data-src` until `loaded`, then moves it to `src`
/// and drops the `lazy-image` class.
pub fn lazy_image_attrs(loaded: bool, src: &AttrValue, class: &Classes) -> LazyImageAttrs {
    if loaded {
        LazyImageAttrs {
            src: Some(src.clone()),
            data_src: None,
            class: class.clone(),
        }
    } else {
        LazyImageAttrs {
            src: None,
            data_src: Some(src.clone()),
            class: classes!("lazy-image", class.clone()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image whose source stays in `data-src` until it scrolls near the viewport.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let config = use_landing_config();
    let node = use_node_ref();
    let loaded = use_visibility(node.clone(), config.lazy_observer.clone());

    let attrs = lazy_image_attrs(loaded, &props.src, &props.class);

    html! {
        <img
            ref={node}
            class={attrs.class}
            src={attrs.src}
            data-src={attrs.data_src}
            alt={props.alt.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub children: Children,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let config = use_landing_config();
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), config.lazy_observer.clone());

    html! {
        <h2 ref={node} class={classes!("section-title", visible.then_some("visible"))}>
            { for props.children.iter() }
        </h2>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    /// Position among the feature cards, drives the stagger.
    pub index: usize,
    pub icon: AttrValue,
    pub title: AttrValue,
    pub children: Children,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let config = use_landing_config();
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), config.lazy_observer.clone());

    html! {
        <article
            ref={node}
            class={classes!("feature-card", visible.then_some("animate-in"))}
            style={stagger_delay(props.index, config.feature_stagger_s)}
        >
            <i class={classes!(props.icon.to_string())}></i>
            <h3>{ props.title.clone() }</h3>
            { for props.children.iter() }
        </article>
    }
}
