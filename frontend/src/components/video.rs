use yew::prelude::*;

use crate::config::use_landing_config;

pub const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
pub const EMBED_STYLE: &str = "width: 100%; height: 100%;";

/// Attributes of the player iframe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedDescriptor {
    pub src: String,
    pub allow: &'static str,
    pub allow_fullscreen: bool,
}

impl EmbedDescriptor {
    /// `None` when there is no usable video id.
    pub fn for_video(base_url: &str, video_id: Option<&str>) -> Option<Self> {
        let video_id = video_id.filter(|id| !id.is_empty())?;
        Some(Self {
            src: format!("{}{}?autoplay=1&rel=0", base_url, video_id),
            allow: EMBED_ALLOW,
            allow_fullscreen: true,
        })
    }
}

/// What the trailer container holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailerContent {
    Placeholder,
    Player(EmbedDescriptor),
}

impl TrailerContent {
    /// Placeholder click. Without an id nothing changes; once playing, further
    /// clicks land on the iframe and never reach here.
    pub fn clicked(self, base_url: &str, video_id: Option<&str>) -> Self {
        match self {
            TrailerContent::Placeholder => EmbedDescriptor::for_video(base_url, video_id)
                .map(TrailerContent::Player)
                .unwrap_or(TrailerContent::Placeholder),
            playing => playing,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoEmbedProps {
    #[prop_or_default]
    pub video_id: Option<AttrValue>,
    pub poster: AttrValue,
    pub title: AttrValue,
}

#[function_component(VideoEmbed)]
pub fn video_embed(props: &VideoEmbedProps) -> Html {
    let config = use_landing_config();
    let content = use_state_eq(|| TrailerContent::Placeholder);

    let on_click = {
        let content = content.clone();
        let video_id = props.video_id.clone();
        let base_url = config.embed_base_url.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*content).clone().clicked(&base_url, video_id.as_deref());
            match &next {
                TrailerContent::Player(embed) => log::info!("Loading trailer {}", embed.src),
                TrailerContent::Placeholder => log::debug!("Trailer placeholder has no video id"),
            }
            content.set(next);
        })
    };

    html! {
        <div id="trailer" class="video-container">
            {
                match &*content {
                    TrailerContent::Player(embed) => html! {
                        <iframe
                            src={embed.src.clone()}
                            frameborder="0"
                            allow={embed.allow}
                            allowfullscreen={embed.allow_fullscreen}
                            style={EMBED_STYLE}
                            title={props.title.clone()}
                        ></iframe>
                    },
                    TrailerContent::Placeholder => html! {
                        <div class="video-placeholder" data-video-id={props.video_id.clone()} onclick={on_click}>
                            <img src={props.poster.clone()} alt={props.title.clone()} loading="lazy" />
                            <span class="play-button">{"▶"}</span>
                        </div>
                    },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.youtube.com/embed/";

    #[test]
    fn embed_url_is_exact() {
        let embed = EmbedDescriptor::for_video(BASE, Some("dQw4w9WgXcQ")).unwrap();
        assert_eq!(embed.src, "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0");
        assert_eq!(
            embed.allow,
            "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
        );
        assert!(embed.allow_fullscreen);
    }

    #[test]
    fn missing_or_empty_id_has_no_embed() {
        assert_eq!(EmbedDescriptor::for_video(BASE, None), None);
        assert_eq!(EmbedDescriptor::for_video(BASE, Some("")), None);
    }

    #[test]
    fn click_with_id_swaps_in_a_single_player() {
        let content = TrailerContent::Placeholder.clicked(BASE, Some("abc123"));
        assert!(matches!(content, TrailerContent::Player(ref e) if e.src.contains("/embed/abc123?")));
    }

    #[test]
    fn click_without_id_leaves_placeholder() {
        assert_eq!(
            TrailerContent::Placeholder.clicked(BASE, None),
            TrailerContent::Placeholder
        );
    }

    #[test]
    fn playing_trailer_is_not_replaced() {
        let playing = TrailerContent::Placeholder.clicked(BASE, Some("first"));
        assert_eq!(playing.clone().clicked(BASE, Some("second")), playing);
    }
}
