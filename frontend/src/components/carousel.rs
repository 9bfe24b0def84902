use yew::prelude::*;

use crate::components::lazy::LazyImage;

/// Index of the active card in a fixed, non-empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    len: usize,
}

impl CarouselState {
    /// Starts on the first card. An empty set is treated as a single slot.
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(self) -> Self {
        Self {
            current: (self.current + 1) % self.len,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            current: (self.current + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }
}

#[derive(Clone, PartialEq)]
pub struct Character {
    pub name: AttrValue,
    pub role: AttrValue,
    pub image: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct CharacterSliderProps {
    pub characters: Vec<Character>,
}

#[function_component(CharacterSlider)]
pub fn character_slider(props: &CharacterSliderProps) -> Html {
    let len = props.characters.len();
    let slider = use_state_eq(|| CarouselState::new(len));

    let on_prev = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.set(slider.previous()))
    };
    let on_next = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.set(slider.next()))
    };

    html! {
        <div class="character-slider">
            <button class="slider-btn prev" aria-label="Anterior" disabled={len == 0} onclick={on_prev}>
                {"‹"}
            </button>
            <div class="character-track">
                {
                    props.characters.iter().enumerate().map(|(index, character)| html! {
                        <div
                            key={character.name.to_string()}
                            class={classes!("character-card", slider.is_active(index).then_some("active"))}
                        >
                            <LazyImage src={character.image.clone()} alt={character.name.clone()} />
                            <h3>{ character.name.clone() }</h3>
                            <p>{ character.role.clone() }</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <span class="slider-position">{ format!("{} / {}", slider.current() + 1, len) }</span>
            <button class="slider-btn next" aria-label="Próximo" disabled={len == 0} onclick={on_next}>
                {"›"}
            </button>
        </div>
    }
}
