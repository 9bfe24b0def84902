use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::use_landing_config;

/// Header is "scrolled" strictly past the threshold.
pub fn is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Picking a link always leaves the menu closed.
    pub fn link_selected(self) -> Self {
        Self { open: false }
    }
}

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: AttrValue,
    pub href: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub brand: AttrValue,
    pub links: Vec<NavLink>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let config = use_landing_config();
    let scrolled = use_state_eq(|| false);
    let menu = use_state_eq(MenuState::default);

    // Scroll listener for the header state
    {
        let scrolled = scrolled.clone();
        let threshold = config.scroll_threshold_px;
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let update = {
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(is_scrolled(scroll_y, threshold));
                                }
                            }
                        }
                    };
                    // Initial call, the page may be restored mid-scroll
                    update();
                    let callback = Closure::<dyn Fn()>::new(update);
                    match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        Ok(()) => Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        }),
                        Err(e) => {
                            log::error!("Failed to attach scroll listener: {:?}", e);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.link_selected()))
    };

    html! {
        <header id="main-header" class={classes!((*scrolled).then_some("scrolled"))}>
            <a href="#hero" class="logo">{ props.brand.clone() }</a>
            <nav>
                <button class="menu-toggle" aria-label="Menu" onclick={toggle_menu}>
                    <span></span><span></span><span></span>
                </button>
                <ul class={classes!(menu.open.then_some("active"))}>
                    {
                        props.links.iter().map(|link| html! {
                            <li key={link.href.to_string()}>
                                <a href={link.href.clone()} onclick={close_menu.clone()}>{ link.label.clone() }</a>
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            </nav>
        </header>
    }
}
