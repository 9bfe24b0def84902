use yew::prelude::*;

use crate::animation::counter::{CounterAnimation, CounterPhase};
use crate::config::use_landing_config;
use crate::utils::frame::{now_ms, FrameLoop};
use crate::utils::visibility::use_visibility;

#[derive(Properties, PartialEq)]
pub struct StatItemProps {
    /// Raw `data-target` value.
    pub target: AttrValue,
    /// Text shown before counting starts; a `%` makes it a percentage.
    #[prop_or(AttrValue::Static("0"))]
    pub initial: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatItem)]
pub fn stat_item(props: &StatItemProps) -> Html {
    let config = use_landing_config();
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), config.stats_observer.clone());
    let text = use_state_eq(|| props.initial.to_string());
    let frames = use_mut_ref(|| None::<FrameLoop>);

    {
        let text = text.clone();
        let frames = frames.clone();
        let target = props.target.clone();
        let initial = props.initial.clone();
        let duration_ms = config.counter_duration_ms;
        use_effect_with_deps(
            move |visible: &bool| {
                if *visible && frames.borrow().is_none() {
                    let mut counter = CounterAnimation::from_element(&target, &initial, duration_ms);
                    let final_text = counter.final_frame().text;
                    match now_ms() {
                        Some(now) => {
                            counter.start(now);
                            let painter = text.clone();
                            match FrameLoop::start(move |now| {
                                let frame = counter.tick(now);
                                if counter.phase() == CounterPhase::Done {
                                    log::debug!("Counter finished at {}", frame.text);
                                }
                                painter.set(frame.text);
                                frame.reschedule
                            }) {
                                Ok(running) => *frames.borrow_mut() = Some(running),
                                Err(e) => {
                                    log::error!("Counter for {} not animated: {}", target, e);
                                    text.set(final_text);
                                }
                            }
                        }
                        None => text.set(final_text),
                    }
                }
                || ()
            },
            visible,
        );
    }

    html! {
        <div ref={node} class="stat-item">
            <span class="stat-number" data-target={props.target.clone()}>{ (*text).clone() }</span>
            <p class="stat-label">{ props.label.clone() }</p>
        </div>
    }
}
