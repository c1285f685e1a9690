use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlElement, TouchEvent};
use yew::prelude::*;

use super::pull_indicator::PullIndicator;
use crate::state::{GestureInput, PullConfig, PullController, PullFeedback};
use crate::util::{clog, page_scroll_y};

#[derive(Properties, PartialEq, Clone)]
pub struct PullToRefreshProps {
    pub on_refresh: Callback<()>,
    #[prop_or_default]
    pub config: PullConfig,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PullToRefresh)]
pub fn pull_to_refresh(props: &PullToRefreshProps) -> Html {
    let container_ref = use_node_ref();
    let feedback = use_state_eq(PullFeedback::default);
    // Listeners are attached once; they read the latest callback through this.
    let on_refresh_ref = use_mut_ref(|| props.on_refresh.clone());
    *on_refresh_ref.borrow_mut() = props.on_refresh.clone();
    let controller = {
        let on_refresh_ref = on_refresh_ref.clone();
        let config = props.config;
        use_mut_ref(move || {
            PullController::new(
                config,
                Box::new(move || {
                    clog("pull-to-refresh: refresh requested");
                    let cb = on_refresh_ref.borrow().clone();
                    cb.emit(());
                }) as Box<dyn FnMut()>,
            )
        })
    };

    // Effect: keep controller tuning in sync with props
    {
        let controller = controller.clone();
        use_effect_with(props.config, move |config| {
            controller.borrow_mut().set_config(*config);
            || ()
        });
    }

    // Effect: touch listeners on the container
    {
        let container_ref = container_ref.clone();
        let controller = controller.clone();
        let feedback = feedback.clone();
        use_effect_with((), move |_| -> Box<dyn FnOnce()> {
            let Some(container) = container_ref.cast::<HtmlElement>() else {
                clog("pull-to-refresh: container not mounted, gestures disabled");
                return Box::new(|| ());
            };

            let touch_start_cb = {
                let controller = controller.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().item(0) {
                        controller
                            .borrow_mut()
                            .start(t0.client_y() as f64, page_scroll_y());
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let touch_move_cb = {
                let controller = controller.clone();
                let feedback = feedback.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let Some(t0) = e.touches().item(0) else {
                        return;
                    };
                    let mut pc = controller.borrow_mut();
                    if !pc.is_tracking() {
                        return;
                    }
                    let before = pc.phase();
                    let pulling = pc.move_to(t0.client_y() as f64, page_scroll_y());
                    if pc.phase() != before {
                        clog(&format!("pull-to-refresh: {:?}", pc.phase()));
                    }
                    feedback.set(pc.feedback());
                    drop(pc);
                    if pulling {
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let touch_end_cb = {
                let controller = controller.clone();
                let feedback = feedback.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    controller.borrow_mut().end();
                    feedback.set(PullFeedback::default());
                }) as Box<dyn FnMut(_)>)
            };
            let touch_cancel_cb = {
                let controller = controller.clone();
                let feedback = feedback.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    controller.borrow_mut().cancel();
                    feedback.set(PullFeedback::default());
                }) as Box<dyn FnMut(_)>)
            };

            // Non-passive so a downward pull can suppress native scrolling
            let opts = AddEventListenerOptions::new();
            opts.set_passive(false);
            container
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                    &opts,
                )
                .ok();
            container
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                    &opts,
                )
                .ok();
            container
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            container
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_cancel_cb.as_ref().unchecked_ref(),
                )
                .ok();

            Box::new(move || {
                let _ = container.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = container.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_cancel_cb.as_ref().unchecked_ref(),
                );
                controller.borrow_mut().cancel();
            })
        });
    }

    let content_style = format!(
        "opacity:{}; transition:opacity 0.2s;",
        feedback.content_opacity()
    );
    html! {
        <div ref={container_ref} class={props.class.clone()}>
            <PullIndicator feedback={*feedback} arm_threshold={props.config.sanitized().arm_threshold} />
            <div style={content_style}>{ props.children.clone() }</div>
        </div>
    }
}
