use crate::state::PullConfig;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PullSettingsProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub config: PullConfig,
    pub on_change: Callback<PullConfig>,
}

fn slider_value(e: &InputEvent) -> Option<f64> {
    e.target_unchecked_into::<HtmlInputElement>()
        .value()
        .parse::<f64>()
        .ok()
}

#[function_component]
pub fn PullSettings(props: &PullSettingsProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let threshold_cb = {
        let cb = props.on_change.clone();
        let config = props.config;
        Callback::from(move |e: InputEvent| {
            if let Some(v) = slider_value(&e) {
                cb.emit(PullConfig { arm_threshold: v, ..config }.sanitized());
            }
        })
    };
    let cap_cb = {
        let cb = props.on_change.clone();
        let config = props.config;
        Callback::from(move |e: InputEvent| {
            if let Some(v) = slider_value(&e) {
                cb.emit(PullConfig { cap: v, ..config }.sanitized());
            }
        })
    };
    let reset_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| cb.emit(PullConfig::default()))
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#fff; border:1px solid #e2e8f0; border-radius:12px; padding:16px 20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Actualizar al deslizar"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Cerrar"}</button>
            </div>
            <label style="display:flex; flex-direction:column; gap:4px;">
                <span>{ format!("Distancia para actualizar: {:.0}px", props.config.arm_threshold) }</span>
                <input type="range" min="40" max="200" step="5"
                    value={props.config.arm_threshold.to_string()} oninput={threshold_cb} />
            </label>
            <label style="display:flex; flex-direction:column; gap:4px;">
                <span>{ format!("Recorrido máximo: {:.0}px", props.config.cap) }</span>
                <input type="range" min="40" max="300" step="5"
                    value={props.config.cap.to_string()} oninput={cap_cb} />
            </label>
            <div style="display:flex; gap:8px;">
                <button onclick={reset_cb} style="flex:1;">{"Restablecer"}</button>
                <button onclick={close_cb} style="flex:0 0 auto;">{"Listo"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"El recorrido nunca es menor que la distancia para actualizar."}</div>
        </div>
    </div>}
}
