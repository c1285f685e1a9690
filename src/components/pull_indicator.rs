use crate::state::PullFeedback;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PullIndicatorProps {
    pub feedback: PullFeedback,
    pub arm_threshold: f64,
}

#[function_component(PullIndicator)]
pub fn pull_indicator(props: &PullIndicatorProps) -> Html {
    let fb = props.feedback;
    if !fb.is_visible() {
        return html! {};
    }
    let arrow = if fb.armed { "⬇️" } else { "⬆️" };
    let style = format!(
        "display:flex; justify-content:center; padding:16px 0; transform:translateY({}px);",
        fb.indicator_shift(props.arm_threshold)
    );
    html! {<div class="pull-indicator" style={style}>
        <div style="color:#6366f1; font-size:14px; font-weight:600; display:flex; align-items:center; gap:8px;">
            { format!("{} {}", arrow, fb.hint()) }
        </div>
    </div>}
}
