use super::{post_card::PostCard, pull_to_refresh::PullToRefresh};
use crate::model::FeedState;
use crate::state::PullConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FeedViewProps {
    pub feed: UseReducerHandle<FeedState>,
    pub on_refresh: Callback<()>,
    pub pull_config: PullConfig,
}

const NOTICE_STYLE: &str = "background:#fff; border:1px solid #e2e8f0; border-radius:16px; padding:24px; text-align:center; color:#64748b;";

#[function_component(FeedView)]
pub fn feed_view(props: &FeedViewProps) -> Html {
    let feed = &*props.feed;
    let body = if feed.loading {
        html! {<div style={NOTICE_STYLE}>{"Cargando publicaciones..."}</div>}
    } else if feed.posts.is_empty() {
        html! {<div style={NOTICE_STYLE}>{"Aún no hay publicaciones. ¡Crea la primera!"}</div>}
    } else {
        feed.posts
            .iter()
            .map(|p| html! { <PostCard key={p.id} post={p.clone()} /> })
            .collect::<Html>()
    };
    html! {
        <PullToRefresh
            on_refresh={props.on_refresh.clone()}
            config={props.pull_config}
            class={classes!("feed")}
        >
            <div style="max-width:640px; margin:0 auto; padding:12px; display:flex; flex-direction:column; gap:16px;">
                { body }
            </div>
        </PullToRefresh>
    }
}
