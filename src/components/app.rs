use super::{feed_view::FeedView, pull_settings::PullSettings};
use crate::model::{FeedAction, FeedState, sample_posts};
use crate::state::PullConfig;
use crate::util::clog;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

// Simulated fetch latency for a feed refresh
const REFRESH_DELAY_MS: i32 = 600;

#[function_component(App)]
pub fn app() -> Html {
    let feed = use_reducer(|| FeedState::with_posts(sample_posts(0)));
    let pull_config = use_state(|| PullConfig::load().unwrap_or_default());
    let show_settings = use_state(|| false);

    // Persist pull tuning changes
    {
        let config = *pull_config;
        use_effect_with(config, move |config| {
            config.save();
            || ()
        });
    }

    {
        let posts = feed.posts.len();
        let refreshes = feed.refresh_count;
        use_effect_with(feed.version, move |_| {
            clog(&format!("feed: {} posts after {} refreshes", posts, refreshes));
            || ()
        });
    }

    // Refresh is fire-and-forget from the pull container's point of view
    let on_refresh = {
        let feed = feed.clone();
        Callback::from(move |()| {
            if feed.loading {
                return;
            }
            let seed = feed.refresh_count + 1;
            feed.dispatch(FeedAction::BeginRefresh);
            let feed = feed.clone();
            let done = Closure::once_into_js(move || {
                feed.dispatch(FeedAction::Loaded {
                    posts: sample_posts(seed),
                });
            });
            let scheduled = web_sys::window().map(|win| {
                win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    done.unchecked_ref::<js_sys::Function>(),
                    REFRESH_DELAY_MS,
                )
            });
            if !matches!(scheduled, Some(Ok(_))) {
                clog("feed: could not schedule refresh");
            }
        })
    };
    let on_config_change = {
        let pull_config = pull_config.clone();
        Callback::from(move |cfg: PullConfig| pull_config.set(cfg))
    };
    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |()| show_settings.set(false))
    };
    let refresh_button = {
        let on_refresh = on_refresh.clone();
        Callback::from(move |_| on_refresh.emit(()))
    };

    html! {<div style="min-height:100vh; background:#f1f5f9; font-family:system-ui, sans-serif; color:#0f172a;">
        <nav id="top-bar" style="position:sticky; top:0; z-index:10; display:flex; align-items:center; gap:8px; padding:10px 16px; background:#fff; border-bottom:1px solid #e2e8f0;">
            <span style="font-weight:800; font-size:20px; color:#4f46e5;">{"Macanudo"}</span>
            <span style="font-size:12px; color:#64748b;">{ format!("Actualizado {} veces", feed.refresh_count) }</span>
            <button onclick={refresh_button} disabled={feed.loading} style="margin-left:auto;">{"Actualizar"}</button>
            <button onclick={open_settings}>{"Ajustes"}</button>
        </nav>
        <FeedView feed={feed.clone()} on_refresh={on_refresh} pull_config={*pull_config} />
        <PullSettings
            show={*show_settings}
            on_close={close_settings}
            config={*pull_config}
            on_change={on_config_change}
        />
    </div>}
}
