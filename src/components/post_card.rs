use crate::model::{Post, PostKind};
use crate::util::format_count;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PostCardProps {
    pub post: Post,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    let initial = post
        .author
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let avatar = match &post.author.avatar {
        Some(src) => html! { <img src={src.clone()} alt={post.author.name.clone()} style="width:40px; height:40px; border-radius:50%;" /> },
        None => html! {<div style="width:40px; height:40px; border-radius:50%; background:#6366f1; color:#fff; display:flex; align-items:center; justify-content:center; font-weight:700;">{ initial }</div>},
    };
    html! {<article style="background:#fff; border:1px solid #e2e8f0; border-radius:16px; padding:16px; display:flex; flex-direction:column; gap:10px;">
        <header style="display:flex; align-items:center; gap:10px;">
            { avatar }
            <div style="display:flex; flex-direction:column;">
                <span style="font-weight:600;">{ post.author.name.clone() }</span>
                <span style="font-size:12px; color:#64748b;">{ format!("@{} · {}", post.author.username, post.relative_time) }</span>
            </div>
            if post.kind == PostKind::Help {
                <span style="margin-left:auto; font-size:11px; font-weight:700; color:#b45309; background:#fef3c7; border-radius:999px; padding:2px 8px;">{"AYUDA"}</span>
            }
        </header>
        <p style="margin:0; line-height:1.5;">{ post.content.clone() }</p>
        if !post.hashtags.is_empty() {
            <div style="display:flex; gap:6px; flex-wrap:wrap;">
                { for post.hashtags.iter().map(|tag| html! {
                    <span style="color:#4f46e5; font-size:13px;">{ format!("#{}", tag) }</span>
                }) }
            </div>
        }
        <footer style="display:flex; gap:16px; font-size:13px; color:#64748b;">
            <span>{ format!("❤️ {}", format_count(post.stats.likes)) }</span>
            <span>{ format!("💬 {}", format_count(post.stats.comments)) }</span>
        </footer>
    </article>}
}
