//! Feed data shown under the pull-to-refresh container.
//! Posts are demo data; there is no backend in this crate.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostStats {
    pub likes: u32,
    pub comments: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostKind {
    #[default]
    Normal,
    /// Request for help from the community; rendered with a badge.
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub author: PostAuthor,
    pub content: String,
    pub relative_time: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub stats: PostStats,
    #[serde(default, rename = "type")]
    pub kind: PostKind,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub loading: bool,
    pub refresh_count: u32,
    /// Bumped on every change so effects can depend on a cheap key.
    pub version: u64,
}

impl FeedState {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug)]
pub enum FeedAction {
    BeginRefresh,
    Loaded { posts: Vec<Post> },
}

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use FeedAction::*;
        let mut new = (*self).clone();
        match action {
            BeginRefresh => {
                if new.loading {
                    return self;
                }
                new.loading = true;
            }
            Loaded { posts } => {
                new.posts = posts;
                new.loading = false;
                new.refresh_count = new.refresh_count.saturating_add(1);
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

struct SeedPost {
    name: &'static str,
    username: &'static str,
    content: &'static str,
    hashtags: &'static [&'static str],
    kind: PostKind,
}

const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        name: "Lucía Pereyra",
        username: "lupe",
        content: "Primer mate del día y el feed ya está lleno de buenas noticias ☀️",
        hashtags: &["mañanas", "mate"],
        kind: PostKind::Normal,
    },
    SeedPost {
        name: "Martín Gómez",
        username: "tincho",
        content: "¿Alguien sabe cómo cambiar el tema del perfil desde el celu?",
        hashtags: &["ayuda"],
        kind: PostKind::Help,
    },
    SeedPost {
        name: "Sofía Ruiz",
        username: "sofi.r",
        content: "Se viene el torneo del squad este finde. ¡Anótense!",
        hashtags: &["squads", "torneo"],
        kind: PostKind::Normal,
    },
    SeedPost {
        name: "Diego Fernández",
        username: "dfer",
        content: "Nueva decoración de carreras en la tienda, quedó tremenda 🏁",
        hashtags: &["tienda", "temas"],
        kind: PostKind::Normal,
    },
    SeedPost {
        name: "Valentina Costa",
        username: "valecosta",
        content: "Necesito recomendaciones de series para el fin de semana",
        hashtags: &["series", "ayuda"],
        kind: PostKind::Help,
    },
];

/// Deterministic demo posts; each seed rotates the order and nudges the stats
/// so a refresh visibly changes the feed.
pub fn sample_posts(seed: u32) -> Vec<Post> {
    let n = SEED_POSTS.len();
    (0..n)
        .map(|i| {
            let sp = &SEED_POSTS[(i + seed as usize) % n];
            let minutes = (i as u32 + 1) * 7 + seed % 5;
            Post {
                id: u64::from(seed) * 100 + i as u64,
                author: PostAuthor {
                    name: sp.name.to_string(),
                    username: sp.username.to_string(),
                    avatar: None,
                },
                content: sp.content.to_string(),
                relative_time: format!("hace {} min", minutes),
                hashtags: sp.hashtags.iter().map(|h| h.to_string()).collect(),
                stats: PostStats {
                    likes: 3 + (seed * 11 + i as u32 * 17) % 240,
                    comments: (seed * 3 + i as u32 * 5) % 40,
                },
                kind: sp.kind,
            }
        })
        .collect()
}
