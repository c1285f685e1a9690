pub mod app;
pub mod feed_view;
pub mod post_card;
pub mod pull_indicator;
pub mod pull_settings;
pub mod pull_to_refresh;
