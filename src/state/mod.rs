pub mod pull;
pub mod settings;

pub use pull::{GestureInput, PullController, PullFeedback};
pub use settings::PullConfig;
