pub mod audio;
pub mod root;
pub mod search;
pub use audio::AudioController;
pub use root::RootController;
pub use search::{Relayed, SearchController};
