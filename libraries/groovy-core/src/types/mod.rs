mod ids;
mod navigation;
mod song;

pub use ids::SongId;
pub use navigation::{BrowseMode, ListOrder, DEFAULT_PLAYLIST};
pub use song::{normalize_path, parse_duration, NewSong, Song};
