pub mod song;
pub mod tally;

pub use song::{SearchResults, Song, SongId};
pub use tally::WordTally;
