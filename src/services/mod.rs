pub mod aggregator;
pub mod directory;
pub mod game_query;
pub mod rankings;
