mod component;
mod config;
mod error;
mod genre;
mod graph;
mod handlers;
mod highlight;
mod legend;
mod load;
mod render;
mod simulation;
mod state;
mod types;

pub use component::ArtistGraph;
pub use config::GraphConfig;
