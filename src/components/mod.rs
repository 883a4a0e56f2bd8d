pub mod music_graph;
