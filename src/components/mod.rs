pub mod circle_graph;
