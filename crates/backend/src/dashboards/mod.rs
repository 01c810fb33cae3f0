pub mod d401_charts;
