pub mod d400_overview;
pub mod d401_charts;
pub mod d402_forecast;
pub mod d403_classification;
pub mod d404_clustering;
