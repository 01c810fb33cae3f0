pub mod a001_transaction;
pub mod a002_product;
pub mod d401_charts;
pub mod predict;
