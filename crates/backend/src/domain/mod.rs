pub mod a001_transaction;
pub mod a002_product;
