pub mod a001_purchase;
pub mod a002_sale;
