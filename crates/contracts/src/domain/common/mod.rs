//! Types shared by the purchase and sale aggregates

pub mod null_default;
pub mod payment;

pub use payment::PaymentRecord;
