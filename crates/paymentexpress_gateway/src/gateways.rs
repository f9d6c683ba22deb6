//! Gateway implementations.

pub mod pxpay;
