//! Bundled fonts

mod alpha_prota_7;

pub use alpha_prota_7::ALPHA_PROTA_7;
