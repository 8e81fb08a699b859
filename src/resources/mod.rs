pub mod cache;
pub(crate) mod fingerprint;
