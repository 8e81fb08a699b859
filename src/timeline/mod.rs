pub(crate) mod aggregate;
pub mod frame;
pub mod interp;
pub(crate) mod symbol;
pub mod tween;
