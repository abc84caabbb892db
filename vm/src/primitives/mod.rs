pub mod bits;
pub mod consts;
