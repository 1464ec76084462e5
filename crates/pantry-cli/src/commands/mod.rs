pub mod lint;
pub mod suggest;
