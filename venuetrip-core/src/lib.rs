pub mod fragment;
pub mod model;
