pub mod models;
pub mod normalize;
