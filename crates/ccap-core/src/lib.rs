pub mod dataset;
pub mod mora;
pub mod normalize;
pub mod phoneme;
pub mod settings;
pub mod unicode;
pub mod vocab;
