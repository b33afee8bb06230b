pub mod formatter;
pub mod matcher;
pub mod model;
pub mod pipeline;
pub mod tags;

pub use model::{AlsModel, ModelBundle, ModelError, Ranking, SimilarityModel};
pub use pipeline::Recommender;
