pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("root vertex `{root}` is not an endpoint of any edge")]
    UnknownRoot { root: String },

    #[error("edge {from} -> {to} has a non-finite weight ({weight})")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("total weight magnitude {magnitude} is too large to leave room for synthetic edges")]
    WeightRange { magnitude: f64 },

    #[error("supervertex containing `{vertex}` was expanded without a chosen incoming edge")]
    ContractionIncomplete { vertex: String },
}
