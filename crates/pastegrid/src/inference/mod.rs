//! Column type inference over raw matrices.

mod column;

pub use column::{InferredColumns, TypeInferencer, infer};
