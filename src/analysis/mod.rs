//! Sample-size estimation: multiple-comparison correction, effect models,
//! and the shared refinement loop.

mod correction;
mod sample_size;

pub use correction::bonferroni_correction;
pub use sample_size::{
    binomial_sample_size, continuous_sample_size, estimate_sample_size, ratio_sample_size,
    BinomialEffect, ContinuousEffect, EffectModel, RatioEffect,
};
