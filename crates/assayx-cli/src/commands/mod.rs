pub mod assess;
pub mod vocab;
