//! The framing pipeline, one module per stage: `clean` (bottom edge), `trim`,
//! `padding` (canvas extension), `rescale` (edge tile fitting), `compose`
//! (frame layering), then `pipeline` and `save` to chain them.
pub mod clean;
pub mod compose;
pub mod padding;
pub mod pipeline;
pub mod rescale;
pub mod save;
pub mod trim;
