//! Shape emitters.
//!
//! Extending the pipeline:
//! - add a new shape module here
//! - implement its `DrawList` emitter inside that module
//! - emitters append vertices and bias-corrected indices only; command
//!   boundaries stay with [`DrawList::finalize`](crate::draw::DrawList)

mod rect;
