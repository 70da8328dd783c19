//! Artifact removal engine module
//!
//! The engine itself is external. This module describes sample planes to it,
//! drives its initialize/invoke/finalize lifecycle, and provides a no-op
//! backend plus the native one when it is linked.

pub mod types;
mod deblock_engine;
mod session;
mod adapter;
mod passthrough_engine;
#[cfg(costella_unblock)]
mod costella_engine;

pub use types::{BlockAlignment, ChromaSampling, LayoutDescriptor, PlaneSelection, PlaneSet, ProcessingMode};
pub use deblock_engine::DeblockEngine;
pub use session::EngineSession;
pub use adapter::{describe, plan_layout, run_engine, LayoutPlan, PROCESSING_MODE};
pub use passthrough_engine::PassthroughEngine;
#[cfg(costella_unblock)]
pub use costella_engine::CostellaEngine;
