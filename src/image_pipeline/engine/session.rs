//! Scoped engine lifecycle.
//!
//! `Uninitialized -> Initialized -> Invoked -> Finalized`. Once initialization
//! succeeds, finalization runs exactly once: from [`EngineSession::finish`],
//! or from `Drop` when the session is abandoned on an error path.

use std::io::Write;

use tracing::{debug, warn};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::engine::deblock_engine::DeblockEngine;
use crate::image_pipeline::engine::types::{LayoutDescriptor, ProcessingMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Initialized,
    Invoked { succeeded: bool },
    Finalized,
}

pub struct EngineSession<'a, E: DeblockEngine + ?Sized> {
    engine: &'a mut E,
    log: &'a mut dyn Write,
    state: EngineState,
}

impl<'a, E: DeblockEngine + ?Sized> EngineSession<'a, E> {
    /// Initializes the engine. On error nothing was acquired and no
    /// finalization will follow.
    pub fn begin(engine: &'a mut E, log: &'a mut dyn Write) -> Result<Self> {
        engine.initialize(log)?;
        debug!("Artifact removal engine initialized");
        Ok(Self {
            engine,
            log,
            state: EngineState::Initialized,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn invoke(&mut self, layout: &mut LayoutDescriptor<'_>, mode: ProcessingMode) -> bool {
        let succeeded = self.engine.invoke(layout, mode);
        self.state = EngineState::Invoked { succeeded };
        succeeded
    }

    /// Finalizes the engine and ends the session.
    pub fn finish(mut self) -> Result<()> {
        self.finalize()
    }

    fn finalize(&mut self) -> Result<()> {
        if self.state == EngineState::Finalized {
            return Ok(());
        }
        self.state = EngineState::Finalized;
        self.engine.finalize(&mut *self.log)?;
        self.log.flush()?;
        debug!("Artifact removal engine finalized");
        Ok(())
    }
}

impl<E: DeblockEngine + ?Sized> Drop for EngineSession<'_, E> {
    fn drop(&mut self) {
        if let Err(e) = self.finalize() {
            warn!("Engine finalization failed: {}", e);
        }
    }
}
