//! Load sequencing for the presenting side.
//!
//! A [`Session`] owns what is currently shown. Every accepted upload gets a [`LoadTicket`]
//! stamped with a generation; only the newest ticket can change the presented state, so a slow
//! load that finishes after a newer one is dropped instead of overwriting it.

use std::path::Path;

use crate::{
    assets::media::{admit_dropped, media_type_for_path},
    foundation::error::{GoldenError, GoldenResult},
    pipeline::Presentation,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadVia {
    /// Explicit file selection; any file is accepted and may fail at decode.
    Picked,
    /// Drag and drop; non-image media types are refused up front.
    Dropped,
}

#[derive(Clone, Debug)]
pub struct Upload {
    pub name: String,
    pub media_type: Option<String>,
    pub bytes: Vec<u8>,
    pub via: UploadVia,
}

impl Upload {
    pub fn from_path(path: &Path, via: UploadVia) -> GoldenResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            GoldenError::Other(anyhow::Error::new(e).context(format!("read '{}'", path.display())))
        })?;
        Ok(Self {
            name: path.display().to_string(),
            media_type: media_type_for_path(path).map(str::to_owned),
            bytes,
            via,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading(LoadTicket),
    Presented(Box<Presentation>),
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Default)]
pub struct Session {
    generation: u64,
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        match &self.state {
            SessionState::Presented(p) => Some(p),
            _ => None,
        }
    }

    /// Accept an upload and start a new generation. Refused drops leave the state untouched.
    pub fn submit(&mut self, upload: &Upload) -> GoldenResult<LoadTicket> {
        if upload.via == UploadVia::Dropped {
            admit_dropped(upload.media_type.as_deref()).inspect_err(|e| {
                tracing::debug!(name = %upload.name, error = %e, "ignoring dropped file");
            })?;
        }
        self.generation += 1;
        let ticket = LoadTicket(self.generation);
        self.state = SessionState::Loading(ticket);
        tracing::debug!(name = %upload.name, generation = ticket.0, "load started");
        Ok(ticket)
    }

    /// Settle a load. Only the newest ticket is applied; decode failures become `Failed`.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        outcome: GoldenResult<Presentation>,
    ) -> Completion {
        let in_flight = matches!(self.state, SessionState::Loading(t) if t == ticket);
        if ticket.0 != self.generation || !in_flight {
            tracing::warn!(
                generation = ticket.0,
                current = self.generation,
                "discarding stale load"
            );
            return Completion::Stale;
        }
        self.state = match outcome {
            Ok(p) => SessionState::Presented(Box::new(p)),
            Err(e) => SessionState::Failed(e.to_string()),
        };
        Completion::Applied
    }

    /// Hide any result and invalidate loads still in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
