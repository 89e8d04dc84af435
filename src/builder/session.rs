use std::fmt::{Display, Formatter};

use tracing::{debug, warn};

use super::matrix::{generate_matrix, ModuleMatrix};
use super::{render_matrix, StyledQR};
use crate::common::{QRError, QRResult};
use crate::style::{ContrastValidator, StyleConfig};

/// Monotonic tag of a render request. Only the latest one may reach the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Display for Generation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Encoding,
    Drawing,
    Done,
}

/// Snapshot of one request. Encoding may run anywhere, its result goes back through
/// [`RenderSession::complete`].
#[derive(Debug, Clone)]
pub struct RenderRequest {
    gen: Generation,
    payload: String,
    style: StyleConfig,
}

impl RenderRequest {
    pub fn generation(&self) -> Generation {
        self.gen
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn encode(&self) -> QRResult<ModuleMatrix> {
        generate_matrix(&self.payload, self.style.ec_level())
    }
}

#[derive(Debug)]
pub enum RenderOutcome {
    Rendered(StyledQR),
    Failed(QRError),
    /// A newer request was issued while this one was encoding; its result was dropped.
    Stale { generation: Generation, latest: Generation },
}

impl RenderOutcome {
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale { .. })
    }
}

/// Serializes renders for one output. Every [`request`](Self::request) supersedes the
/// ones before it, so late encoder results never overwrite a newer image.
#[derive(Debug)]
pub struct RenderSession {
    latest: u64,
    state: RenderState,
    validator: ContrastValidator,
}

impl Default for RenderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSession {
    pub fn new() -> Self {
        Self::with_validator(ContrastValidator::default())
    }

    pub fn with_validator(validator: ContrastValidator) -> Self {
        Self { latest: 0, state: RenderState::Idle, validator }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn latest(&self) -> Option<Generation> {
        (self.latest > 0).then_some(Generation(self.latest))
    }

    pub fn is_current(&self, gen: Generation) -> bool {
        gen.0 == self.latest
    }

    pub fn request(&mut self, payload: impl Into<String>, style: &StyleConfig) -> RenderRequest {
        self.latest += 1;
        self.state = RenderState::Encoding;
        let gen = Generation(self.latest);
        debug!(%gen, "Render requested");
        RenderRequest { gen, payload: payload.into(), style: *style }
    }

    pub fn complete(
        &mut self,
        req: RenderRequest,
        encoded: QRResult<ModuleMatrix>,
    ) -> RenderOutcome {
        let gen = req.gen;
        if !self.is_current(gen) {
            let latest = Generation(self.latest);
            debug!(%gen, %latest, "Discarding stale render");
            return RenderOutcome::Stale { generation: gen, latest };
        }

        let matrix = match encoded {
            Ok(m) => m,
            Err(err) => {
                warn!(%gen, %err, "Encoding failed");
                self.state = RenderState::Done;
                return RenderOutcome::Failed(err);
            }
        };

        self.state = RenderState::Drawing;
        let res = render_matrix(matrix, &req.style, &self.validator);
        self.state = RenderState::Done;
        match res {
            Ok(qr) => RenderOutcome::Rendered(qr),
            Err(err) => RenderOutcome::Failed(err),
        }
    }

    /// Request, encode and complete in one go.
    pub fn render(&mut self, payload: impl Into<String>, style: &StyleConfig) -> RenderOutcome {
        let req = self.request(payload, style);
        let encoded = req.encode();
        self.complete(req, encoded)
    }
}
