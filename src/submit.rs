//! Scale submission coordination.
//!
//! Orchestrates the pre-submission pipeline: selected-site check,
//! sequential pending-work checks, conflict validation, payload build,
//! and the single persistence call. Preconditions run in that order and
//! the first failure aborts the whole operation.
//!
//! Pending-work checks are issued one site at a time and short-circuit
//! on the first positive result, so latency is linear in selected-site
//! count — an accepted trade-off for the tens of sites this system
//! schedules.
//!
//! Submission is never retried automatically; on failure the ledger is
//! left untouched and the caller retries manually. The coordinator
//! carries its own in-flight flag so a caller cannot start a second
//! submission while one is outstanding.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::analyze::DemandBoard;
use crate::ledger::{AllocationLedger, DutyCategory};
use crate::models::{ScalePayload, Site, Technician};
use crate::ports::{PendingWorkChecker, PortError, ScaleSink};
use crate::validation::{validate_allocation, ConflictFinding};

/// Errors aborting a scale submission.
///
/// All variants are recoverable at the calling boundary; only
/// [`Transport`](SubmitError::Transport) is worth a manual retry.
#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    /// Another submission is still outstanding.
    #[error("a submission is already in flight")]
    AlreadyInFlight,
    /// No site was selected for the scale.
    #[error("no site selected for this scale")]
    NoSiteSelected,
    /// A selected site has unresolved prior work; resolve it externally
    /// before scheduling new work there.
    #[error("site '{site_name}' has {pending_count} unresolved work item(s)")]
    BlockedByPendingWork {
        /// Blocking site id.
        site_id: String,
        /// Blocking site name.
        site_name: String,
        /// Unresolved item count reported by the checker.
        pending_count: u32,
    },
    /// The allocation failed conflict validation; fix it and resubmit.
    #[error("allocation rejected with {} finding(s)", .0.len())]
    Validation(Vec<ConflictFinding>),
    /// Network or server failure during an external call.
    #[error(transparent)]
    Transport(#[from] PortError),
}

impl SubmitError {
    /// Whether retrying the identical submission could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmitError::Transport(_))
    }
}

/// Everything a submission reads. The coordinator never mutates any of
/// it — the ledger stays intact even after a successful submit, and the
/// caller decides whether to reset it.
#[derive(Debug, Clone, Copy)]
pub struct SubmitRequest<'a> {
    /// Current technician roster.
    pub roster: &'a [Technician],
    /// The allocation being submitted.
    pub ledger: &'a AllocationLedger,
    /// Sites selected for this scale, in selection order.
    pub selected_sites: &'a [Site],
    /// Demand texts and analyses for the selected sites.
    pub board: &'a DemandBoard,
}

/// Coordinates scale submission against the external ports.
pub struct ScaleCoordinator<C, S> {
    checker: C,
    sink: S,
    in_flight: AtomicBool,
}

impl<C: PendingWorkChecker, S: ScaleSink> ScaleCoordinator<C, S> {
    /// Creates a coordinator over a pending-work checker and a
    /// persistence sink.
    pub fn new(checker: C, sink: S) -> Self {
        Self {
            checker,
            sink,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submits a scale.
    ///
    /// Precondition order: at least one selected site, then sequential
    /// pending-work checks (first positive aborts, remaining sites not
    /// checked), then conflict validation. On success the payload is
    /// built from the ledger and board and handed to the sink once.
    ///
    /// # Errors
    ///
    /// See [`SubmitError`]. No variant is retried automatically.
    pub async fn submit(&self, request: SubmitRequest<'_>) -> Result<(), SubmitError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(SubmitError::AlreadyInFlight);
        }
        let result = self.submit_inner(request).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn submit_inner(&self, request: SubmitRequest<'_>) -> Result<(), SubmitError> {
        if request.selected_sites.is_empty() {
            return Err(SubmitError::NoSiteSelected);
        }

        for site in request.selected_sites {
            debug!(site_id = %site.id, "checking pending work");
            let pending = self.checker.has_pending_work(&site.id).await?;
            if pending.has_pending {
                warn!(
                    site_id = %site.id,
                    pending_count = pending.pending_count,
                    "submission blocked by pending work"
                );
                return Err(SubmitError::BlockedByPendingWork {
                    site_id: site.id.clone(),
                    site_name: site.name.clone(),
                    pending_count: pending.pending_count,
                });
            }
        }

        validate_allocation(request.roster, request.ledger).map_err(SubmitError::Validation)?;

        let payload = build_payload(request.ledger, request.board);
        self.sink.submit_scale(&payload).await?;

        info!(
            base = payload.base_technician_ids.len(),
            visit = payload.visit_technician_ids.len(),
            off = payload.off_technician_ids.len(),
            sites = payload.demands_by_site_id.len(),
            "scale submitted"
        );
        Ok(())
    }
}

/// Builds the persistence payload from the ledger sets (sorted) and the
/// board's demand texts.
pub fn build_payload(ledger: &AllocationLedger, board: &DemandBoard) -> ScalePayload {
    ScalePayload {
        base_technician_ids: ledger.ids_in(DutyCategory::Base),
        visit_technician_ids: ledger.ids_in(DutyCategory::Visit),
        off_technician_ids: ledger.ids_in(DutyCategory::Off),
        demands_by_site_id: board.texts(),
    }
}
