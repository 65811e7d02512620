//! Request-scoped wall-clock time fed by the background now ticker.

use chrono::NaiveDateTime;
use salvo::async_trait;
use tokio::sync::watch;

use plumbline_core::error::CoreError;

use crate::error::AppResult;

/// Local wall-clock time captured when the request entered the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTime(pub NaiveDateTime);

pub struct ClockHandler {
    receiver: watch::Receiver<NaiveDateTime>,
}

impl ClockHandler {
    #[must_use]
    pub const fn new(receiver: watch::Receiver<NaiveDateTime>) -> Self {
        Self { receiver }
    }

    /// A clock frozen at `now`.
    #[must_use]
    pub fn fixed(now: NaiveDateTime) -> Self {
        let (_sender, receiver) = watch::channel(now);
        Self::new(receiver)
    }
}

#[async_trait]
impl salvo::Handler for ClockHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        let now = *self.receiver.borrow();
        depot.inject(RequestTime(now));
    }
}

/// ## Summary
/// Retrieves the request time from the depot.
///
/// ## Errors
/// Returns an error if no clock handler ran for this request.
pub fn get_now_from_depot(depot: &salvo::Depot) -> AppResult<NaiveDateTime> {
    depot
        .obtain::<RequestTime>()
        .map(|time| time.0)
        .map_err(|_err| CoreError::InvariantViolation("Request time not found in depot").into())
}
