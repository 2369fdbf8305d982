//! Axum wiring for the gate
//!
//! ```ignore
//! let api = Router::new().route("/me", get(me));
//! let api = gatekeeper_auth::apply(api, gate.clone(), Enforcement::UseDefault);
//! app = app.nest("/v1", api);
//! ```

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use crate::gate::{AuthenticationGate, Effect};
use crate::types::Enforcement;

#[derive(Clone)]
struct GateState {
    gate: AuthenticationGate,
    enforcement: Enforcement,
}

/// Put every route of `router` behind `gate`.
///
/// `enforcement` is fixed for this mount point, so one gate can guard some
/// routes strictly and let others through unauthenticated.
pub fn apply<S>(router: Router<S>, gate: AuthenticationGate, enforcement: Enforcement) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(
        GateState { gate, enforcement },
        require_authenticated,
    ))
}

impl AuthenticationGate {
    /// Same as [`apply`]
    pub fn protect<S>(&self, router: Router<S>, enforcement: Enforcement) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        apply(router, self.clone(), enforcement)
    }
}

async fn require_authenticated(
    State(state): State<GateState>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    match state.gate.evaluate(&mut parts, state.enforcement) {
        Effect::Continue => next.run(Request::from_parts(parts, body)).await,
        Effect::Abort(rejection) => rejection.into_response(),
    }
}
