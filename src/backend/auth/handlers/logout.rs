/**
 * Logout Handler
 *
 * POST /api/auth/logout clears the session cookie. It is idempotent and
 * always succeeds; the JWT itself stays valid until natural expiry since
 * there is no revocation list.
 */
use axum::{
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};
use serde::Serialize;

use crate::backend::envelope::ok;

#[derive(Serialize, Debug)]
struct LogoutData {
    message: &'static str,
}

/// Logout handler
pub async fn logout() -> impl IntoResponse {
    // Expire the cookie immediately
    let cookie = "token=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax";

    (
        [(SET_COOKIE, cookie)],
        ok(LogoutData {
            message: "signed out",
        }),
    )
}
