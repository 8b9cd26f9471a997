//! Server-rendered pages
//!
//! The dashboard sits behind the page guard middleware (admin-only). The
//! tables page runs the client guard itself and renders whatever view it
//! resolves to.

use axum::Extension;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use auth::domain::SessionAuthority;
use auth::guard::{ClientGuard, PageView};
use auth::middleware::PageSession;
use auth::models::{AccessPolicy, RouteUser, SessionToken};
use booking::{Booking, BookingSource, TimeSlot};

use crate::app::WebState;

/// GET /{username}/dashboard
pub async fn dashboard<A, S>(
    State(state): State<WebState<A, S>>,
    Extension(page): Extension<PageSession>,
) -> Html<String>
where
    A: SessionAuthority + Send + Sync + 'static,
    S: BookingSource + Send + Sync + 'static,
{
    let body = match state.bookings.all_bookings().await {
        Ok(bookings) => bookings_table(&bookings),
        Err(e) => {
            tracing::warn!(error = %e, route = %page.route, "Dashboard bookings unavailable");
            "<p class=\"error\">Bookings are unavailable right now.</p>".to_string()
        }
    };

    Html(layout(
        &format!("Dashboard: {}", page.route),
        &format!(
            "<p>Signed in as {} ({})</p>\n{body}",
            escape_html(&page.session.username),
            escape_html(page.session.role.code()),
        ),
    ))
}

/// GET /{username}/tables
pub async fn tables<A, S>(
    State(state): State<WebState<A, S>>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> Response
where
    A: SessionAuthority + Send + Sync + 'static,
    S: BookingSource + Send + Sync + 'static,
{
    let Ok(route) = RouteUser::parse(&username) else {
        return not_found().await.into_response();
    };
    let token = SessionToken::from_headers(&headers, &state.auth_config.session_cookie_name);

    let mut guard = ClientGuard::mount(
        state.authority.clone(),
        token,
        route,
        AccessPolicy::AdminOrSelf,
    );

    match guard.resolved_view().await {
        PageView::Protected(session) => {
            let body = match state.bookings.all_time_slots().await {
                Ok(slots) => slots_table(&slots),
                Err(e) => {
                    tracing::warn!(error = %e, route = %guard.route(), "Time slots unavailable");
                    "<p class=\"error\">Time slots are unavailable right now.</p>".to_string()
                }
            };
            Html(layout(
                &format!("Tables: {}", guard.route()),
                &format!(
                    "<p>Signed in as {}</p>\n{body}",
                    escape_html(&session.username)
                ),
            ))
            .into_response()
        }
        // resolved_view never yields Loading
        PageView::Loading | PageView::NotFound => not_found().await.into_response(),
    }
}

/// GET /404 and every unmatched route
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(layout("Not found", "<p>This page could not be found.</p>")),
    )
}

fn layout(title: &str, body: &str) -> String {
    let title = escape_html(title);
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n"
    )
}

fn bookings_table(bookings: &[Booking]) -> String {
    if bookings.is_empty() {
        return "<p>No bookings.</p>".to_string();
    }

    let rows: String = bookings
        .iter()
        .map(|b| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                b.date,
                escape_html(b.time.as_deref().unwrap_or("")),
                escape_html(b.name.as_deref().unwrap_or("")),
                b.people_count.map(|n| n.to_string()).unwrap_or_default(),
            )
        })
        .collect();

    format!(
        "<table>\n<tr><th>Date</th><th>Time</th><th>Name</th><th>People</th></tr>\n{rows}</table>"
    )
}

fn slots_table(slots: &[TimeSlot]) -> String {
    if slots.is_empty() {
        return "<p>No time slots.</p>".to_string();
    }

    let rows: String = slots
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape_html(&s.label()),
                s.capacity.map(|n| n.to_string()).unwrap_or_default(),
            )
        })
        .collect();

    format!("<table>\n<tr><th>Slot</th><th>Capacity</th></tr>\n{rows}</table>")
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
