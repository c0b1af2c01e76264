use axum::response::Html;
use tera::Context;
use tower_cookies::Cookies;

use crate::api::extractors::club::ClubContext;
use crate::api::flash::take_flash;
use crate::error::AppError;
use crate::state::AppState;

/// Renders a view with the pending flash notice (consumed here) folded in.
pub fn render_page(
    state: &AppState,
    cookies: &Cookies,
    name: &str,
    mut ctx: Context,
) -> Result<Html<String>, AppError> {
    if let Some(flash) = take_flash(cookies) {
        ctx.insert("flash", &flash);
    }
    let html = state.templates.render(name, &ctx)?;
    Ok(Html(html))
}

pub fn base_context(title: &str) -> Context {
    let mut ctx = Context::new();
    ctx.insert("title", title);
    ctx
}

/// Context for tenant-scoped pages: the session snapshot and the resolved
/// club go to every template (nav header, club name).
pub fn page_context(title: &str, club_ctx: &ClubContext) -> Context {
    let mut ctx = base_context(title);
    ctx.insert("user", &club_ctx.user);
    ctx.insert("user_club", &club_ctx.club);
    ctx
}
