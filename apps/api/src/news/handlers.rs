use axum::{extract::State, Json};

use crate::news::Story;
use crate::state::AppState;

/// GET /api/v1/news
///
/// Top tech headlines. Always 200; an unavailable source yields `[]`.
pub async fn handle_top_stories(State(state): State<AppState>) -> Json<Vec<Story>> {
    Json(state.news.top_stories(state.config.news_limit).await)
}
