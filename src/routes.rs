use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    Router,
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::{
    AppState,
    catalog::NewMovie,
    error::{AppError, AppResult},
    forms::{AddForm, AddFormErrors, UpdateForm, UpdateFormErrors},
    models, templates, tmdb,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form).post(add_submit))
        .route("/find", get(find))
        .route("/edit", get(edit_form).post(edit_submit))
        .route("/delete", get(delete))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    id: Option<String>,
}

impl IdQuery {
    // A missing or non-numeric id behaves like an unknown record.
    fn id(&self) -> AppResult<i32> {
        self.id.as_deref().and_then(|raw| raw.trim().parse().ok()).ok_or(AppError::NotFound)
    }
}

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.catalog.list_by_rating().await?;
    let ranked = models::rank_by_rating(movies);
    Ok(Html(templates::index_page(&ranked)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page(&AddForm::default(), &AddFormErrors::default()))
}

pub async fn add_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> AppResult<Html<String>> {
    let title = match form.validate() {
        Ok(title) => title,
        Err(errors) => return Ok(Html(templates::add_page(&form, &errors))),
    };

    let candidates = state.tmdb.search_movies(&title).await?;
    Ok(Html(templates::select_page(&title, &candidates)))
}

pub async fn find(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> AppResult<Redirect> {
    let tmdb_id = query.id()?;
    let detail = state.tmdb.movie_details(tmdb_id).await?;

    let year = detail
        .release_year()
        .ok_or_else(|| AppError::Remote(anyhow!("movie {tmdb_id} has no usable release date")))?;

    let movie = state
        .catalog
        .insert(NewMovie {
            title: detail.title,
            year,
            description: detail.overview,
            img_url: detail.poster_path.as_deref().map(tmdb::poster_url),
        })
        .await?;

    tracing::info!(id = movie.id, title = %movie.title, "added movie");
    Ok(Redirect::to(&format!("/edit?id={}", movie.id)))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> AppResult<Html<String>> {
    let movie = state.catalog.get(query.id()?).await?;
    // The rating/review fields always start blank; only the movie data
    // is shown on the page.
    Ok(Html(templates::edit_page(&movie, &UpdateForm::default(), &UpdateFormErrors::default())))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
    Form(form): Form<UpdateForm>,
) -> AppResult<Response> {
    let movie = state.catalog.get(query.id()?).await?;

    let update = match form.validate() {
        Ok(update) => update,
        Err(errors) => {
            return Ok(Html(templates::edit_page(&movie, &form, &errors)).into_response());
        },
    };

    state.catalog.update_review(movie.id, update.rating, update.review).await?;
    tracing::info!(id = movie.id, "updated review");
    Ok(Redirect::to("/").into_response())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> AppResult<Redirect> {
    let id = query.id()?;
    state.catalog.delete(id).await?;
    tracing::info!(id = id, "deleted movie");
    Ok(Redirect::to("/"))
}
