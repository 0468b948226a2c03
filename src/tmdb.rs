use serde::Deserialize;
use tracing::debug;

use crate::error::AppResult;

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";

pub fn poster_url(path: &str) -> String {
    format!("{POSTER_BASE}{path}")
}

pub struct TmdbClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, access_token: String, base_url: String) -> Self {
        Self { client, access_token, base_url }
    }

    pub async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieCandidate>> {
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));

        let resp: SearchResponse = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(&[("query", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(query = %query, results = resp.results.len(), "searched TMDB");
        Ok(resp.results)
    }

    pub async fn movie_details(&self, tmdb_id: i32) -> AppResult<MovieDetail> {
        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), tmdb_id);

        let detail: MovieDetail = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(tmdb_id = tmdb_id, title = %detail.title, "fetched TMDB details");
        Ok(detail)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<MovieCandidate>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieCandidate {
    pub id: i32,
    pub title: String,
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetail {
    pub title: String,
    pub release_date: Option<String>,
    pub overview: String,
    pub poster_path: Option<String>,
}

impl MovieDetail {
    // The year is the substring before the first '-' of the release date.
    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref()?)
    }
}

fn release_year(date: &str) -> Option<i32> {
    date.split('-').next().and_then(|year| year.parse().ok())
}
