use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;

use crate::models::{MovieDetail, MovieSummary};

const OMDB_BASE: &str = "https://www.omdbapi.com/";

/// Outcome of a title search. The remote service reports "no matches" as a
/// structured response, distinct from transport failure (the `Err` channel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<MovieSummary>),
    NotFound,
}

/// Outcome of an id lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Found(MovieDetail),
    NotFound,
}

#[async_trait]
pub trait MovieLookup: Send + Sync {
    async fn search_by_title(&self, query: &str) -> Result<SearchOutcome>;
    async fn fetch_by_id(&self, id: &str) -> Result<DetailOutcome>;
}

#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    /// Reads `OMDB_API_KEY` (required) and `OMDB_BASE_URL` (optional) from
    /// the environment, loading a `.env` file when one is present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let api_key = env::var("OMDB_API_KEY").context("OMDB_API_KEY not set")?;
        let base_url = env::var("OMDB_BASE_URL").unwrap_or_else(|_| OMDB_BASE.to_string());
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url,
        })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .context("request failed")?;
        let status = res.status();
        let text = res.text().await.context("reading body failed")?;
        if !status.is_success() {
            return Err(anyhow!("{} -> {}", status, text));
        }
        Ok(text)
    }
}

#[async_trait]
impl MovieLookup for OmdbClient {
    async fn search_by_title(&self, query: &str) -> Result<SearchOutcome> {
        let url = format!(
            "{}?apikey={}&s={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(query)
        );
        let body = self.get_text(&url).await?;
        interpret_search(&body)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<DetailOutcome> {
        let url = format!(
            "{}?apikey={}&i={}",
            self.base_url,
            self.api_key,
            urlencoding::encode(id)
        );
        let body = self.get_text(&url).await?;
        interpret_detail(&body)
    }
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<SearchItem>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Type", default)]
    kind: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "imdbRating")]
    rating: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Interprets a search response body. `Response: "False"` with a not-found
/// reason is the structured empty result; any other rejection ("Invalid API
/// key!", "Too many results.") is a failure.
pub fn interpret_search(body: &str) -> Result<SearchOutcome> {
    let data: SearchEnvelope = serde_json::from_str(body).context("JSON parse failed")?;
    if data.response != "True" {
        return match data.error {
            Some(reason) if is_not_found(&reason) => Ok(SearchOutcome::NotFound),
            Some(reason) => Err(anyhow!("lookup rejected: {}", reason)),
            None => Ok(SearchOutcome::NotFound),
        };
    }
    let summaries: Vec<MovieSummary> = data
        .search
        .into_iter()
        .map(|item| MovieSummary {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            kind: item.kind,
            poster_url: normalize_poster(item.poster),
        })
        .collect();
    if summaries.is_empty() {
        return Ok(SearchOutcome::NotFound);
    }
    Ok(SearchOutcome::Found(summaries))
}

/// Interprets a detail response body.
pub fn interpret_detail(body: &str) -> Result<DetailOutcome> {
    let data: DetailEnvelope = serde_json::from_str(body).context("JSON parse failed")?;
    if data.response != "True" {
        return match data.error {
            Some(reason) if is_not_found(&reason) => Ok(DetailOutcome::NotFound),
            Some(reason) => Err(anyhow!("lookup rejected: {}", reason)),
            None => Ok(DetailOutcome::NotFound),
        };
    }
    let id = data
        .imdb_id
        .ok_or_else(|| anyhow!("detail response missing imdbID"))?;
    Ok(DetailOutcome::Found(MovieDetail {
        id,
        plot: na_to_none(data.plot),
        rating: na_to_none(data.rating),
        actors: na_to_none(data.actors),
        genre: na_to_none(data.genre),
        director: na_to_none(data.director),
    }))
}

fn is_not_found(reason: &str) -> bool {
    let lower = reason.to_lowercase();
    lower.contains("not found") || lower.contains("incorrect imdb id")
}

/// The service sends the literal string "N/A" for a missing poster; that
/// must never be used as a URL.
fn normalize_poster(poster: Option<String>) -> Option<String> {
    na_to_none(poster).filter(|p| !p.is_empty())
}

fn na_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "N/A")
}
