//! External services used to rank and group orthologs
//!
//! - [`PopularityService`]: number of publications that mention a gene
//! - [`GeneClassService`]: the gene class a gene belongs to
//!
//! Both are implemented for closures, so tests and callers with their own
//! data can plug in lookups without any network access. [`TextpressoClient`]
//! and [`WormBaseGeneClassClient`] are blocking HTTP implementations.
//!
//! Failures are reported as [`GenedescError::ServiceUnavailable`]. The
//! sentence generators never propagate them but treat the result as absent.
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::ServiceConfig;
use crate::{GenedescError, GenedescResult};

/// Counts the publications that mention a keyword
pub trait PopularityService {
    /// Returns the number of documents that mention `keywords`
    ///
    /// # Errors
    ///
    /// [`GenedescError::ServiceUnavailable`] if the lookup fails
    fn popularity(&self, keywords: &str) -> GenedescResult<u64>;
}

/// Looks up the gene class of a gene
pub trait GeneClassService {
    /// Returns the gene class of the gene or `None` if it has no class
    ///
    /// # Errors
    ///
    /// [`GenedescError::ServiceUnavailable`] if the lookup fails
    fn gene_class(&self, gene_id: &str) -> GenedescResult<Option<String>>;
}

impl<F> PopularityService for F
where
    F: Fn(&str) -> GenedescResult<u64>,
{
    fn popularity(&self, keywords: &str) -> GenedescResult<u64> {
        self(keywords)
    }
}

impl<F> GeneClassService for F
where
    F: Fn(&str) -> GenedescResult<Option<String>>,
{
    fn gene_class(&self, gene_id: &str) -> GenedescResult<Option<String>> {
        self(gene_id)
    }
}

#[derive(Serialize)]
struct DocumentCountRequest<'a> {
    token: &'a str,
    query: DocumentCountQuery<'a>,
}

#[derive(Serialize)]
struct DocumentCountQuery<'a> {
    keywords: &'a str,
    #[serde(rename = "type")]
    query_type: &'a str,
    corpora: [&'a str; 1],
}

/// Popularity of keywords in the *C. elegans* literature, via Textpresso
#[derive(Debug, Clone)]
pub struct TextpressoClient {
    url: String,
    token: String,
    client: Client,
}

impl TextpressoClient {
    /// Constructs a new client for the given document count endpoint
    pub fn new(url: &str, token: &str) -> Self {
        Self {
            url: url.to_string(),
            token: token.to_string(),
            client: Client::new(),
        }
    }

    /// Constructs a new client from the service configuration
    ///
    /// # Errors
    ///
    /// [`GenedescError::InvalidConfig`] if no API token is configured
    pub fn from_config(config: &ServiceConfig) -> GenedescResult<Self> {
        let token = config.textpresso_api_token.as_deref().ok_or_else(|| {
            GenedescError::InvalidConfig("missing textpresso_api_token".to_string())
        })?;
        Ok(Self::new(&config.textpresso_url, token))
    }
}

impl PopularityService for TextpressoClient {
    fn popularity(&self, keywords: &str) -> GenedescResult<u64> {
        trace!("Getting popularity of {}", keywords);
        let request = DocumentCountRequest {
            token: &self.token,
            query: DocumentCountQuery {
                keywords,
                query_type: "document",
                corpora: ["C. elegans"],
            },
        };
        let res = self
            .client
            .post(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .map_err(|err| GenedescError::ServiceUnavailable(format!("Textpresso: {err}")))?;
        if !res.status().is_success() {
            return Err(GenedescError::ServiceUnavailable(format!(
                "Textpresso request failed with status code: {}",
                res.status()
            )));
        }
        let count: serde_json::Value = res
            .json()
            .map_err(|err| GenedescError::ServiceUnavailable(format!("Textpresso: {err}")))?;
        document_count(&count)
    }
}

fn document_count(value: &serde_json::Value) -> GenedescResult<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| GenedescError::ServiceUnavailable(format!("invalid document count: {value}")))
}

#[derive(Deserialize)]
struct GeneClassResponse {
    gene_class: Option<GeneClassField>,
}

#[derive(Deserialize)]
struct GeneClassField {
    data: Option<GeneClassData>,
}

#[derive(Deserialize)]
struct GeneClassData {
    tag: Option<GeneClassTag>,
}

#[derive(Deserialize)]
struct GeneClassTag {
    label: Option<String>,
}

impl GeneClassResponse {
    fn label(self) -> Option<String> {
        self.gene_class?.data?.tag?.label
    }
}

/// Gene classes from the WormBase REST API
#[derive(Debug, Clone)]
pub struct WormBaseGeneClassClient {
    base_url: String,
    client: Client,
}

impl WormBaseGeneClassClient {
    /// Constructs a new client, e.g. for `http://rest.wormbase.org`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Constructs a new client from the service configuration
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(&config.wormbase_rest_url)
    }

    fn url(&self, gene_id: &str) -> String {
        let gene_id = gene_id.strip_prefix("WB:").unwrap_or(gene_id);
        format!("{}/rest/field/gene/{}/gene_class", self.base_url, gene_id)
    }
}

impl GeneClassService for WormBaseGeneClassClient {
    fn gene_class(&self, gene_id: &str) -> GenedescResult<Option<String>> {
        debug!("Getting gene class for gene {}", gene_id);
        let res = self
            .client
            .get(self.url(gene_id))
            .send()
            .map_err(|err| GenedescError::ServiceUnavailable(format!("WormBase: {err}")))?;
        if !res.status().is_success() {
            return Err(GenedescError::ServiceUnavailable(format!(
                "WormBase request failed with status code: {}",
                res.status()
            )));
        }
        let response: GeneClassResponse = res
            .json()
            .map_err(|err| GenedescError::ServiceUnavailable(format!("WormBase: {err}")))?;
        Ok(response.label())
    }
}
