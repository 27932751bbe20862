use serde::Deserialize;
use thiserror::Error;

const HOW_IT_WORKS_JSON: &str = include_str!("../content/how_it_works.json");
const DISCOVER_JSON: &str = include_str!("../content/discover.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid {file} content: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Venue {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub distance: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CouponCard {
    pub image: String,
    pub name: String,
    pub redemptions: u32,
    pub open: bool,
    pub hours: String,
    pub address: String,
    pub category: String,
    pub walking_time: String,
    pub blurb: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DiscoverContent {
    pub venues: Vec<Venue>,
    pub coupon: Option<CouponCard>,
}

fn parse_steps(raw: &str) -> Result<Vec<Step>, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse {
        file: "how_it_works.json",
        source,
    })
}

fn parse_discover(raw: &str) -> Result<DiscoverContent, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse {
        file: "discover.json",
        source,
    })
}

/// Steps of the "How It Works" guide, in display order. Falls back to an
/// empty guide if the embedded copy does not parse.
pub fn how_it_works_steps() -> Vec<Step> {
    parse_steps(HOW_IT_WORKS_JSON).unwrap_or_else(|e| {
        log::error!("{}", e);
        Vec::new()
    })
}

pub fn discover_content() -> DiscoverContent {
    parse_discover(DISCOVER_JSON).unwrap_or_else(|e| {
        log::error!("{}", e);
        DiscoverContent {
            venues: Vec::new(),
            coupon: None,
        }
    })
}
