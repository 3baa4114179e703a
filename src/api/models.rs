use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data_models::{
    DestinationDigest, FlightClass, FlightSummary, Reference, Tier, TravelQuery,
};

/// Body of `POST /api/search`. Every field is optional on the wire so that
/// missing values reach validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub tier: Option<Value>,
    pub departure_date: Option<String>,
}

impl From<SearchRequest> for TravelQuery {
    fn from(request: SearchRequest) -> Self {
        let tier = Tier::from_optional(request.tier.as_ref().and_then(Value::as_str));
        TravelQuery::new(
            request.from.unwrap_or_default(),
            request.to.unwrap_or_default(),
            tier,
            request.departure_date.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub from: String,
    pub to: String,
    pub flight_details: String,
    pub flight_class: FlightClass,
    pub follow_up_suggestions: Vec<String>,
    pub references: Vec<Reference>,
}

impl From<FlightSummary> for SearchResponse {
    fn from(summary: FlightSummary) -> Self {
        SearchResponse {
            from: summary.origin,
            to: summary.destination,
            flight_details: summary.flight_details,
            flight_class: summary.flight_class,
            follow_up_suggestions: summary.follow_up_suggestions,
            references: summary.references,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExploreResponse {
    pub destinations: String,
    pub references: Vec<Reference>,
}

impl From<DestinationDigest> for ExploreResponse {
    fn from(digest: DestinationDigest) -> Self {
        ExploreResponse {
            destinations: digest.destinations,
            references: digest.references,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
