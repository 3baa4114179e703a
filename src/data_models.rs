use serde::{Deserialize, Serialize};

/// Travel preference selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Budget,
    Balanced,
    Premium,
}

impl Tier {
    /// Unknown or missing values fall back to `Balanced` without complaint.
    pub fn from_optional(value: Option<&str>) -> Tier {
        match value {
            Some("budget") => Tier::Budget,
            Some("premium") => Tier::Premium,
            _ => Tier::Balanced,
        }
    }

    pub fn flight_class(self) -> FlightClass {
        match self {
            Tier::Budget => FlightClass::Economy,
            Tier::Balanced => FlightClass::Business,
            Tier::Premium => FlightClass::First,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Budget => "budget",
            Tier::Balanced => "balanced",
            Tier::Premium => "premium",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlightClass {
    Economy,
    Business,
    First,
}

/// A validated trip query. Build it with [`TravelQuery::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelQuery {
    pub origin: String,
    pub destination: String,
    pub tier: Tier,
    pub departure_date: String,
}

impl TravelQuery {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        tier: Tier,
        departure_date: impl Into<String>,
    ) -> TravelQuery {
        TravelQuery {
            origin: origin.into(),
            destination: destination.into(),
            tier,
            departure_date: departure_date.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.origin.trim().is_empty()
            && !self.destination.trim().is_empty()
            && !self.departure_date.trim().is_empty()
    }
}

/// One search hit, reduced to what the prompt and the references need.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchContentItem {
    pub title: String,
    pub url: String,
    pub content: String,
}

impl SearchContentItem {
    pub fn reference(&self) -> Reference {
        Reference {
            title: self.title.clone(),
            url: self.url.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub title: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    #[serde(rename = "keyword")]
    Keyword,
}

/// Options forwarded to the search service alongside the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub search_type: SearchType,
    pub use_autoprompt: bool,
    pub num_results: u32,
    pub text: bool,
}

impl SearchOptions {
    pub fn keyword_with_text(num_results: u32) -> SearchOptions {
        SearchOptions {
            search_type: SearchType::Keyword,
            use_autoprompt: true,
            num_results,
            text: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSummary {
    pub origin: String,
    pub destination: String,
    pub flight_details: String,
    pub flight_class: FlightClass,
    pub follow_up_suggestions: Vec<String>,
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationDigest {
    pub destinations: String,
    pub references: Vec<Reference>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parsing() {
        assert_eq!(Tier::from_optional(Some("budget")), Tier::Budget);
        assert_eq!(Tier::from_optional(Some("balanced")), Tier::Balanced);
        assert_eq!(Tier::from_optional(Some("premium")), Tier::Premium);
    }

    #[test]
    fn test_unknown_tier_defaults_to_balanced() {
        assert_eq!(Tier::from_optional(None), Tier::Balanced);
        assert_eq!(Tier::from_optional(Some("")), Tier::Balanced);
        assert_eq!(Tier::from_optional(Some("luxury")), Tier::Balanced);
        assert_eq!(Tier::from_optional(Some("Premium")), Tier::Balanced);
    }

    #[test]
    fn test_flight_class_mapping() {
        assert_eq!(Tier::Budget.flight_class(), FlightClass::Economy);
        assert_eq!(Tier::Balanced.flight_class(), FlightClass::Business);
        assert_eq!(Tier::Premium.flight_class(), FlightClass::First);
        assert_eq!(
            serde_json::to_string(&FlightClass::First).unwrap(),
            "\"first\""
        );
    }

    #[test]
    fn test_query_completeness() {
        let query = TravelQuery::new("NYC", "LON", Tier::Premium, "2024-12-01");
        assert!(query.is_complete());

        let query = TravelQuery::new("NYC", "  ", Tier::Premium, "2024-12-01");
        assert!(!query.is_complete());

        let query = TravelQuery::new("NYC", "LON", Tier::Premium, "");
        assert!(!query.is_complete());
    }

    #[test]
    fn test_search_type_wire_name() {
        let json = serde_json::to_string(&SearchType::Keyword).unwrap();
        assert_eq!(json, "\"keyword\"");
    }
}
