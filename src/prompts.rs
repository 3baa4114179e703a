use crate::data_models::{FlightClass, SearchContentItem, Tier, TravelQuery};

pub const FLIGHT_RESULT_COUNT: u32 = 8;
pub const EXPLORE_RESULT_COUNT: u32 = 5;

pub const EXPLORE_QUERY: &str = "most popular travel destinations 2024 with attractions";

pub const FOLLOW_UP_SUGGESTIONS: [&str; 4] = [
    "Would you like me to search for hotels in your destination?",
    "I can help you find local attractions and reviews.",
    "Want to explore local dining options and food recommendations?",
    "Need information about local transportation and getting around?",
];

const ANSWER_STYLE: &str =
    "give answer in only under 200 words, dont start like okay heree's just get to the point";

/// Section layout the model is asked to follow for one tier.
pub struct TierPromptTemplate {
    pub flight_class: FlightClass,
    class_label: &'static str,
    opening: &'static str,
    sections: &'static str,
}

static BUDGET: TierPromptTemplate = TierPromptTemplate {
    flight_class: FlightClass::Economy,
    class_label: "economy",
    opening: "brief, concise, friendly",
    sections: "\u{2708}\u{fe0f} Best Direct Flights:
\u{2022} [Airline] [Flight #] - $[Price]
  [Departure Time] \u{2192} [Arrival Time]

\u{1f4b0} Best Value Pick:
\u{2022} Quick summary of the most cost-effective option

\u{1f392} What's Included:
\u{2022} Key features (baggage, meals, etc)",
};

static BALANCED: TierPromptTemplate = TierPromptTemplate {
    flight_class: FlightClass::Business,
    class_label: "business class",
    opening: "brief, friendly",
    sections: "\u{2708}\u{fe0f} Premium Options:
\u{2022} [Airline] [Flight #] - $[Price]
  [Departure Time] \u{2192} [Arrival Time]

\u{1f4ba} Comfort Pick:
\u{2022} Quick summary of the best comfort-value option

\u{2728} Perks Included:
\u{2022} Key features (lounge, seats, meals)",
};

static PREMIUM: TierPromptTemplate = TierPromptTemplate {
    flight_class: FlightClass::First,
    class_label: "first class",
    opening: "brief, friendly",
    sections: "\u{2708}\u{fe0f} Luxury Options:
\u{2022} [Airline] [Flight #] - $[Price]
  [Departure Time] \u{2192} [Arrival Time]

\u{1f451} Top Pick:
\u{2022} Quick summary of the most luxurious option

\u{2728} VIP Perks:
\u{2022} Key features (private lounge, chauffeur, etc)",
};

impl TierPromptTemplate {
    pub fn for_tier(tier: Tier) -> &'static TierPromptTemplate {
        match tier {
            Tier::Budget => &BUDGET,
            Tier::Balanced => &BALANCED,
            Tier::Premium => &PREMIUM,
        }
    }

    pub fn render(&self, query: &TravelQuery, search_content: &str) -> String {
        format!(
            "Based on the search results, give a {opening} summary of {class} flights from {from} to {to} on {date}. Reference: {search_content}.\n\n{sections}\n\n{ANSWER_STYLE}",
            opening = self.opening,
            class = self.class_label,
            from = query.origin,
            to = query.destination,
            date = query.departure_date,
            sections = self.sections,
        )
    }
}

pub fn flight_search_query(query: &TravelQuery) -> String {
    format!(
        "direct flights from {} to {} {} prices booking",
        query.origin, query.destination, query.departure_date
    )
}

/// JSON array of the search items, embedded verbatim into prompts.
pub fn serialize_search_content(items: &[SearchContentItem]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

pub fn flight_prompt(query: &TravelQuery, items: &[SearchContentItem]) -> String {
    TierPromptTemplate::for_tier(query.tier).render(query, &serialize_search_content(items))
}

pub fn explore_prompt(items: &[SearchContentItem]) -> String {
    // trailing spaces are part of the template
    format!(
        "Create a list of 10 popular travel destinations for 2024 based on the following information: \n    \
         {}. \n    \
         For each destination, include: \n    \
         1. Location name \n    \
         2. Brief description (2-3 sentences) \n    \
         3. Top 3 attractions \n    \
         4. Best time to visit \n    \
         5. A compelling reason to visit",
        serialize_search_content(items)
    )
}
