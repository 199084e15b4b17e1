/// Network adapters for external API calls
mod open_food_facts_client;

pub use open_food_facts_client::{
    default_user_agent, OpenFoodFactsClient, DEFAULT_BASE_URL, LOOKUP_FIELDS,
};
