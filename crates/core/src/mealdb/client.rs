//! TheMealDB API client.
//!
//! The public test key (`1`) is part of the base URL; no authentication
//! header is needed. Only the `random.php` endpoint is used.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{MealSource, MealSourceError};
use crate::config::MealDbConfig;
use crate::meal::{Meal, MealDbResponse};
use crate::metrics::{MEAL_FETCHES, MEAL_FETCH_DURATION};

/// Default TheMealDB endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// TheMealDB API client.
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a new client.
    pub fn new(config: &MealDbConfig) -> Result<Self, MealSourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_random(&self) -> Result<Meal, MealSourceError> {
        let url = format!("{}/random.php", self.base_url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MealSourceError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: MealDbResponse = serde_json::from_str(&body).map_err(|e| {
            MealSourceError::ParseError(format!("Failed to parse random meal response: {}", e))
        })?;

        let record = parsed.into_first().ok_or(MealSourceError::EmptyResult)?;

        Meal::try_from(record).map_err(|e| MealSourceError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl MealSource for MealDbClient {
    fn name(&self) -> &str {
        "themealdb"
    }

    async fn random_meal(&self) -> Result<Meal, MealSourceError> {
        let start = Instant::now();
        let result = self.fetch_random().await;
        MEAL_FETCH_DURATION.observe(start.elapsed().as_secs_f64());

        match &result {
            Ok(meal) => {
                debug!(id = %meal.id, title = %meal.title, "Fetched random meal");
                MEAL_FETCHES.with_label_values(&["success"]).inc();
            }
            Err(e) => {
                debug!(error = %e, "Random meal fetch failed");
                MEAL_FETCHES.with_label_values(&[e.kind().as_str()]).inc();
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mealdb::FailureKind;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> MealDbConfig {
        MealDbConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
        }
    }

    fn random_body() -> serde_json::Value {
        json!({
            "meals": [{
                "idMeal": "52874",
                "strMeal": "Beef and Mustard Pie",
                "strCategory": "Beef",
                "strArea": "British",
                "strInstructions": "Preheat the oven.",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/sytuqu1511553755.jpg",
                "strTags": "Meat,Pie",
                "strYoutube": "",
                "strIngredient1": "Beef",
                "strIngredient2": "Plain Flour",
                "strIngredient3": "",
                "strMeasure1": "1kg",
                "strMeasure2": "2 tbs",
                "strMeasure3": ""
            }]
        })
    }

    #[tokio::test]
    async fn test_random_meal_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(random_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = MealDbClient::new(&config(&server.uri())).unwrap();
        let meal = client.random_meal().await.unwrap();

        assert_eq!(meal.id, "52874");
        assert_eq!(meal.category, "Beef");
        assert_eq!(meal.ingredients.len(), 2);
        assert!(meal.video.is_none());
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let client = MealDbClient::new(&config("http://localhost:9999/api/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999/api");
    }

    #[tokio::test]
    async fn test_null_meals_is_empty_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": null })))
            .mount(&server)
            .await;

        let client = MealDbClient::new(&config(&server.uri())).unwrap();
        let err = client.random_meal().await.unwrap_err();

        assert!(matches!(err, MealSourceError::EmptyResult));
        assert_eq!(err.kind(), FailureKind::BadPayload);
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = MealDbClient::new(&config(&server.uri())).unwrap();
        let err = client.random_meal().await.unwrap_err();

        assert!(matches!(err, MealSourceError::ParseError(_)));
        assert_eq!(err.kind(), FailureKind::BadPayload);
    }

    #[tokio::test]
    async fn test_record_missing_required_field_is_parse_error() {
        let server = MockServer::start().await;
        let mut body = random_body();
        body["meals"][0]["strInstructions"] = serde_json::Value::Null;
        Mock::given(method("GET"))
            .and(path("/random.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = MealDbClient::new(&config(&server.uri())).unwrap();
        let err = client.random_meal().await.unwrap_err();

        assert!(matches!(err, MealSourceError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random.php"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = MealDbClient::new(&config(&server.uri())).unwrap();
        let err = client.random_meal().await.unwrap_err();

        match &err {
            MealSourceError::ApiError { status, message } => {
                assert_eq!(*status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.kind(), FailureKind::Unreachable);
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        // Nothing listens on port 1.
        let client = MealDbClient::new(&config("http://127.0.0.1:1")).unwrap();
        let err = client.random_meal().await.unwrap_err();

        assert!(matches!(err, MealSourceError::Unreachable(_)));
        assert_eq!(err.kind(), FailureKind::Unreachable);
    }
}
