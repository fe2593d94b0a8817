//! Serverless function handle
//!
//! Flyer generation, email sending and schedule evaluation run remotely.
//! This handle only starts executions.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::{PlatformClient, PlatformError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFunction {
    GenerateFlyer,
    SendEmail,
    ScheduleEvents,
}

/// Execution record returned by the platform
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Execution {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "functionId")]
    pub function_id: String,
    pub status: String,
}

#[derive(Clone)]
pub struct Functions {
    client: PlatformClient,
}

impl Functions {
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }

    pub fn function_id(&self, function: PlatformFunction) -> &str {
        let ids = &self.client.config().functions;
        match function {
            PlatformFunction::GenerateFlyer => &ids.generate_flyer,
            PlatformFunction::SendEmail => &ids.send_email,
            PlatformFunction::ScheduleEvents => &ids.schedule_events,
        }
    }

    pub fn executions_path(&self, function: PlatformFunction) -> String {
        format!("/functions/{}/executions", self.function_id(function))
    }

    /// Start a function with a JSON payload
    pub async fn create_execution<B: Serialize>(
        &self,
        function: PlatformFunction,
        body: &B,
        asynchronous: bool,
    ) -> Result<Execution, PlatformError> {
        let payload =
            serde_json::to_string(body).map_err(|e| PlatformError::Decode(e.to_string()))?;
        let request = self
            .client
            .request(Method::POST, &self.executions_path(function), None)
            .json(&json!({ "body": payload, "async": asynchronous }));
        self.client.send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PlatformConfig;

    #[test]
    fn test_executions_path() {
        let config = PlatformConfig::from_lookup(|key| match key {
            "FUNCTION_SEND_EMAIL" => Some("fn-email".to_string()),
            _ => None,
        });
        let functions = Functions::new(PlatformClient::new(config));

        assert_eq!(
            functions.executions_path(PlatformFunction::SendEmail),
            "/functions/fn-email/executions"
        );
        assert_eq!(functions.function_id(PlatformFunction::GenerateFlyer), "");
    }

    #[test]
    fn test_execution_deserializes() {
        let execution: Execution = serde_json::from_str(
            r#"{"$id":"e1","functionId":"fn-email","status":"waiting","responseBody":""}"#,
        )
        .unwrap();
        assert_eq!(execution.status, "waiting");
    }
}
