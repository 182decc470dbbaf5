//! Thin REST client for the backend, used by the frontend tier.
//!
//! Every call issues exactly one HTTP request with the bearer token and
//! the shared API-key header attached, then folds the outcome into a
//! uniform [`ResponseData`] envelope. The client never interprets the
//! error kind; it only carries the backend's message text upward.

use crate::domain::{NewAnswer, NewQuestion};
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

/// Uniform success/content/messages envelope.
#[derive(Clone, Debug)]
pub struct ResponseData {
    successful: bool,
    content: Value,
    messages: Vec<String>,
}

impl ResponseData {
    fn success(content: Value) -> Self {
        Self {
            successful: true,
            content,
            messages: Vec::new(),
        }
    }

    /// `fallback` is the empty shape of the expected content (`[]` for
    /// list calls, `{}` for single-record calls).
    fn failure(fallback: Value, message: String) -> Self {
        Self {
            successful: false,
            content: fallback,
            messages: vec![message],
        }
    }

    pub fn is_successful(&self) -> bool {
        self.successful
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    apikey_header: String,
    apikey_secret: String,
}

impl BackendClient {
    pub fn new(
        base_url: impl Into<String>,
        apikey_header: impl Into<String>,
        apikey_secret: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            apikey_header: apikey_header.into(),
            apikey_secret: apikey_secret.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn dispatch(
        &self,
        req: reqwest::RequestBuilder,
        token: Option<&str>,
        fallback: Value,
    ) -> ResponseData {
        let req = req
            .header(self.apikey_header.as_str(), self.apikey_secret.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", token.unwrap_or("")));
        match req.send().await {
            Ok(resp) if resp.status().is_success() => match resp.json::<Value>().await {
                Ok(content) => ResponseData::success(content),
                Err(e) => ResponseData::failure(fallback, format!("invalid response body: {e}")),
            },
            Ok(resp) => {
                let message = resp.text().await.unwrap_or_default();
                ResponseData::failure(fallback, message)
            }
            Err(e) => ResponseData::failure(fallback, e.to_string()),
        }
    }

    pub async fn list_questions(&self, token: Option<&str>) -> ResponseData {
        self.dispatch(self.http.get(self.url("/questions")), token, Value::Array(vec![]))
            .await
    }

    pub async fn create_question(&self, token: Option<&str>, new: &NewQuestion) -> ResponseData {
        self.dispatch(
            self.http.post(self.url("/questions")).json(new),
            token,
            Value::Object(Default::default()),
        )
        .await
    }

    pub async fn get_question(&self, token: Option<&str>, question_id: i64) -> ResponseData {
        self.dispatch(
            self.http.get(self.url(&format!("/questions/{question_id}"))),
            token,
            Value::Object(Default::default()),
        )
        .await
    }

    pub async fn edit_question(
        &self,
        token: Option<&str>,
        question_id: i64,
        new: &NewQuestion,
    ) -> ResponseData {
        self.dispatch(
            self.http
                .put(self.url(&format!("/questions/{question_id}")))
                .json(new),
            token,
            Value::Object(Default::default()),
        )
        .await
    }

    pub async fn create_answer(
        &self,
        token: Option<&str>,
        question_id: i64,
        new: &NewAnswer,
    ) -> ResponseData {
        self.dispatch(
            self.http
                .post(self.url(&format!("/questions/{question_id}/answers")))
                .json(new),
            token,
            Value::Object(Default::default()),
        )
        .await
    }

    pub async fn list_answers_by_question(
        &self,
        token: Option<&str>,
        question_id: i64,
    ) -> ResponseData {
        self.dispatch(
            self.http
                .get(self.url(&format!("/questions/{question_id}/answers"))),
            token,
            Value::Array(vec![]),
        )
        .await
    }

    pub async fn list_answers_by_user(&self, token: Option<&str>, user: &str) -> ResponseData {
        self.dispatch(
            self.http.get(self.url(&format!("/users/{user}/answers"))),
            token,
            Value::Array(vec![]),
        )
        .await
    }

    pub async fn get_answer(
        &self,
        token: Option<&str>,
        user: &str,
        question_id: i64,
    ) -> ResponseData {
        self.dispatch(
            self.http
                .get(self.url(&format!("/users/{user}/answers/{question_id}"))),
            token,
            Value::Object(Default::default()),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let c = BackendClient::new("http://localhost:3000/", "X-ApiKey-Backend", "secret");
        assert_eq!(c.url("/questions"), "http://localhost:3000/questions");
        let c = BackendClient::new("http://localhost:3000", "X-ApiKey-Backend", "secret");
        assert_eq!(c.url("/questions/7/answers"), "http://localhost:3000/questions/7/answers");
    }

    #[test]
    fn failure_keeps_the_empty_shape_and_message() {
        let r = ResponseData::failure(Value::Array(vec![]), "the question does not exist".into());
        assert!(!r.is_successful());
        assert_eq!(r.content(), &Value::Array(vec![]));
        assert_eq!(r.messages(), ["the question does not exist"]);
    }

    #[test]
    fn success_carries_content_and_no_messages() {
        let r = ResponseData::success(serde_json::json!({"questionId": 1}));
        assert!(r.is_successful());
        assert_eq!(r.content()["questionId"], 1);
        assert!(r.messages().is_empty());
    }
}
