//! Request descriptors.

use reqwest::Method;
use serde_json::Value;

use super::envelope::PostParams;

/// Transport configuration for a single request.
///
/// Built with the chaining helpers below; every field is public so callers can
/// also construct or adjust one directly.
///
/// # Example
///
/// ```
/// use app_utils::RequestDescriptor;
///
/// let descriptor = RequestDescriptor::get("https://api.example.com/users")
///     .header("authorization", "Bearer token")
///     .query("page", "2");
/// assert_eq!(descriptor.query, vec![("page".to_string(), "2".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,
    /// Absolute request URL
    pub url: String,
    /// Request headers, sent in order
    pub headers: Vec<(String, String)>,
    /// Query string parameters, appended in order
    pub query: Vec<(String, String)>,
    /// JSON request body
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// Creates a descriptor with no headers, query or body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Shorthand for a `GET` descriptor.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Shorthand for a `POST` descriptor.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Shorthand for a `PUT` descriptor.
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    /// Shorthand for a `DELETE` descriptor.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Appends a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the effective descriptor for a call carrying POST fields.
    ///
    /// The fields become the whole body, replacing any body already set.
    /// Everything else is left untouched.
    pub fn with_post_body(self, post_body: PostParams) -> Self {
        self.json(Value::Object(post_body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_helpers() {
        let descriptor = RequestDescriptor::put("https://example.com/items/1")
            .header("x-request-id", "abc")
            .query("dry_run", "true")
            .json(json!({"name": "widget"}));

        assert_eq!(descriptor.method, Method::PUT);
        assert_eq!(descriptor.url, "https://example.com/items/1");
        assert_eq!(
            descriptor.headers,
            vec![("x-request-id".to_string(), "abc".to_string())]
        );
        assert_eq!(descriptor.body, Some(json!({"name": "widget"})));
    }

    #[test]
    fn test_post_body_replaces_existing_body() {
        let mut fields = PostParams::new();
        fields.insert("name".to_string(), json!("John Doe"));

        let descriptor = RequestDescriptor::post("https://example.com/users")
            .header("authorization", "Bearer t")
            .json(json!({"stale": true}))
            .with_post_body(fields);

        assert_eq!(descriptor.body, Some(json!({"name": "John Doe"})));
        assert_eq!(descriptor.method, Method::POST);
        assert_eq!(descriptor.headers.len(), 1);
    }

    #[test]
    fn test_post_body_works_for_any_method() {
        let descriptor = RequestDescriptor::get("https://example.com/search")
            .with_post_body(PostParams::new());
        assert_eq!(descriptor.method, Method::GET);
        assert_eq!(descriptor.body, Some(json!({})));
    }
}
