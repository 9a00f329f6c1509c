// ============================================================================
// TRANSPORT - one HTTP exchange, nothing else
// ============================================================================

use gloo_net::http::{Method, RequestBuilder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body, already serialized.
    pub body: Option<String>,
    pub bearer: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever status the server answered with.
/// `Err` is reserved for failures where no response arrived at all.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = RequestBuilder::new(&request.url).method(method);
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| format!("Request build error: {}", e))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("⚠️ Could not read body of {} response: {}", status, e);
                String::new()
            }
        };
        Ok(HttpResponse { status, body })
    }
}

/// Scripted transport for unit tests: answers from a queue and records
/// every request it was asked to send.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        replies: Rc<RefCell<VecDeque<Result<HttpResponse, String>>>>,
        sent: Rc<RefCell<Vec<HttpRequest>>>,
        on_send: Rc<RefCell<Option<Box<dyn Fn()>>>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(&self, status: u16, body: &str) -> &Self {
            self.replies.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(&self, detail: &str) -> &Self {
            self.replies.borrow_mut().push_back(Err(detail.to_string()));
            self
        }

        /// Runs `hook` while each request is "in flight".
        pub fn on_send(&self, hook: impl Fn() + 'static) {
            *self.on_send.borrow_mut() = Some(Box::new(hook));
        }

        pub fn sent(&self) -> Vec<HttpRequest> {
            self.sent.borrow().clone()
        }

        pub fn last(&self) -> Option<HttpRequest> {
            self.sent.borrow().last().cloned()
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
            self.sent.borrow_mut().push(request);
            if let Some(hook) = self.on_send.borrow().as_ref() {
                hook();
            }
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err("no scripted reply".to_string()))
        }
    }
}
