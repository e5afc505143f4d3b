use bravia::{HttpRequest, HttpResponse, Result, Transport};

use async_trait::async_trait;
use serde_json::Value;

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

/// What the mock should do for the next request
#[derive(Debug)]
pub enum Scripted {
    Answer(u16, Value),
    Raw(u16, &'static str),
    Refuse,
}

/// [`Transport`] that plays back scripted answers and keeps every request it saw
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new<I: IntoIterator<Item = Scripted>>(script: I) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into_iter().collect())),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Request bodies parsed back to JSON
    pub fn bodies(&self) -> Vec<Value> {
        self.requests()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Answer(status, body)) => Ok(HttpResponse {
                status,
                body: serde_json::to_vec(&body).unwrap(),
            }),
            Some(Scripted::Raw(status, body)) => Ok(HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
            Some(Scripted::Refuse) => {
                Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused").into())
            }
            None => panic!("MockTransport ran out of scripted answers"),
        }
    }
}
