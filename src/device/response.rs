use crate::error::{Error, Result};

use serde::de::DeserializeOwned;
use serde_json::Value;

use std::ops::Deref;

/// The `result` array of a successful call
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    method: String,
    result: Vec<Value>,
}

impl Response {
    pub(crate) fn new<S: Into<String>>(method: S, result: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            result,
        }
    }

    /// Method this is the result of
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Element 0 of the result, which is what most methods return
    pub fn first(&self) -> Result<&Value> {
        self.result
            .first()
            .ok_or_else(|| Error::shape(&self.method, "result is empty"))
    }

    /// Element 0 of element 0, for methods that nest their result one level deeper
    pub fn nested(&self) -> Result<&[Value]> {
        self.first()?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| Error::shape(&self.method, "result[0] is not an array"))
    }

    /// Read element 0 as a typed view
    pub fn view<T: DeserializeOwned>(&self, name: &'static str) -> Result<T> {
        serde_json::from_value(self.first()?.clone()).map_err(|e| Error::view(name, e))
    }

    /// Read every element of `items` as a typed view
    pub(crate) fn views<T: DeserializeOwned>(items: &[Value], name: &'static str) -> Result<Vec<T>> {
        items
            .iter()
            .map(|v| serde_json::from_value(v.clone()).map_err(|e| Error::view(name, e)))
            .collect()
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.result
    }
}

impl Deref for Response {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.result
    }
}

impl PartialEq<Vec<Value>> for Response {
    fn eq(&self, other: &Vec<Value>) -> bool {
        &self.result == other
    }
}

/// What became of a command that only goes out when it would change something
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The TV acknowledged the command
    Applied(Response),
    /// The TV was already in the requested state; nothing was sent
    Unchanged,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Outcome::Unchanged)
    }
}
