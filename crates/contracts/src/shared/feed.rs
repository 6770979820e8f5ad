//! Разбор ответа GViz (Google Sheets)
//!
//! Лист отдаёт JSON, обёрнутый в вызов JS-функции:
//! `/*O_o*/ google.visualization.Query.setResponse({...});`.
//! Берём подстроку от первой `{` до последней `}` включительно.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed response contains no JSON document")]
    MissingDocument,
    #[error("feed document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("feed reported an error: {0}")]
    Status(String),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeedDocument {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub errors: Vec<FeedIssue>,
    #[serde(default)]
    pub table: FeedTable,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeedIssue {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FeedTable {
    #[serde(default)]
    pub rows: Vec<FeedRow>,
}

/// Строка листа; отсутствующие ячейки приходят как `null`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FeedRow {
    #[serde(default)]
    pub c: Vec<Option<FeedCell>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FeedCell {
    #[serde(default)]
    pub v: Option<Value>,
    /// Отформатированное значение (даты, валюта)
    #[serde(default)]
    pub f: Option<String>,
}

impl FeedRow {
    pub fn cell(&self, index: usize) -> Option<&FeedCell> {
        self.c.get(index).and_then(Option::as_ref)
    }

    /// Текст ячейки; пустые и отсутствующие ячейки дают `None`
    pub fn text(&self, index: usize) -> Option<String> {
        self.cell(index).and_then(FeedCell::text)
    }

    pub fn number(&self, index: usize) -> Option<f64> {
        self.cell(index).and_then(FeedCell::number)
    }
}

impl FeedCell {
    pub fn text(&self) -> Option<String> {
        let raw = match self.v.as_ref()? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(true) => "true".to_string(),
            _ => return None,
        };
        if raw.is_empty() {
            None
        } else {
            Some(raw)
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self.v.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().trim_start_matches('$').parse().ok(),
            _ => None,
        }
    }
}

/// Strip the wrapper around the GViz payload and parse it.
pub fn parse_feed(text: &str) -> Result<FeedDocument, FeedError> {
    let start = text.find('{').ok_or(FeedError::MissingDocument)?;
    let end = text.rfind('}').ok_or(FeedError::MissingDocument)?;
    if end < start {
        return Err(FeedError::MissingDocument);
    }

    let document: FeedDocument = serde_json::from_str(&text[start..=end])?;

    if document.status.as_deref() == Some("error") {
        let reason = document
            .errors
            .iter()
            .filter_map(|e| e.message.clone().or_else(|| e.reason.clone()))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FeedError::Status(reason));
    }

    Ok(document)
}
