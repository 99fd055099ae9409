// File: crates/pizza-core/src/series.rs
// Summary: MetricSeries model: ordered, uniquely labelled (label, value) pairs.

use std::collections::HashSet;

use crate::error::{ConfigurationError, Result};
use crate::scale::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: Value,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: Value) -> Self {
        Self { label: label.into(), value }
    }
}

/// Insertion order is angular order: item 0 at the top, then clockwise.
/// Labels are unique and values finite. Length is not checked here; the
/// layout engine rejects series shorter than 2.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricSeries {
    metrics: Vec<Metric>,
}

impl MetricSeries {
    pub fn try_new(metrics: Vec<Metric>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(metrics.len());
        for m in &metrics {
            if !m.value.is_finite() {
                return Err(ConfigurationError::NonFiniteValue { label: m.label.clone() });
            }
            if !seen.insert(m.label.as_str()) {
                return Err(ConfigurationError::DuplicateLabel(m.label.clone()));
            }
        }
        Ok(Self { metrics })
    }

    /// Build from parallel arrays, as the dashboards pass them.
    pub fn from_parallel<S: Into<String>>(labels: Vec<S>, values: &[Value]) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(ConfigurationError::LengthMismatch {
                left: "labels",
                left_len: labels.len(),
                right: "values",
                right_len: values.len(),
            });
        }
        let metrics = labels
            .into_iter()
            .zip(values.iter().copied())
            .map(|(l, v)| Metric::new(l, v))
            .collect();
        Self::try_new(metrics)
    }

    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, Value)>) -> Result<Self> {
        Self::try_new(pairs.into_iter().map(|(l, v)| Metric::new(l, v)).collect())
    }

    pub fn len(&self) -> usize { self.metrics.len() }
    pub fn is_empty(&self) -> bool { self.metrics.is_empty() }
    pub fn metrics(&self) -> &[Metric] { &self.metrics }
    pub fn iter(&self) -> std::slice::Iter<'_, Metric> { self.metrics.iter() }
    pub fn labels(&self) -> impl Iterator<Item = &str> { self.metrics.iter().map(|m| m.label.as_str()) }
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ { self.metrics.iter().map(|m| m.value) }

    /// A series with the same labels, in the same order, carrying `values`.
    pub fn with_values(&self, values: &[Value]) -> Result<Self> {
        Self::from_parallel(self.labels().collect(), values)
    }
}

impl<'a> IntoIterator for &'a MetricSeries {
    type Item = &'a Metric;
    type IntoIter = std::slice::Iter<'a, Metric>;
    fn into_iter(self) -> Self::IntoIter { self.metrics.iter() }
}
