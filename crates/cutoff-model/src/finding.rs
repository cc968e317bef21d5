use serde::{Deserialize, Serialize};

/// One emitted validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the file under review.
    pub source_name: String,
    /// Rule category ("Reglas de estructura" or "Consolidado").
    pub rule_group: String,
    /// Short label of what was checked (e.g. "Nulos", "Year").
    pub indicator: String,
    /// Short status/description (e.g. "OK", "Formato inválido").
    pub outcome: String,
    /// Human-readable explanation, usually listing spreadsheet rows or an
    /// offending value.
    pub detail: Option<String>,
}

impl Finding {
    /// Whether this finding reports a passing outcome.
    pub fn is_passing(&self) -> bool {
        matches!(
            self.outcome.as_str(),
            "OK" | "Estructura OK" | "Archivo conforme"
        )
    }
}

/// The findings of one validation run, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingsReport {
    pub source_name: String,
    pub findings: Vec<Finding>,
    /// Violation events counted across checks 1-8; one per violation
    /// finding, at that finding's granularity.
    pub error_events: usize,
}

impl FindingsReport {
    pub fn is_conforming(&self) -> bool {
        self.error_events == 0
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.findings.iter()
    }
}
