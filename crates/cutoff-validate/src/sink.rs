use cutoff_model::{Finding, FindingsReport};

/// Collects findings in emission order and counts violation events.
pub(crate) struct FindingSink {
    source_name: String,
    findings: Vec<Finding>,
    error_events: usize,
}

impl FindingSink {
    pub(crate) fn new(source_name: &str) -> Self {
        Self {
            source_name: source_name.to_string(),
            findings: Vec::new(),
            error_events: 0,
        }
    }

    pub(crate) fn push(
        &mut self,
        rule_group: &str,
        indicator: &str,
        outcome: &str,
        detail: Option<String>,
    ) {
        self.findings.push(Finding {
            source_name: self.source_name.clone(),
            rule_group: rule_group.to_string(),
            indicator: indicator.to_string(),
            outcome: outcome.to_string(),
            detail,
        });
    }

    /// Emit a violation finding; counts one violation event.
    pub(crate) fn violation(
        &mut self,
        rule_group: &str,
        indicator: &str,
        outcome: &str,
        detail: Option<String>,
    ) {
        self.error_events += 1;
        self.push(rule_group, indicator, outcome, detail);
    }

    pub(crate) fn error_events(&self) -> usize {
        self.error_events
    }

    pub(crate) fn into_report(self) -> FindingsReport {
        FindingsReport {
            source_name: self.source_name,
            findings: self.findings,
            error_events: self.error_events,
        }
    }
}
