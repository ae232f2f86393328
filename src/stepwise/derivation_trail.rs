//! # Derivation Trail Module
//!
//! Append-only recorder for narrated derivation steps. Every derivation
//! request (derivative, integral, limit, equation) creates one fresh
//! [`DerivationTrail`], appends steps while it works and seals it with a
//! single terminal result. The display layer consumes the trail as plain
//! data; nothing is ever edited or removed once written.

use log::warn;
use std::fmt;

/// One narrated step of a derivation, e.g. label "Step 2" with a multi-line
/// body describing the applicable rules.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivationStep {
    pub label: String,
    pub body: String,
}

impl fmt::Display for DerivationStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.body)
    }
}

/// Ordered, append-only sequence of steps plus one terminal result.
///
/// Writes after [`finish`](DerivationTrail::finish) are ignored with a
/// warning, which gives the write-once guarantee without making misuse a
/// panic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivationTrail {
    steps: Vec<DerivationStep>,
    result: Option<String>,
}

impl DerivationTrail {
    pub fn new() -> Self {
        DerivationTrail {
            steps: Vec::new(),
            result: None,
        }
    }

    /// Appends one narrated step. No-op on a finished trail.
    pub fn append(&mut self, label: impl Into<String>, body: impl Into<String>) {
        if self.result.is_some() {
            warn!("append on a finished derivation trail ignored");
            return;
        }
        self.steps.push(DerivationStep {
            label: label.into(),
            body: body.into(),
        });
    }

    /// Seals the trail with its terminal result. Only the first call wins.
    pub fn finish(&mut self, result: impl Into<String>) {
        if self.result.is_some() {
            warn!("finish on a finished derivation trail ignored");
            return;
        }
        self.result = Some(result.into());
    }

    pub fn steps(&self) -> &[DerivationStep] {
        &self.steps
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }
}

impl fmt::Display for DerivationTrail {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        if let Some(result) = &self.result {
            writeln!(f, "Result: {}", result)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_accumulate_in_order() {
        let mut trail = DerivationTrail::new();
        trail.append("Step 1", "start");
        trail.append("Step 2", "continue");
        trail.finish("done");
        let labels: Vec<&str> = trail.steps().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Step 1", "Step 2"]);
        assert_eq!(trail.result(), Some("done"));
    }

    #[test]
    fn test_append_after_finish_is_ignored() {
        let mut trail = DerivationTrail::new();
        trail.append("Step 1", "start");
        trail.finish("done");
        trail.append("Step 2", "late write");
        assert_eq!(trail.steps().len(), 1);
    }

    #[test]
    fn test_second_finish_is_ignored() {
        let mut trail = DerivationTrail::new();
        trail.finish("first");
        trail.finish("second");
        assert_eq!(trail.result(), Some("first"));
    }

    #[test]
    fn test_display_renders_steps_and_result() {
        let mut trail = DerivationTrail::new();
        trail.append("Step 1", "start");
        trail.finish("42");
        let text = trail.to_string();
        assert!(text.contains("Step 1: start"));
        assert!(text.contains("Result: 42"));
    }
}
