//! Structured logging helpers for webook-web
//!
//! Keeps field names consistent across navigation and form events.

use crate::domain::models::AuthAction;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Navigation,
    FormValidation,
    FormSubmit,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Navigation => "navigation",
            LogOperation::FormValidation => "form_validation",
            LogOperation::FormSubmit => "form_submit",
        }
    }
}

/// Log the view chosen for a path
pub fn log_route_resolved(path: &str, view: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        view = view,
        "Route resolved"
    );
}

/// Log a path no route claims (renders blank)
pub fn log_route_unmatched(path: &str) {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        "No route for path, rendering nothing"
    );
}

pub fn log_validation_failed(action: AuthAction, reason: &str) {
    tracing::debug!(
        operation = LogOperation::FormValidation.as_str(),
        form = action.as_str(),
        reason = reason,
        "Form rejected before submit"
    );
}

pub fn log_submit_start(action: AuthAction, url: &str) {
    tracing::info!(
        operation = LogOperation::FormSubmit.as_str(),
        form = action.as_str(),
        url = url,
        "Submitting form"
    );
}

pub fn log_submit_result(action: AuthAction, accepted: bool, message: &str) {
    tracing::info!(
        operation = LogOperation::FormSubmit.as_str(),
        form = action.as_str(),
        accepted = accepted,
        message = message,
        "Form submission answered"
    );
}

pub fn log_submit_error(action: AuthAction, error: &str) {
    tracing::error!(
        operation = LogOperation::FormSubmit.as_str(),
        form = action.as_str(),
        error = error,
        "Form submission failed"
    );
}
