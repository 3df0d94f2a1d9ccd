//! Frontend Models
//!
//! Data structures matching the printing backend's records.

use serde::{Deserialize, Serialize};

/// A print-layout template that attributes are scoped to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub name: String,
}

/// A named, function-backed attribute attached to a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: i64,
    pub name: String,
    pub function_name: String,
    pub template: Template,
}

/// Payload handed back to the dialog opener on submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSubmit {
    pub function_name: String,
    pub name: String,
    pub template_id: Option<i64>,
}
