//! Tauri Command Wrappers
//!
//! Frontend bindings to the printing backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{Attribute, Template};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateAttributeArgs<'a> {
    pub name: &'a str,
    #[serde(rename = "functionName")]
    pub function_name: &'a str,
    #[serde(rename = "templateId")]
    pub template_id: Option<i64>,
}

#[derive(Serialize)]
pub struct UpdateAttributeArgs<'a> {
    pub id: i64,
    pub name: &'a str,
    #[serde(rename = "functionName")]
    pub function_name: &'a str,
    #[serde(rename = "templateId")]
    pub template_id: Option<i64>,
}

// ========================
// Template Commands
// ========================

/// Fetch the current template list. Single-shot: each call re-issues the
/// request; failures are returned to the caller unmodified.
pub async fn list_templates() -> Result<Vec<Template>, String> {
    let result = invoke("list_templates", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// ========================
// Attribute Commands
// ========================

pub async fn list_attributes() -> Result<Vec<Attribute>, String> {
    let result = invoke("list_attributes", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_attribute(args: &CreateAttributeArgs<'_>) -> Result<Attribute, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_attribute", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_attribute(args: &UpdateAttributeArgs<'_>) -> Result<Attribute, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("update_attribute", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
