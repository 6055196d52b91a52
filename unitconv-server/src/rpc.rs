//! JSON-RPC 2.0 request handling
//!
//! Methods:
//! - initialize, ping
//! - categories/list: categories with their units and default selection
//! - convert: stateless engine call
//! - form/*: drive the single form session

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use unitconv_form::ConverterForm;
use unitconv_units::{ConversionError, REGISTRY};

pub const SERVER_NAME: &str = "unitconv";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

const METHODS: [&str; 10] = [
    "initialize",
    "ping",
    "categories/list",
    "convert",
    "form/state",
    "form/select_category",
    "form/select_from",
    "form/select_to",
    "form/set_input",
    "form/submit",
];

#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

impl From<ConversionError> for RpcError {
    fn from(err: ConversionError) -> Self {
        RpcError {
            code: INVALID_PARAMS,
            message: err.to_string(),
            data: Some(json!({
                "code": err.code(),
                "suggestion": err.suggestion(),
            })),
        }
    }
}

impl RpcResponse {
    pub fn parse_error(details: impl std::fmt::Display) -> Self {
        RpcResponse {
            jsonrpc: "2.0".to_string(),
            id: Some(JsonValue::Null),
            result: None,
            error: Some(RpcError::new(PARSE_ERROR, format!("Parse error: {}", details))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConvertParams {
    category: String,
    from: String,
    to: String,
    value: f64,
}

#[derive(Debug, Deserialize)]
struct CategoryParams {
    category: String,
}

#[derive(Debug, Deserialize)]
struct UnitParams {
    unit: String,
}

#[derive(Debug, Deserialize)]
struct InputParams {
    input: String,
}

/// Dispatch one request against the form session
pub fn handle_request(form: &mut ConverterForm, request: &RpcRequest) -> RpcResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(),
        "ping" => Ok(json!({})),

        // Engine
        "categories/list" => handle_categories_list(),
        "convert" => handle_convert(&request.params),

        // Form session
        "form/state" => form_snapshot(form),
        "form/select_category" => parse_params::<CategoryParams>(&request.params)
            .and_then(|p| Ok(form.select_category(&p.category)?))
            .and_then(|_| form_snapshot(form)),
        "form/select_from" => parse_params::<UnitParams>(&request.params)
            .and_then(|p| Ok(form.select_from(&p.unit)?))
            .and_then(|_| form_snapshot(form)),
        "form/select_to" => parse_params::<UnitParams>(&request.params)
            .and_then(|p| Ok(form.select_to(&p.unit)?))
            .and_then(|_| form_snapshot(form)),
        "form/set_input" => parse_params::<InputParams>(&request.params)
            .map(|p| form.set_input(p.input))
            .and_then(|_| form_snapshot(form)),
        "form/submit" => {
            form.submit();
            form_snapshot(form)
        }

        _ => Err(RpcError::new(
            METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        )),
    };

    if let Err(ref e) = result {
        tracing::debug!(method = %request.method, code = e.code, message = %e.message, "request failed");
    }

    match result {
        Ok(r) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
    }
}

fn parse_params<T: DeserializeOwned>(params: &Option<JsonValue>) -> Result<T, RpcError> {
    let params = params
        .as_ref()
        .ok_or_else(|| RpcError::invalid_params("Missing params"))?;
    serde_json::from_value(params.clone())
        .map_err(|e| RpcError::invalid_params(format!("Invalid params: {}", e)))
}

fn handle_initialize() -> Result<JsonValue, RpcError> {
    Ok(json!({
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Length, weight and temperature unit converter"
        },
        "methods": METHODS,
    }))
}

fn handle_categories_list() -> Result<JsonValue, RpcError> {
    let categories: Vec<JsonValue> = REGISTRY
        .categories()
        .map(|category| {
            let (from, to) = category.default_pair();
            json!({
                "name": category.name(),
                "units": category.units(),
                "defaults": { "from": from, "to": to },
            })
        })
        .collect();
    Ok(json!({ "categories": categories }))
}

fn handle_convert(params: &Option<JsonValue>) -> Result<JsonValue, RpcError> {
    let p: ConvertParams = parse_params(params)?;
    let value = REGISTRY.convert(&p.category, &p.from, &p.to, p.value)?;
    Ok(json!({ "value": value }))
}

fn form_snapshot(form: &ConverterForm) -> Result<JsonValue, RpcError> {
    let mut snapshot = serde_json::to_value(form)
        .map_err(|e| RpcError::new(INTERNAL_ERROR, format!("Cannot serialize form: {}", e)))?;
    if let Some(obj) = snapshot.as_object_mut() {
        obj.insert("units".to_string(), json!(form.units()));
        if let Some(display) = form.display() {
            obj.insert("display".to_string(), JsonValue::String(display));
        }
    }
    Ok(snapshot)
}
