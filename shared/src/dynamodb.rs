use anyhow::{Context, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose, Engine as _};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

use crate::config::Config;

/// One table item as a plain JSON object.
pub type Record = Map<String, Value>;

/// Read side of the backing table.
#[allow(async_fn_in_trait)]
pub trait Store {
    /// Returns whatever a single unfiltered read yields.
    async fn scan_all(&self) -> Result<Vec<Record>>;
}

#[derive(Debug, Clone)]
pub struct DynamoDbTable {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbTable {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub async fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        let aws_config = aws_config::load_from_env().await;
        let client = aws_sdk_dynamodb::Client::new(&aws_config);

        Ok(Self::new(client, config.table_name))
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl Store for DynamoDbTable {
    async fn scan_all(&self) -> Result<Vec<Record>> {
        scan(&self.client, &self.table_name).await
    }
}

/// Scans the whole table in one request. Only the first page is returned,
/// `LastEvaluatedKey` is not followed.
pub async fn scan(dynamodb: &aws_sdk_dynamodb::Client, table_name: &str) -> Result<Vec<Record>> {
    let response = dynamodb
        .scan()
        .table_name(table_name)
        .send()
        .await
        .with_context(|| format!("failed to scan table {}", table_name))?;

    let records = response
        .items
        .unwrap_or_default()
        .into_iter()
        .map(item_to_record)
        .collect();

    Ok(records)
}

pub fn item_to_record(item: HashMap<String, AttributeValue>) -> Record {
    item.into_iter()
        .map(|(key, value)| (key, attribute_to_json(value)))
        .collect()
}

pub fn attribute_to_json(value: AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Value::Bool(b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(list) => Value::Array(list.into_iter().map(attribute_to_json).collect()),
        AttributeValue::M(map) => Value::Object(item_to_record(map)),
        AttributeValue::Ss(set) => Value::Array(set.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(set.into_iter().map(number_to_json).collect()),
        AttributeValue::B(blob) => Value::String(general_purpose::STANDARD.encode(blob.as_ref())),
        AttributeValue::Bs(set) => Value::Array(
            set.into_iter()
                .map(|blob| Value::String(general_purpose::STANDARD.encode(blob.as_ref())))
                .collect(),
        ),
        _ => Value::Null,
    }
}

// serde_json is built with arbitrary_precision, so the decimal text of all 38
// digits is carried into the body unchanged.
fn number_to_json(n: String) -> Value {
    match serde_json::from_str::<Number>(n.trim()) {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(n),
    }
}
