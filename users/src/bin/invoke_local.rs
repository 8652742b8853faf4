//! Runs the handler once against the real table with an empty event and
//! prints the response.

use anyhow::Result;
use serde_json::json;
use shared::dynamodb::DynamoDbTable;
use users::handle;

#[tokio::main]
async fn main() -> Result<()> {
    shared::log::init();

    let table = DynamoDbTable::from_env().await?;
    let response = handle(&table, &json!({})).await?;
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
