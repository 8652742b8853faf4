use anyhow::Result;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use shared::dynamodb::DynamoDbTable;
use tokio::sync::OnceCell;
use tracing::info;
use users::{handle, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    shared::log::init();

    // Fail the cold start rather than the first request when DYNAMODB_TABLE is missing.
    let table = get_table().await?;
    info!("Listing users from table {}", table.table_name());

    lambda_runtime::run(service_fn(func)).await?;
    Ok(())
}

static TABLE: OnceCell<DynamoDbTable> = OnceCell::const_new();
async fn get_table() -> Result<&'static DynamoDbTable> {
    TABLE.get_or_try_init(DynamoDbTable::from_env).await
}

async fn func(event: LambdaEvent<Value>) -> Result<Response, Error> {
    let table = get_table().await?;
    let response = handle(table, &event.payload).await?;

    Ok(response)
}
