use aws_lambda_events::event::s3::S3Event;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Serialize;

use crate::config::ResizeConfig;
use crate::error::PipelineError;
use crate::object_key::{decode_key, destination_key};
use crate::resize::resize_to_fit;

/// Returned to the invoker as `{"statusCode": .., "body": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    fn ok(body: String) -> Self {
        Self { status_code: 200, body }
    }

    fn skipped() -> Self {
        Self::ok("File skipped".to_string())
    }

    fn error(body: String) -> Self {
        Self { status_code: 500, body }
    }
}

/// Decoded key of the first record, or `None` when the event carries no records.
fn get_object_key(event: &S3Event) -> Result<Option<String>, Error> {
    let Some(record) = event.records.first() else {
        return Ok(None);
    };
    let raw = record.s3.object.key.as_deref().unwrap_or_default();
    let key = decode_key(raw)
        .map_err(|e| Error::from(format!("Object key {raw:?} is not valid UTF-8: {e}")))?;
    Ok(Some(key))
}

async fn resize_object(
    s3_client: &S3Client,
    config: &ResizeConfig,
    key: &str,
) -> Result<String, PipelineError> {
    tracing::info!("Fetching {}/{}", config.bucket, key);
    let object = s3_client
        .get_object()
        .bucket(&config.bucket)
        .key(key)
        .send()
        .await
        .map_err(|source| PipelineError::Fetch {
            key: key.to_string(),
            source,
        })?;
    let content_type = object.content_type;
    let data = object
        .body
        .collect()
        .await
        .map_err(|source| PipelineError::ReadBody {
            key: key.to_string(),
            source,
        })?
        .into_bytes();

    tracing::info!("Resizing {} ({} bytes)", key, data.len());
    let resized = resize_to_fit(&data, config.max_width, config.max_height)?;

    let output_key = destination_key(key, &config.destination_prefix);
    tracing::info!(
        "Uploading resized image ({} bytes) to {}/{}",
        resized.len(),
        config.bucket,
        output_key
    );
    s3_client
        .put_object()
        .bucket(&config.bucket)
        .key(&output_key)
        .body(ByteStream::from(resized))
        .set_content_type(content_type)
        .send()
        .await
        .map_err(|source| PipelineError::Upload {
            key: output_key.clone(),
            source,
        })?;
    Ok(output_key)
}

pub(crate) async fn function_handler(
    event: LambdaEvent<S3Event>,
    s3_client: &S3Client,
    config: &ResizeConfig,
) -> Result<Response, Error> {
    let payload = event.payload;
    let Some(key) = get_object_key(&payload)? else {
        tracing::warn!("No records found in S3 event");
        return Ok(Response::skipped());
    };
    tracing::info!("Processing object: {}", key);

    if !key.starts_with(config.source_prefix.as_str()) {
        tracing::info!("Skipping {} as it is not under {}", key, config.source_prefix);
        return Ok(Response::skipped());
    }

    match resize_object(s3_client, config, &key).await {
        Ok(output_key) => {
            tracing::info!("Resized image uploaded to {}", output_key);
            Ok(Response::ok(format!(
                "Successfully resized and uploaded {key} to {output_key}"
            )))
        }
        Err(err) => {
            let description = DisplayErrorContext(&err).to_string();
            tracing::error!("Error processing image {}: {}", key, description);
            Ok(Response::error(format!("Error resizing image: {description}")))
        }
    }
}
