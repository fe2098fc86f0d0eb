use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::put_object::PutObjectError;
use aws_sdk_s3::primitives::ByteStreamError;
use thiserror::Error;

/// Failures past the eligibility check. Each one ends the invocation with a 500.
#[derive(Debug, Error)]
pub(crate) enum PipelineError {
    #[error("failed to fetch object {key}")]
    Fetch {
        key: String,
        #[source]
        source: SdkError<GetObjectError>,
    },
    #[error("failed to read body of object {key}")]
    ReadBody {
        key: String,
        #[source]
        source: ByteStreamError,
    },
    #[error("failed to decode image")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode resized image")]
    Encode(#[source] image::ImageError),
    #[error("failed to upload object {key}")]
    Upload {
        key: String,
        #[source]
        source: SdkError<PutObjectError>,
    },
}
