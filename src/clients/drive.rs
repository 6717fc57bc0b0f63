//! File uploads to the Google Drive v3 API.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::Credentials;
use crate::clients::errors::{Destination, UploadError};
use crate::clients::http_client::{UploadClient, UploadRequest};
use crate::clients::source::SourceStream;
use crate::resource::PropertyMap;

/// Endpoint path for multipart file creation.
pub const FILES_UPLOAD_PATH: &str = "/upload/drive/v3/files";

/// Fields requested back from a file create.
pub const FILE_FIELDS: &str = "id";

/// A file created in Google Drive.
///
/// Only the fields in [`FILE_FIELDS`] are requested, so `id` is the only
/// field guaranteed to be present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveFile {
    /// The file identifier.
    pub id: String,
}

/// Creates files through an [`UploadClient`].
#[derive(Debug)]
pub struct FileUploader<'a> {
    client: &'a UploadClient,
}

impl<'a> FileUploader<'a> {
    /// Creates an uploader that sends through the given client.
    #[must_use]
    pub const fn new(client: &'a UploadClient) -> Self {
        Self { client }
    }

    /// Uploads the source stream as a new file named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] if the upload fails or the response carries
    /// no file id.
    pub async fn create(
        &self,
        name: &str,
        credentials: &Credentials,
        media: SourceStream,
    ) -> Result<DriveFile, UploadError> {
        let upload = UploadRequest {
            destination: Destination::Drive,
            path: FILES_UPLOAD_PATH,
            query: PropertyMap::from([("uploadType", "multipart"), ("fields", FILE_FIELDS)]),
            metadata: json!({ "name": name }),
            credentials: credentials.clone(),
        };

        let response = self.client.upload(upload, media).await?;
        serde_json::from_value(response.body).map_err(|e| UploadError {
            destination: Destination::Drive,
            code: response.code,
            message: format!("Unexpected file resource: {e}"),
            error_reference: response.upload_id,
        })
    }
}
