use async_trait::async_trait;

use crate::modules::media::application::domain::entities::{
    UploadFile, UploadKind, UploadedFile, UploadedFiles,
};
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;

#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn upload_file(
        &self,
        file: UploadFile,
        kind: UploadKind,
    ) -> Result<ApiResponse<UploadedFile>, ServiceError>;

    /// Only `Project` and `Memory` are accepted as bulk destinations upstream.
    async fn upload_files(
        &self,
        files: Vec<UploadFile>,
        kind: UploadKind,
    ) -> Result<ApiResponse<UploadedFiles>, ServiceError>;

    async fn upload_avatar(&self, file: UploadFile)
        -> Result<ApiResponse<UploadedFile>, ServiceError>;

    async fn upload_cv(&self, file: UploadFile) -> Result<ApiResponse<UploadedFile>, ServiceError>;

    async fn upload_project_images(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<ApiResponse<UploadedFiles>, ServiceError>;

    async fn upload_memory_images(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<ApiResponse<UploadedFiles>, ServiceError>;
}
