use async_trait::async_trait;

use crate::modules::media::application::domain::entities::{
    UploadFile, UploadKind, UploadedFile, UploadedFiles,
};
use crate::modules::media::application::ports::outgoing::MediaRepository;
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::latency::{Latency, MOCK_DELAY_MS};

/// Pretends every upload succeeded and hands back `/uploads/...` paths.
pub struct MediaMockService {
    latency: Latency,
}

impl MediaMockService {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

fn folder(kind: UploadKind) -> &'static str {
    match kind {
        UploadKind::Avatar => "avatars",
        UploadKind::Cv => "cv",
        UploadKind::Project => "projects",
        UploadKind::Memory => "memories",
    }
}

fn url_for(kind: UploadKind, file: &UploadFile) -> String {
    format!("/uploads/{}/{}", folder(kind), file.file_name)
}

fn urls_for(kind: UploadKind, files: &[UploadFile]) -> UploadedFiles {
    UploadedFiles {
        urls: files.iter().map(|f| url_for(kind, f)).collect(),
    }
}

#[async_trait]
impl MediaRepository for MediaMockService {
    async fn upload_file(
        &self,
        file: UploadFile,
        kind: UploadKind,
    ) -> Result<ApiResponse<UploadedFile>, ServiceError> {
        self.latency.wait(MOCK_DELAY_MS).await;
        let url = url_for(kind, &file);
        Ok(ApiResponse::wrap(UploadedFile { url }, Some("File uploaded successfully")))
    }

    async fn upload_files(
        &self,
        files: Vec<UploadFile>,
        kind: UploadKind,
    ) -> Result<ApiResponse<UploadedFiles>, ServiceError> {
        self.latency.wait(MOCK_DELAY_MS).await;
        Ok(ApiResponse::wrap(
            urls_for(kind, &files),
            Some("Files uploaded successfully"),
        ))
    }

    async fn upload_avatar(
        &self,
        file: UploadFile,
    ) -> Result<ApiResponse<UploadedFile>, ServiceError> {
        self.upload_file(file, UploadKind::Avatar).await
    }

    async fn upload_cv(&self, file: UploadFile) -> Result<ApiResponse<UploadedFile>, ServiceError> {
        self.upload_file(file, UploadKind::Cv).await
    }

    async fn upload_project_images(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<ApiResponse<UploadedFiles>, ServiceError> {
        self.upload_files(files, UploadKind::Project).await
    }

    async fn upload_memory_images(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<ApiResponse<UploadedFiles>, ServiceError> {
        self.upload_files(files, UploadKind::Memory).await
    }
}
