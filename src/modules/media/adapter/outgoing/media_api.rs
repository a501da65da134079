use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::modules::media::application::domain::entities::{
    UploadFile, UploadKind, UploadedFile, UploadedFiles,
};
use crate::modules::media::application::ports::outgoing::MediaRepository;
use crate::shared::api::ApiResponse;
use crate::shared::error::ServiceError;
use crate::shared::http::{endpoints, ApiClient};

pub struct MediaApiService {
    client: ApiClient,
}

impl MediaApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn part(file: UploadFile) -> Result<Part, ServiceError> {
    let part = Part::bytes(file.bytes)
        .file_name(file.file_name)
        .mime_str(&file.content_type)?;
    Ok(part)
}

/// Multipart form with every file under the same `field`.
fn files_form(field: &'static str, files: Vec<UploadFile>) -> Result<Form, ServiceError> {
    files
        .into_iter()
        .try_fold(Form::new(), |form, file| Ok(form.part(field, part(file)?)))
}

#[async_trait]
impl MediaRepository for MediaApiService {
    async fn upload_file(
        &self,
        file: UploadFile,
        kind: UploadKind,
    ) -> Result<ApiResponse<UploadedFile>, ServiceError> {
        let form = Form::new()
            .part("file", part(file)?)
            .text("type", kind.as_str());
        self.client.upload(endpoints::UPLOAD, form).await
    }

    async fn upload_files(
        &self,
        files: Vec<UploadFile>,
        kind: UploadKind,
    ) -> Result<ApiResponse<UploadedFiles>, ServiceError> {
        let form = files_form("files", files)?.text("type", kind.as_str());
        self.client.upload(endpoints::UPLOAD, form).await
    }

    async fn upload_avatar(
        &self,
        file: UploadFile,
    ) -> Result<ApiResponse<UploadedFile>, ServiceError> {
        let form = Form::new().part("avatar", part(file)?);
        self.client.upload(endpoints::UPLOAD_AVATAR, form).await
    }

    async fn upload_cv(&self, file: UploadFile) -> Result<ApiResponse<UploadedFile>, ServiceError> {
        let form = Form::new().part("cv", part(file)?);
        self.client.upload(endpoints::UPLOAD_CV, form).await
    }

    async fn upload_project_images(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<ApiResponse<UploadedFiles>, ServiceError> {
        let form = files_form("images", files)?;
        self.client
            .upload(endpoints::UPLOAD_PROJECT_IMAGES, form)
            .await
    }

    async fn upload_memory_images(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<ApiResponse<UploadedFiles>, ServiceError> {
        let form = files_form("images", files)?;
        self.client
            .upload(endpoints::UPLOAD_MEMORY_IMAGES, form)
            .await
    }
}
