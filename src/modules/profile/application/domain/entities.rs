use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::store::listing::{Facet, Listable, SortField, SortValue};

//
// ──────────────────────────────────────────────────────────
// User
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub title: String,
    pub location: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile edit form. File fields carry URLs returned by the upload endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
}

impl User {
    /// Applies the set form fields and bumps `updated_at`.
    pub fn apply(&self, form: &UpdateUserForm, now: DateTime<Utc>) -> User {
        let mut user = self.clone();
        if let Some(name) = &form.name {
            user.name = name.clone();
        }
        if let Some(title) = &form.title {
            user.title = title.clone();
        }
        if let Some(location) = &form.location {
            user.location = location.clone();
        }
        if let Some(bio) = &form.bio {
            user.bio = bio.clone();
        }
        if form.avatar.is_some() {
            user.avatar = form.avatar.clone();
        }
        if form.cv_url.is_some() {
            user.cv_url = form.cv_url.clone();
        }
        user.updated_at = now;
        user
    }
}

//
// ──────────────────────────────────────────────────────────
// Social links
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Linkedin,
    Github,
    Instagram,
    Twitter,
    Facebook,
    Other,
}

impl SocialPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Github => "github",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub id: String,
    pub platform: SocialPlatform,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub is_visible: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkDraft {
    pub platform: SocialPlatform,
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    pub is_visible: bool,
    pub order: i32,
}

impl SocialLinkDraft {
    pub fn into_entity(self, id: String) -> SocialLink {
        SocialLink {
            id,
            platform: self.platform,
            url: self.url,
            username: self.username,
            is_visible: self.is_visible,
            order: self.order,
        }
    }
}

impl Listable for SocialLink {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> i32 {
        self.order
    }
    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
    fn is_visible(&self) -> bool {
        self.is_visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.is_visible = visible;
    }
    fn supports_facet(facet: Facet) -> bool {
        facet == Facet::Category
    }
    fn facet(&self, facet: Facet) -> Option<&str> {
        (facet == Facet::Category).then(|| self.platform.as_str())
    }
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.platform.as_str(), self.url.as_str()];
        if let Some(username) = &self.username {
            fields.push(username);
        }
        fields
    }
}

//
// ──────────────────────────────────────────────────────────
// Tech stack
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Design,
    Other,
}

impl TechCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "frontend",
            TechCategory::Backend => "backend",
            TechCategory::Database => "database",
            TechCategory::Devops => "devops",
            TechCategory::Design => "design",
            TechCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    pub id: String,
    pub name: String,
    pub category: TechCategory,
    pub icon_name: String,
    /// 1 to 5.
    pub proficiency_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<f32>,
    pub is_visible: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechStackDraft {
    pub name: String,
    pub category: TechCategory,
    pub icon_name: String,
    pub proficiency_level: u8,
    #[serde(default)]
    pub years_of_experience: Option<f32>,
    pub is_visible: bool,
    pub order: i32,
}

impl TechStackDraft {
    pub fn into_entity(self, id: String) -> TechStack {
        TechStack {
            id,
            name: self.name,
            category: self.category,
            icon_name: self.icon_name,
            proficiency_level: self.proficiency_level.clamp(1, 5),
            years_of_experience: self.years_of_experience,
            is_visible: self.is_visible,
            order: self.order,
        }
    }
}

impl TechStack {
    pub fn icon(&self) -> TechIcon {
        TechIcon::resolve(&self.icon_name)
    }
}

impl Listable for TechStack {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> i32 {
        self.order
    }
    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
    fn is_visible(&self) -> bool {
        self.is_visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.is_visible = visible;
    }
    fn supports_facet(facet: Facet) -> bool {
        facet == Facet::Category
    }
    fn facet(&self, facet: Facet) -> Option<&str> {
        (facet == Facet::Category).then(|| self.category.as_str())
    }
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.category.as_str()]
    }
    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::Name | SortField::Title => SortValue::Text(self.name.clone()),
            _ => SortValue::Number(i64::from(self.order)),
        }
    }
}

/// Closed set of technology icons the presentation layer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TechIcon {
    Typescript,
    Javascript,
    Html5,
    React,
    Nextjs,
    Tailwindcss,
    Shadcn,
    AntDesign,
    ReactQuery,
    Redux,
    Nodejs,
    Nestjs,
    Socketio,
    Rust,
    Python,
    Java,
    Cpp,
    Postgresql,
    Mongodb,
    Mysql,
    Redis,
    SqlServer,
    Oracle,
    Docker,
    Kubernetes,
    Linux,
    Git,
    Swagger,
    Postman,
    Figma,
    Generic,
}

impl TechIcon {
    /// Maps an icon identifier to a known icon; unknown names fall back to `Generic`.
    pub fn resolve(icon_name: &str) -> TechIcon {
        match icon_name {
            "SiTypescript" => TechIcon::Typescript,
            "SiJavascript" | "FaJs" => TechIcon::Javascript,
            "FaHtml5" | "SiHtml5" => TechIcon::Html5,
            "FaReact" | "SiReact" => TechIcon::React,
            "SiNextdotjs" => TechIcon::Nextjs,
            "SiTailwindcss" => TechIcon::Tailwindcss,
            "SiShadcnui" => TechIcon::Shadcn,
            "AiOutlineAntDesign" | "SiAntdesign" => TechIcon::AntDesign,
            "SiReactquery" => TechIcon::ReactQuery,
            "SiRedux" => TechIcon::Redux,
            "FaNode" | "SiNodedotjs" => TechIcon::Nodejs,
            "SiNestjs" => TechIcon::Nestjs,
            "SiSocketdotio" => TechIcon::Socketio,
            "SiRust" | "FaRust" => TechIcon::Rust,
            "SiPython" | "FaPython" => TechIcon::Python,
            "FaJava" => TechIcon::Java,
            "PiFileCppFill" | "SiCplusplus" => TechIcon::Cpp,
            "SiPostgresql" => TechIcon::Postgresql,
            "SiMongodb" => TechIcon::Mongodb,
            "SiMysql" => TechIcon::Mysql,
            "SiRedis" => TechIcon::Redis,
            "DiMsqlServer" => TechIcon::SqlServer,
            "SiOracle" => TechIcon::Oracle,
            "FaDocker" | "SiDocker" => TechIcon::Docker,
            "SiKubernetes" => TechIcon::Kubernetes,
            "FaLinux" | "SiLinux" => TechIcon::Linux,
            "FaGitAlt" | "SiGit" => TechIcon::Git,
            "SiSwagger" => TechIcon::Swagger,
            "SiPostman" => TechIcon::Postman,
            "FaFigma" | "SiFigma" => TechIcon::Figma,
            _ => TechIcon::Generic,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Language,
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Language => "language",
            SkillCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: SkillCategory,
    pub proficiency_level: u8,
    pub is_visible: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: SkillCategory,
    pub proficiency_level: u8,
    pub is_visible: bool,
    pub order: i32,
}

impl SkillDraft {
    pub fn into_entity(self, id: String) -> Skill {
        Skill {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            proficiency_level: self.proficiency_level.clamp(1, 5),
            is_visible: self.is_visible,
            order: self.order,
        }
    }
}

impl Listable for Skill {
    fn id(&self) -> &str {
        &self.id
    }
    fn order(&self) -> i32 {
        self.order
    }
    fn set_order(&mut self, order: i32) {
        self.order = order;
    }
    fn is_visible(&self) -> bool {
        self.is_visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.is_visible = visible;
    }
    fn supports_facet(facet: Facet) -> bool {
        facet == Facet::Category
    }
    fn facet(&self, facet: Facet) -> Option<&str> {
        (facet == Facet::Category).then(|| self.category.as_str())
    }
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }
    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::Title | SortField::Name => SortValue::Text(self.title.clone()),
            _ => SortValue::Number(i64::from(self.order)),
        }
    }
}
