use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::infrastructure::{
    dtos as infrastructure_dtos, handlers as infrastructure_handlers,
};
use crate::features::notifications::{
    dtos as notifications_dtos, handlers as notifications_handlers,
    models as notifications_models,
};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::statuses::{dtos as statuses_dtos, handlers as statuses_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::get_me,
        // Users
        users_handlers::get_profile,
        users_handlers::update_profile,
        // Infrastructure types (public)
        infrastructure_handlers::list_infrastructure_types,
        // Status registry (public)
        statuses_handlers::list_statuses,
        // Reports
        reports_handlers::create_report,
        reports_handlers::list_reports,
        reports_handlers::list_moderator_reports,
        reports_handlers::list_hidden_reports,
        reports_handlers::update_report_status,
        reports_handlers::transfer_report,
        reports_handlers::mark_report_read,
        reports_handlers::mark_report_unread,
        reports_handlers::hide_report,
        reports_handlers::restore_report,
        reports_handlers::delete_report,
        reports_handlers::approve_resolution,
        reports_handlers::reject_resolution,
        // Notifications
        notifications_handlers::list_notifications,
        notifications_handlers::mark_notification_read,
        notifications_handlers::mark_notification_unread,
        notifications_handlers::delete_notification,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            auth::dtos::RegisterRequestDto,
            auth::dtos::LoginRequestDto,
            auth::dtos::AuthResponseDto,
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::model::AuthenticatedUser>,
            // Users
            users_dtos::UserResponseDto,
            users_dtos::UpdateProfileDto,
            ApiResponse<users_dtos::UserResponseDto>,
            // Infrastructure types
            infrastructure_dtos::InfrastructureTypeResponseDto,
            ApiResponse<Vec<infrastructure_dtos::InfrastructureTypeResponseDto>>,
            // Status registry
            reports_models::ReportStatus,
            statuses_dtos::StatusResponseDto,
            ApiResponse<Vec<statuses_dtos::StatusResponseDto>>,
            // Reports
            reports_dtos::ReportResponseDto,
            reports_dtos::CreateReportDto,
            reports_dtos::UpdateReportStatusDto,
            reports_dtos::TransferReportDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            // Notifications
            notifications_models::NotificationKind,
            notifications_dtos::NotificationResponseDto,
            ApiResponse<notifications_dtos::NotificationResponseDto>,
            ApiResponse<Vec<notifications_dtos::NotificationResponseDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "User profile management"),
        (name = "infrastructure", description = "Infrastructure type reference data (public)"),
        (name = "statuses", description = "Report status registry and transition options (public)"),
        (name = "reports", description = "Citizen reports and the status workflow"),
        (name = "notifications", description = "In-app notifications"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "InfraSee API",
        version = "0.1.0",
        description = "API documentation for InfraSee",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
