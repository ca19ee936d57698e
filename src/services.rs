pub mod auth;
pub use auth::AuthService;
pub mod crm_service;
pub use crm_service::CrmService;
pub mod dashboard_service;
