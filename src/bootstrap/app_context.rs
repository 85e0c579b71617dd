use std::sync::Arc;

use crate::application::services::service_info::ServiceInfoService;
use crate::application::services::user_auth::UserAuthService;
use crate::bootstrap::config::Config;
use crate::bootstrap::container::{Container, ContainerError};

/// Resolved object graph shared by the HTTP layer. Built once from the
/// container at startup and immutable afterwards.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct AppServices {
    user_auth: Arc<dyn UserAuthService>,
    service_info: Arc<dyn ServiceInfoService>,
}

impl AppServices {
    pub fn new(
        user_auth: Arc<dyn UserAuthService>,
        service_info: Arc<dyn ServiceInfoService>,
    ) -> Self {
        Self {
            user_auth,
            service_info,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    /// Resolves every capability the HTTP layer depends on. Fails with
    /// `ContainerError::BindingNotFound` if a registration was missed.
    pub fn from_container(cfg: Config, container: &Container) -> Result<Self, ContainerError> {
        let services = AppServices::new(
            container.resolve_user_auth_service()?,
            container.resolve_service_info_service()?,
        );
        Ok(Self::new(cfg, services))
    }

    pub fn user_auth(&self) -> Arc<dyn UserAuthService> {
        self.services.user_auth.clone()
    }

    pub fn service_info(&self) -> Arc<dyn ServiceInfoService> {
        self.services.service_info.clone()
    }
}
