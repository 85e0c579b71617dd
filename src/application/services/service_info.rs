use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::ports::clock::Clock;
use crate::bootstrap::container::Component;
use crate::bootstrap::logger::ContextLogger;
use crate::domain::error::DomainError;

/// Snapshot of process-wide identity, constructed fresh on every call.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub service_name: String,
    pub app_version: String,
    /// Epoch millis as a string.
    pub timestamp: String,
}

#[async_trait]
pub trait ServiceInfoService: Send + Sync {
    async fn get_service_info(&self) -> Result<ServiceInfo, DomainError>;
}

pub struct ConfigServiceInfoService {
    logger: ContextLogger,
    service_name: String,
    app_version: String,
    clock: Arc<dyn Clock>,
}

impl ConfigServiceInfoService {
    pub fn new(
        logger: ContextLogger,
        service_name: String,
        app_version: String,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            logger,
            service_name,
            app_version,
            clock,
        }
    }
}

impl Component for ConfigServiceInfoService {
    const NAME: &'static str = "ConfigServiceInfoService";
}

#[async_trait]
impl ServiceInfoService for ConfigServiceInfoService {
    async fn get_service_info(&self) -> Result<ServiceInfo, DomainError> {
        self.logger
            .method("get_service_info")
            .info("getting service info");

        Ok(ServiceInfo {
            service_name: self.service_name.clone(),
            app_version: self.app_version.clone(),
            timestamp: self.clock.now_millis().to_string(),
        })
    }
}
