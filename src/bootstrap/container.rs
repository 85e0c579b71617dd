use std::sync::Arc;

use thiserror::Error;

use crate::application::ports::user_auth_repository::UserAuthRepository;
use crate::application::services::service_info::ServiceInfoService;
use crate::application::services::user_auth::UserAuthService;
use crate::bootstrap::logger::ContextLogger;

/// Declared name of a concrete implementation. The container tags the
/// contextual logger it injects with this name, so log lines attribute to
/// the implementation actually bound for a capability.
pub trait Component {
    const NAME: &'static str;
}

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("no binding registered for capability `{0}`")]
    BindingNotFound(&'static str),
}

/// One typed slot per capability. Filled once at startup, immutable after
/// the object graph is resolved.
struct Binding<T: ?Sized> {
    capability: &'static str,
    slot: Option<Arc<T>>,
}

impl<T: ?Sized> Binding<T> {
    fn unbound(capability: &'static str) -> Self {
        Self {
            capability,
            slot: None,
        }
    }

    fn register(&mut self, instance: Arc<T>) {
        self.slot = Some(instance);
    }

    fn resolve(&self) -> Result<Arc<T>, ContainerError> {
        self.slot
            .clone()
            .ok_or(ContainerError::BindingNotFound(self.capability))
    }
}

/// Single source of truth binding abstract capabilities to concrete
/// implementations. Each `register_*` call hands the factory a fresh
/// contextual logger tagged with the implementation's declared name.
pub struct Container {
    logger: ContextLogger,
    user_auth_repository: Binding<dyn UserAuthRepository>,
    user_auth_service: Binding<dyn UserAuthService>,
    service_info_service: Binding<dyn ServiceInfoService>,
}

impl Container {
    pub fn new() -> Self {
        let logger = ContextLogger::create_logger("Container");
        logger.debug("Register service on Container");
        Self {
            logger,
            user_auth_repository: Binding::unbound("UserAuthRepository"),
            user_auth_service: Binding::unbound("UserAuthService"),
            service_info_service: Binding::unbound("ServiceInfoService"),
        }
    }

    pub fn register_user_auth_repository<R, F>(&mut self, factory: F)
    where
        R: UserAuthRepository + Component + 'static,
        F: FnOnce(ContextLogger) -> R,
    {
        self.logger
            .debug(&format!("Bound `UserAuthRepository` to {}", R::NAME));
        let instance = factory(ContextLogger::create_logger(R::NAME));
        self.user_auth_repository.register(Arc::new(instance));
    }

    pub fn register_user_auth_service<S, F>(&mut self, factory: F)
    where
        S: UserAuthService + Component + 'static,
        F: FnOnce(ContextLogger) -> S,
    {
        self.logger
            .debug(&format!("Bound `UserAuthService` to {}", S::NAME));
        let instance = factory(ContextLogger::create_logger(S::NAME));
        self.user_auth_service.register(Arc::new(instance));
    }

    pub fn register_service_info_service<S, F>(&mut self, factory: F)
    where
        S: ServiceInfoService + Component + 'static,
        F: FnOnce(ContextLogger) -> S,
    {
        self.logger
            .debug(&format!("Bound `ServiceInfoService` to {}", S::NAME));
        let instance = factory(ContextLogger::create_logger(S::NAME));
        self.service_info_service.register(Arc::new(instance));
    }

    pub fn resolve_user_auth_repository(
        &self,
    ) -> Result<Arc<dyn UserAuthRepository>, ContainerError> {
        self.user_auth_repository.resolve()
    }

    pub fn resolve_user_auth_service(&self) -> Result<Arc<dyn UserAuthService>, ContainerError> {
        self.user_auth_service.resolve()
    }

    pub fn resolve_service_info_service(
        &self,
    ) -> Result<Arc<dyn ServiceInfoService>, ContainerError> {
        self.service_info_service.resolve()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::user::UserEntity;
    use async_trait::async_trait;

    struct NullRepo;

    impl Component for NullRepo {
        const NAME: &'static str = "NullRepo";
    }

    #[async_trait]
    impl UserAuthRepository for NullRepo {
        async fn find_by_email(&self, email: &str) -> Result<UserEntity, DomainError> {
            Err(DomainError::RecordNotFound(format!(
                "User with email {email} is not found"
            )))
        }
    }

    #[test]
    fn resolving_an_unregistered_capability_fails() {
        let container = Container::new();
        let err = container.resolve_user_auth_service().err().unwrap();
        assert!(matches!(
            err,
            ContainerError::BindingNotFound("UserAuthService")
        ));
    }

    #[test]
    fn injected_logger_is_tagged_with_the_implementation_name() {
        let mut container = Container::new();
        let mut seen = None;
        container.register_user_auth_repository(|logger| {
            seen = Some(logger.class_name());
            NullRepo
        });
        assert_eq!(seen, Some("NullRepo"));
        assert!(container.resolve_user_auth_repository().is_ok());
    }
}
