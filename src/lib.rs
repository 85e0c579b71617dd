// Module layout (Clean Architecture style)
// - bootstrap: configuration, DI container, contextual logging, startup
// - infrastructure: database adapters
// - presentation: HTTP handlers, routing, response envelope
// - application: service/repository ports and implementations
// - domain: core models and the error taxonomy

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
