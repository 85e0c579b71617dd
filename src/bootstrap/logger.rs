/// Logger pre-bound with the identity of its owning component, so every line
/// is attributable without string concatenation at each call site. Events go
/// through `tracing` with a `class` field and, when scoped, a `method` field.
#[derive(Debug, Clone)]
pub struct ContextLogger {
    class_name: &'static str,
    method_name: Option<&'static str>,
}

impl ContextLogger {
    pub fn create_logger(class_name: &'static str) -> Self {
        Self {
            class_name,
            method_name: None,
        }
    }

    /// Returns a copy of this logger scoped to a method for the duration of
    /// one call.
    pub fn method(&self, method_name: &'static str) -> Self {
        Self {
            class_name: self.class_name,
            method_name: Some(method_name),
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    pub fn info(&self, message: &str) {
        match self.method_name {
            Some(method) => tracing::info!(class = self.class_name, method, "{message}"),
            None => tracing::info!(class = self.class_name, "{message}"),
        }
    }

    pub fn debug(&self, message: &str) {
        match self.method_name {
            Some(method) => tracing::debug!(class = self.class_name, method, "{message}"),
            None => tracing::debug!(class = self.class_name, "{message}"),
        }
    }

    pub fn error(&self, message: &str) {
        match self.method_name {
            Some(method) => tracing::error!(class = self.class_name, method, "{message}"),
            None => tracing::error!(class = self.class_name, "{message}"),
        }
    }
}
