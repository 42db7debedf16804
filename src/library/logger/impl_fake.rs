use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

/// Collects every line instead of printing, for assertions on log output.
#[allow(dead_code)]
pub struct LoggerFake {
    namespace: Option<String>,
    lines: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl LoggerFake {
    pub fn new() -> Self {
        Self {
            namespace: None,
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle for reading back what was logged. Namespaced children share it.
    pub fn lines_handle(&self) -> Arc<Mutex<Vec<String>>> {
        self.lines.clone()
    }

    fn record(&self, message: &str) {
        let line = match &self.namespace {
            Some(namespace) => format!("{}: {}", namespace, message),
            None => message.to_string(),
        };
        self.lines.lock().unwrap().push(line);
    }
}

impl Logger for LoggerFake {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(message);
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(message);
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let nested = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerFake {
            namespace: Some(nested),
            lines: self.lines.clone(),
        })
    }
}
