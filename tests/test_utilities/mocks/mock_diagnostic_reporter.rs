use totool::prelude::*;

/// Mock DiagnosticReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockDiagnosticReporter {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockDiagnosticReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl DiagnosticReporter for MockDiagnosticReporter {
    fn report_warning(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Warning: {}", message));
    }

    fn report_root_error(&self, root: &str, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}: {}", root, message));
    }
}
