use super::DraggableTabs;

impl<Content> DraggableTabs<Content> {
    /// The recorded debug events, oldest first. Empty unless `options.debug_event_log` is set.
    pub fn debug_log(&self) -> impl Iterator<Item = &str> {
        self.debug_log.iter().map(String::as_str)
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }

    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_event_log {
            return;
        }
        let cap = self.options.debug_event_log_capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_log
            .push_back(format!("[pass {}] {}", self.pass, message.into()));
    }

    pub(super) fn check_integrity(&mut self, context: &str) {
        if !self.options.debug_integrity {
            return;
        }
        let issues = self.integrity_issues();
        if issues.is_empty() {
            return;
        }
        for issue in &issues {
            log::warn!("{context}: {issue}");
        }
        if self.options.debug_integrity_panic && cfg!(debug_assertions) {
            panic!("{context}: island integrity violated:\n{}", issues.join("\n"));
        }
        for issue in issues {
            self.debug_log_event(format!("{context}: {issue}"));
        }
    }
}
