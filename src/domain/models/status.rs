/// Messages and progress shown in the page chrome around routed content
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBanners {
    pub error: Option<String>,
    pub info: Option<String>,
    pending: u32,
}

impl StatusBanners {
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.info = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn dismiss_info(&mut self) {
        self.info = None;
    }

    pub fn begin_loading(&mut self) {
        self.pending = self.pending.saturating_add(1);
    }

    pub fn end_loading(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    /// The loading bar stays visible until every `begin_loading` has ended.
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }
}
