use eframe::egui::{Response, Ui, Widget};

/// Queues clicks observed during layout for the next interaction pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Clickable {
    pending: u32,
}

impl Clickable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click(&mut self) {
        self.pending += 1;
    }

    /// Consumes one queued click.
    pub fn clicked(&mut self) -> bool {
        if self.pending > 0 {
            self.pending -= 1;
            true
        } else {
            false
        }
    }

    pub fn record(&mut self, response: &Response) {
        if response.clicked() {
            self.click();
        }
    }

    pub fn add(&mut self, ui: &mut Ui, widget: impl Widget) -> Response {
        let response = ui.add(widget);
        self.record(&response);
        response
    }

    pub fn add_enabled(&mut self, ui: &mut Ui, enabled: bool, widget: impl Widget) -> Response {
        let response = ui.add_enabled(enabled, widget);
        self.record(&response);
        response
    }
}
