//! CSV export orchestration

use dashtui::export::{ExportScope, ExportSink};
use tracing::debug;

use crate::App;

impl App {
    /// Build the CSV for the active page and hand it to the sink
    ///
    /// The write runs in the background; the toast only reports that it
    /// was started.
    pub(crate) fn export(&mut self, scope: ExportScope) {
        let artifact = self.model.active_page().export(scope);
        let message = format!(
            "Exporting {} ({}, {} rows)",
            artifact.file_name,
            scope.as_str(),
            artifact.row_count
        );
        debug!("{} to {}", message, self.export_sink.dir().display());

        self.export_sink.save(artifact);
        self.model.show_toast(message);
    }
}
