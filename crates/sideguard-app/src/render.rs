//! Render use case: markdown from in-memory reports.

use sideguard_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    sideguard_render::render_markdown(report)
}
