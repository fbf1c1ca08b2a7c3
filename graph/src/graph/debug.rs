//! Debug toggles and the frame logger.

use std::fmt::{self, Write as _};

/// Debug switches of a render graph.
///
/// Owned by the [`RenderGraph`](super::RenderGraph) and passed by reference
/// to the resource registry while a frame executes. The two `log_*` flags are
/// one-shot: they apply to the next executed frame and reset afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderGraphDebugParams {
    /// Attach the descriptor name to every backing texture the graph hands out.
    pub tag_resource_names: bool,
    /// Clear every transient texture with magenta when it is allocated.
    pub clear_render_targets_at_creation: bool,
    /// Clear every transient texture with magenta when it is released.
    pub clear_render_targets_at_release: bool,
    /// Unbind global texture slots after each pass.
    pub unbind_global_textures: bool,
    /// Log the pass list and per-pass resource operations of the next frame.
    pub log_frame_information: bool,
    /// Log the registry contents at the end of the next frame.
    pub log_resources: bool,
}

impl RenderGraphDebugParams {
    /// Returns true if the next frame produces a log report.
    pub fn wants_log(&self) -> bool {
        self.log_frame_information || self.log_resources
    }

    pub(crate) fn reset_one_shot(&mut self) {
        self.log_frame_information = false;
        self.log_resources = false;
    }
}

/// Indented text report of one frame.
///
/// Lines are only collected while the logger is enabled for the frame, and the
/// whole report is written through `log::info!` on [`flush`](Self::flush).
#[derive(Debug, Default)]
pub struct RenderGraphLogger {
    enabled: bool,
    indentation: usize,
    buffer: String,
}

impl RenderGraphLogger {
    /// Create a disabled logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a frame report.
    pub fn begin(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.indentation = 0;
        self.buffer.clear();
    }

    /// Returns true if lines are being collected.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Indent following lines by one level.
    pub fn inc_indent(&mut self) {
        self.indentation += 1;
    }

    /// Remove one indentation level.
    pub fn dec_indent(&mut self) {
        self.indentation = self.indentation.saturating_sub(1);
    }

    /// Append a line at the current indentation.
    pub fn log_line(&mut self, args: fmt::Arguments<'_>) {
        if !self.enabled {
            return;
        }
        for _ in 0..self.indentation {
            self.buffer.push_str("    ");
        }
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
    }

    /// Collected report text.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Write the report through the `log` facade and disable the logger.
    pub fn flush(&mut self) {
        if self.enabled && !self.buffer.is_empty() {
            log::info!("{}", self.buffer.trim_end());
        }
        self.begin(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logger_collects_nothing() {
        let mut logger = RenderGraphLogger::new();
        logger.log_line(format_args!("ignored"));
        assert!(logger.contents().is_empty());
    }

    #[test]
    fn test_indentation() {
        let mut logger = RenderGraphLogger::new();
        logger.begin(true);
        logger.log_line(format_args!("frame"));
        logger.inc_indent();
        logger.log_line(format_args!("pass {}", 0));
        logger.dec_indent();
        logger.dec_indent();
        logger.log_line(format_args!("end"));

        assert_eq!(logger.contents(), "frame\n    pass 0\nend\n");

        logger.flush();
        assert!(!logger.is_enabled());
        assert!(logger.contents().is_empty());
    }

    #[test]
    fn test_one_shot_flags_reset() {
        let mut params = RenderGraphDebugParams {
            tag_resource_names: true,
            log_frame_information: true,
            log_resources: true,
            ..Default::default()
        };
        assert!(params.wants_log());

        params.reset_one_shot();

        assert!(!params.wants_log());
        assert!(params.tag_resource_names);
    }
}
