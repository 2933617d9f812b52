//! The lint engine shared by every front end.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::ValeError;
use crate::alert::decode_alerts;
use crate::host::{Host, Popup};
use crate::mapper::map_alerts;
use crate::process::{Invocation, Invoker, ProcessOutput, SystemInvoker};
use crate::region::ViewId;
use crate::registry::AlertRegistry;
use crate::scope::select_scope;
use crate::settings::{AlertLocation, NO_VALE_ERR, ValeSettings};
use crate::styles::{self, ValeConfig};
use crate::template::Templates;
use crate::trigger::{EditorEvent, dispatch};
use crate::view::View;

/// Result of one lint cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "alerts", rename_all = "snake_case")]
pub enum CycleOutcome {
    /// The view has no file on disk.
    Skipped,
    /// A paragraph-scoped cycle triggered by loading; nothing was drawn.
    Discarded,
    /// A newer cycle or a clear happened while Vale was running.
    Stale,
    /// The given number of alerts were drawn.
    Rendered(usize),
}

/// How a hover was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverReply {
    Popup(Popup),
    Status(String),
}

/// Everything done in response to one editor event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub cleared: bool,
    pub cycle: Option<CycleOutcome>,
    pub hover: Option<HoverReply>,
}

/// Settings, templates, the alert registry and the process invoker.
///
/// One context lives for the whole process and is shared by all views.
pub struct ValeContext {
    settings: RwLock<ValeSettings>,
    templates: RwLock<Templates>,
    registry: AlertRegistry,
    invoker: Arc<dyn Invoker>,
    missing_binary_reported: AtomicBool,
}

impl std::fmt::Debug for ValeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValeContext")
            .field("settings", &*self.settings.read())
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Default for ValeContext {
    /// Default settings, built-in templates and the real Vale binary.
    fn default() -> Self {
        Self::from_parts(
            ValeSettings::default(),
            Templates::builtin(),
            Arc::new(SystemInvoker),
        )
    }
}

impl ValeContext {
    /// Creates a context that runs the real Vale binary.
    pub fn new(settings: ValeSettings) -> Result<Self, ValeError> {
        Self::with_invoker(settings, Arc::new(SystemInvoker))
    }

    pub fn with_invoker(
        settings: ValeSettings,
        invoker: Arc<dyn Invoker>,
    ) -> Result<Self, ValeError> {
        let templates = Templates::load(&settings)?;
        Ok(Self::from_parts(settings, templates, invoker))
    }

    fn from_parts(settings: ValeSettings, templates: Templates, invoker: Arc<dyn Invoker>) -> Self {
        Self {
            settings: RwLock::new(settings),
            templates: RwLock::new(templates),
            registry: AlertRegistry::new(),
            invoker,
            missing_binary_reported: AtomicBool::new(false),
        }
    }

    /// Replaces the settings and reloads the templates they name.
    ///
    /// On error the previous settings stay in effect.
    pub fn reload(&self, settings: ValeSettings) -> Result<(), ValeError> {
        let templates = Templates::load(&settings)?;
        *self.templates.write() = templates;
        *self.settings.write() = settings;
        self.missing_binary_reported.store(false, Ordering::Relaxed);
        info!("Settings reloaded");
        Ok(())
    }

    /// A snapshot of the current settings.
    pub fn settings(&self) -> ValeSettings {
        self.settings.read().clone()
    }

    pub fn registry(&self) -> &AlertRegistry {
        &self.registry
    }

    /// Locates the Vale binary.
    pub fn binary_path(&self) -> Result<PathBuf, ValeError> {
        let settings = self.settings.read();
        settings
            .resolve_binary()
            .ok_or_else(|| ValeError::BinaryNotFound(PathBuf::from(&settings.vale_binary)))
    }

    /// Checks that Vale can be found, telling the user once if it cannot.
    pub fn check_environment(&self, host: &dyn Host) -> bool {
        if self.settings.read().vale_exists() {
            return true;
        }
        if !self.missing_binary_reported.swap(true, Ordering::Relaxed) {
            warn!("Vale binary not found");
            host.error_message(NO_VALE_ERR);
        }
        false
    }

    /// Returns true if lint cycles may run for `view`.
    pub fn is_enabled(&self, view: &dyn View) -> bool {
        let settings = self.settings.read();
        settings.is_supported(view.syntax()) && settings.vale_exists()
    }

    /// Reacts to an editor event according to the configured lint mode.
    pub fn handle_event(&self, view: &dyn View, host: &dyn Host, event: EditorEvent) -> EventOutcome {
        let mode = self.settings.read().vale_mode;
        let reaction = dispatch(mode, event);
        let mut outcome = EventOutcome::default();

        if reaction.clear {
            self.clear(host);
            outcome.cleared = true;
        }

        if let Some(request) = reaction.lint {
            if self.is_enabled(view) {
                outcome.cycle = self.lint(view, host, request.from_load);
            } else {
                debug!("Linting disabled for {} ({})", view.id(), view.syntax());
            }
        }

        if let Some(point) = reaction.hover {
            outcome.hover = self.hover(view.id(), host, point);
        }

        outcome
    }

    /// Empties the registry and erases all drawn alerts.
    pub fn clear(&self, host: &dyn Host) {
        self.registry.clear(host);
    }

    /// Runs a lint cycle, logging any failure.
    ///
    /// Failed cycles leave the display unchanged.
    pub fn lint(&self, view: &dyn View, host: &dyn Host, from_load: bool) -> Option<CycleOutcome> {
        match self.run_lint(view, host, from_load) {
            Ok(outcome) => {
                debug!("Lint cycle for {}: {:?}", view.id(), outcome);
                Some(outcome)
            }
            Err(e) => {
                error!("Lint cycle for {} failed: {}", view.id(), e);
                None
            }
        }
    }

    /// Runs one lint cycle for `view` and draws its alerts.
    pub fn run_lint(
        &self,
        view: &dyn View,
        host: &dyn Host,
        from_load: bool,
    ) -> Result<CycleOutcome, ValeError> {
        let Some(path) = view.file_name().filter(|_| !view.is_scratch()) else {
            debug!("Skipping {}: no file on disk", view.id());
            return Ok(CycleOutcome::Skipped);
        };

        let generation = self.registry.begin_cycle(view.id());
        let settings = self.settings();
        let decision = select_scope(view, settings.vale_threshold);
        let text = view.substr(decision.bounds(view.size()));

        let mut invocation = Invocation::new(self.binary_path()?)
            .args(["--output=JSON".to_string(), ext_arg(path)])
            .stdin(text);
        if let Some(dir) = path.parent() {
            invocation = invocation.cwd(dir);
        }

        let output = self.invoker.run(&invocation)?;
        check_stderr(&output)?;
        let alerts = decode_alerts(&output.stdout)?;

        if decision.is_restricted() && from_load {
            debug!("Discarding paragraph results of a load-triggered cycle");
            return Ok(CycleOutcome::Discarded);
        }

        let mapped = map_alerts(view, &alerts, decision.row_offset(), &self.templates.read())?;
        let count = mapped.len();
        if self
            .registry
            .commit(generation, mapped, host, &settings.region_style())
        {
            Ok(CycleOutcome::Rendered(count))
        } else {
            Ok(CycleOutcome::Stale)
        }
    }

    /// Shows the alert under `point`, if any.
    pub fn hover(&self, view: ViewId, host: &dyn Host, point: usize) -> Option<HoverReply> {
        let alert = self.registry.find_at(view, point)?;
        let settings = self.settings.read();

        match settings.vale_alert_location {
            AlertLocation::HoverPopup => {
                let popup = Popup {
                    html: alert.html,
                    location: point,
                    max_width: settings.vale_popup_width,
                };
                host.show_popup(view, &popup);
                Some(HoverReply::Popup(popup))
            }
            AlertLocation::HoverStatusBar => {
                let line = alert.status_line();
                host.status_message(&line);
                Some(HoverReply::Status(line))
            }
        }
    }

    /// Runs `vale ls-config` in `dir`.
    pub fn vale_config(&self, dir: Option<&Path>) -> Result<ValeConfig, ValeError> {
        let mut invocation = Invocation::new(self.binary_path()?).arg("ls-config");
        if let Some(dir) = dir {
            invocation = invocation.cwd(dir);
        }
        let output = self.invoker.run(&invocation)?;
        check_stderr(&output)?;
        ValeConfig::parse(&output.stdout)
    }

    /// Lists the styles available to files in `dir`.
    pub fn list_styles(&self, dir: Option<&Path>) -> Result<Vec<String>, ValeError> {
        let styles_dir = self.vale_config(dir)?.styles_dir()?;
        styles::list_styles(&styles_dir)
    }

    /// Lists the rule files of `style` as seen from `dir`.
    pub fn list_rules(&self, dir: Option<&Path>, style: &str) -> Result<Vec<PathBuf>, ValeError> {
        let styles_dir = self.vale_config(dir)?.styles_dir()?;
        styles::list_rules(&styles_dir, style)
    }

    /// Returns Vale's template for a new rule of kind `point`.
    pub fn new_rule(&self, point: &str) -> Result<String, ValeError> {
        if !styles::is_extension_point(point) {
            return Err(ValeError::config(format!(
                "Unknown extension point '{}'. Expected one of: {}",
                point,
                styles::EXTENSION_POINTS.join(", ")
            )));
        }

        let invocation = Invocation::new(self.binary_path()?).args(["new", point]);
        let output = self.invoker.run(&invocation)?;
        check_stderr(&output)?;
        Ok(output.stdout)
    }
}

/// `--ext=.md` for `notes.md`; Vale uses it to pick a format for stdin.
fn ext_arg(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!("--ext=.{}", ext.to_string_lossy()),
        None => "--ext=".to_string(),
    }
}

/// Any stderr output, even a bare newline, fails the call.
fn check_stderr(output: &ProcessOutput) -> Result<(), ValeError> {
    if output.stderr.is_empty() {
        Ok(())
    } else {
        Err(ValeError::invocation(output.stderr.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::Severity;
    use crate::host::{HostCommand, RecordingHost, REGION_LAYER};
    use crate::region::Region;
    use crate::trigger::LintMode;
    use crate::view::BufferView;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::ffi::OsString;

    const DOC: &str = "First line here.\nSecond line.\nThe third line is long.\n";

    const RESPONSE: &str = r#"{"f.md": [{"Line":3,"Span":[5,9],"Severity":"warning","Message":"m","Description":"","Check":"c","Link":""}]}"#;

    /// Replays canned output and records what it was asked to run.
    #[derive(Default)]
    struct FakeInvoker {
        output: Mutex<ProcessOutput>,
        calls: Mutex<Vec<Invocation>>,
    }

    impl FakeInvoker {
        fn replying(stdout: &str, stderr: &str) -> Arc<Self> {
            let invoker = Self::default();
            *invoker.output.lock() = ProcessOutput {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            };
            Arc::new(invoker)
        }

        fn calls(&self) -> Vec<Invocation> {
            self.calls.lock().clone()
        }
    }

    impl Invoker for FakeInvoker {
        fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, ValeError> {
            self.calls.lock().push(invocation.clone());
            Ok(self.output.lock().clone())
        }
    }

    struct Fixture {
        _dir: tempfile::TempDir,
        file: PathBuf,
        settings: ValeSettings,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let binary = dir.path().join("vale");
        std::fs::write(&binary, "").unwrap();
        let file = dir.path().join("f.md");
        std::fs::write(&file, DOC).unwrap();
        let settings = ValeSettings {
            vale_binary: binary.to_string_lossy().into_owned(),
            ..Default::default()
        };
        Fixture {
            _dir: dir,
            file,
            settings,
        }
    }

    fn markdown_view(fixture: &Fixture, text: &str) -> BufferView {
        BufferView::new(ViewId(1), text)
            .with_path(&fixture.file)
            .with_syntax("Markdown")
    }

    #[test]
    fn test_end_to_end_single_alert() {
        let fx = fixture();
        let invoker = FakeInvoker::replying(RESPONSE, "");
        let context = ValeContext::with_invoker(fx.settings.clone(), invoker.clone()).unwrap();
        let view = markdown_view(&fx, DOC);
        let host = RecordingHost::new();

        let outcome = context.run_lint(&view, &host, false).unwrap();
        assert_eq!(outcome, CycleOutcome::Rendered(1));

        let alerts = context.registry().alerts_for(ViewId(1));
        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(view.rowcol(alert.region.a), (2, 4));
        assert_eq!(view.rowcol(alert.region.b), (2, 9));
        assert_eq!(alert.alert.severity, Severity::Warning);
        assert!(alert.html.contains("vale-warning"));
        assert!(alert.html.contains("Warning: c"));

        let commands = host.take();
        assert!(matches!(
            &commands[..],
            [HostCommand::AddRegions { layer, alerts, .. }] if layer == REGION_LAYER && alerts.len() == 1
        ));
    }

    #[test]
    fn test_invocation_arguments() {
        let fx = fixture();
        let invoker = FakeInvoker::replying("{}", "");
        let context = ValeContext::with_invoker(fx.settings.clone(), invoker.clone()).unwrap();
        let view = markdown_view(&fx, DOC);

        context.run_lint(&view, &RecordingHost::new(), false).unwrap();

        let calls = invoker.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].args,
            vec![OsString::from("--output=JSON"), OsString::from("--ext=.md")]
        );
        assert_eq!(calls[0].cwd.as_deref(), fx.file.parent());
        assert_eq!(calls[0].stdin.as_deref(), Some(DOC));
    }

    #[test]
    fn test_restricted_scope_sends_paragraph_and_offsets_rows() {
        let fx = fixture();
        let text = "Intro.\n\nPara line one.\nPara line two.\n";
        let response = r#"{"f.md": [{"Line":2,"Span":[1,4],"Severity":"error","Message":"m","Check":"c"}]}"#;
        let invoker = FakeInvoker::replying(response, "");
        let settings = ValeSettings {
            vale_threshold: 2,
            ..fx.settings.clone()
        };
        let context = ValeContext::with_invoker(settings, invoker.clone()).unwrap();
        let view = markdown_view(&fx, text);
        let view = view.clone().with_caret(view.text_point(3, 2));

        let outcome = context.run_lint(&view, &RecordingHost::new(), false).unwrap();
        assert_eq!(outcome, CycleOutcome::Rendered(1));
        assert_eq!(
            invoker.calls()[0].stdin.as_deref(),
            Some("Para line one.\nPara line two.\n")
        );

        let alert = &context.registry().alerts_for(ViewId(1))[0];
        assert_eq!(view.substr(alert.region), "Para");
        assert_eq!(view.rowcol(alert.region.a), (3, 0));
    }

    #[test]
    fn test_restricted_cycle_from_load_is_discarded() {
        let fx = fixture();
        let invoker = FakeInvoker::replying(RESPONSE, "");
        let settings = ValeSettings {
            vale_threshold: 1,
            ..fx.settings.clone()
        };
        let context = ValeContext::with_invoker(settings, invoker).unwrap();
        let view = markdown_view(&fx, DOC);
        let host = RecordingHost::new();

        let outcome = context.run_lint(&view, &host, true).unwrap();
        assert_eq!(outcome, CycleOutcome::Discarded);
        assert!(context.registry().is_empty());
        assert!(host.take().is_empty());
    }

    #[test]
    fn test_full_buffer_cycle_from_load_renders() {
        let fx = fixture();
        let invoker = FakeInvoker::replying(RESPONSE, "");
        let context = ValeContext::with_invoker(fx.settings.clone(), invoker).unwrap();
        let view = markdown_view(&fx, DOC);

        let outcome = context.run_lint(&view, &RecordingHost::new(), true).unwrap();
        assert_eq!(outcome, CycleOutcome::Rendered(1));
    }

    #[test]
    fn test_stderr_aborts_cycle_after_clear() {
        let fx = fixture();
        let context =
            ValeContext::with_invoker(fx.settings.clone(), FakeInvoker::replying(RESPONSE, ""))
                .unwrap();
        let view = markdown_view(&fx, DOC);
        let host = RecordingHost::new();
        context.run_lint(&view, &host, false).unwrap();
        assert_eq!(context.registry().len(), 1);

        let failing =
            ValeContext::with_invoker(fx.settings.clone(), FakeInvoker::replying("", "E100 boom"))
                .unwrap();
        failing.registry().register(context.registry().alerts_for(ViewId(1))[0].clone());
        failing.clear(&host);
        host.take();

        let err = failing.run_lint(&view, &host, false).unwrap_err();
        assert!(matches!(err, ValeError::Invocation(ref m) if m == "E100 boom"));
        assert!(failing.registry().alerts_for(ViewId(1)).is_empty());
        assert!(host.take().is_empty());
    }

    #[test]
    fn test_whitespace_only_stderr_still_aborts() {
        let fx = fixture();
        let context =
            ValeContext::with_invoker(fx.settings.clone(), FakeInvoker::replying(RESPONSE, "\n"))
                .unwrap();
        let view = markdown_view(&fx, DOC);
        let host = RecordingHost::new();

        let err = context.run_lint(&view, &host, false).unwrap_err();
        assert!(matches!(err, ValeError::Invocation(_)));
        assert!(context.registry().is_empty());
        assert!(host.take().is_empty());
    }

    #[test]
    fn test_decode_error_changes_nothing() {
        let fx = fixture();
        let context =
            ValeContext::with_invoker(fx.settings.clone(), FakeInvoker::replying("not json", ""))
                .unwrap();
        let view = markdown_view(&fx, DOC);
        let host = RecordingHost::new();

        assert!(matches!(
            context.run_lint(&view, &host, false),
            Err(ValeError::Decode(_))
        ));
        assert_eq!(context.lint(&view, &host, false), None);
        assert!(host.take().is_empty());
    }

    #[test]
    fn test_scratch_and_unsaved_views_are_skipped() {
        let fx = fixture();
        let invoker = FakeInvoker::replying(RESPONSE, "");
        let context = ValeContext::with_invoker(fx.settings.clone(), invoker.clone()).unwrap();
        let host = RecordingHost::new();

        let unsaved = BufferView::new(ViewId(1), DOC);
        let scratch = markdown_view(&fx, DOC).with_scratch(true);

        assert_eq!(context.run_lint(&unsaved, &host, false).unwrap(), CycleOutcome::Skipped);
        assert_eq!(context.run_lint(&scratch, &host, false).unwrap(), CycleOutcome::Skipped);
        assert!(invoker.calls().is_empty());
    }

    #[test]
    fn test_modified_clears_and_background_relints() {
        let fx = fixture();
        let settings = ValeSettings {
            vale_mode: LintMode::Background,
            ..fx.settings.clone()
        };
        let context = ValeContext::with_invoker(settings, FakeInvoker::replying(RESPONSE, "")).unwrap();
        let view = markdown_view(&fx, DOC);
        let host = RecordingHost::new();

        let outcome = context.handle_event(&view, &host, EditorEvent::Modified);
        assert!(outcome.cleared);
        assert_eq!(outcome.cycle, Some(CycleOutcome::Rendered(1)));
    }

    #[test]
    fn test_modified_in_save_mode_only_clears() {
        let fx = fixture();
        let settings = ValeSettings {
            vale_mode: LintMode::Save,
            ..fx.settings.clone()
        };
        let invoker = FakeInvoker::replying(RESPONSE, "");
        let context = ValeContext::with_invoker(settings, invoker.clone()).unwrap();
        let view = markdown_view(&fx, DOC);
        let host = RecordingHost::new();

        context.run_lint(&view, &host, false).unwrap();
        let outcome = context.handle_event(&view, &host, EditorEvent::Modified);

        assert!(outcome.cleared);
        assert_eq!(outcome.cycle, None);
        assert!(context.registry().is_empty());
        assert_eq!(invoker.calls().len(), 1);
    }

    #[test]
    fn test_unsupported_syntax_is_not_linted() {
        let fx = fixture();
        let invoker = FakeInvoker::replying(RESPONSE, "");
        let context = ValeContext::with_invoker(fx.settings.clone(), invoker.clone()).unwrap();
        let view = markdown_view(&fx, DOC).with_syntax("Rust");

        let outcome = context.handle_event(&view, &RecordingHost::new(), EditorEvent::PreSave);
        assert_eq!(outcome.cycle, None);
        assert!(invoker.calls().is_empty());
    }

    #[test]
    fn test_hover_popup_and_status_bar() {
        let fx = fixture();
        let context =
            ValeContext::with_invoker(fx.settings.clone(), FakeInvoker::replying(RESPONSE, ""))
                .unwrap();
        let view = markdown_view(&fx, DOC);
        let host = RecordingHost::new();
        context.run_lint(&view, &host, false).unwrap();
        host.take();

        let point = view.text_point(2, 5);
        let outcome = context.handle_event(&view, &host, EditorEvent::HoverQueried(point));
        match outcome.hover {
            Some(HoverReply::Popup(popup)) => {
                assert_eq!(popup.location, point);
                assert_eq!(popup.max_width, 450);
            }
            other => panic!("expected popup, got {:?}", other),
        }
        assert!(context.hover(ViewId(1), &host, 0).is_none());

        context
            .reload(ValeSettings {
                vale_alert_location: AlertLocation::HoverStatusBar,
                ..fx.settings.clone()
            })
            .unwrap();
        host.take();
        let reply = context.hover(ViewId(1), &host, point);
        assert_eq!(reply, Some(HoverReply::Status("vale:warning:m".to_string())));
        assert_eq!(host.take(), vec![HostCommand::StatusMessage("vale:warning:m".to_string())]);
    }

    #[test]
    fn test_stale_cycle_does_not_overwrite() {
        let fx = fixture();
        let context =
            ValeContext::with_invoker(fx.settings.clone(), FakeInvoker::replying(RESPONSE, ""))
                .unwrap();
        let view = markdown_view(&fx, DOC);
        let host = RecordingHost::new();

        let earlier = context.registry().begin_cycle(ViewId(1));
        context.run_lint(&view, &host, false).unwrap();
        assert!(!context.registry().commit(
            earlier,
            Vec::new(),
            &host,
            &context.settings().region_style()
        ));
        assert_eq!(context.registry().len(), 1);
    }

    #[test]
    fn test_missing_binary_reported_once() {
        let settings = ValeSettings {
            vale_binary: "/definitely/not/vale".to_string(),
            ..Default::default()
        };
        let context = ValeContext::with_invoker(settings, Arc::new(FakeInvoker::default())).unwrap();
        let host = RecordingHost::new();

        assert!(!context.check_environment(&host));
        assert!(!context.check_environment(&host));
        assert_eq!(host.take(), vec![HostCommand::ErrorMessage(NO_VALE_ERR.to_string())]);
        assert!(matches!(context.binary_path(), Err(ValeError::BinaryNotFound(_))));
    }

    #[test]
    fn test_new_rule_rejects_unknown_point() {
        let fx = fixture();
        let invoker = FakeInvoker::replying("extends: existence\n", "");
        let context = ValeContext::with_invoker(fx.settings.clone(), invoker.clone()).unwrap();

        assert!(matches!(context.new_rule("spelling"), Err(ValeError::Config(_))));
        assert!(invoker.calls().is_empty());

        assert_eq!(context.new_rule("existence").unwrap(), "extends: existence\n");
        assert_eq!(
            invoker.calls()[0].args,
            vec![OsString::from("new"), OsString::from("existence")]
        );
    }

    #[test]
    fn test_list_styles_and_rules_via_ls_config() {
        let fx = fixture();
        let styles = fx.file.parent().unwrap().join("styles");
        std::fs::create_dir_all(styles.join("Demo")).unwrap();
        std::fs::write(styles.join("Demo/Hedging.yml"), "").unwrap();
        let config = serde_json::json!({ "StylesPath": styles }).to_string();
        let context =
            ValeContext::with_invoker(fx.settings.clone(), FakeInvoker::replying(&config, ""))
                .unwrap();

        assert_eq!(context.list_styles(None).unwrap(), vec!["Demo".to_string()]);
        let rules = context.list_rules(None, "Demo").unwrap();
        assert_eq!(rules, vec![styles.join("Demo/Hedging.yml")]);
    }

    #[test]
    fn test_missing_styles_path_is_config_error() {
        let fx = fixture();
        let context = ValeContext::with_invoker(
            fx.settings.clone(),
            FakeInvoker::replying(r#"{"StylesPath": ""}"#, ""),
        )
        .unwrap();
        assert!(matches!(context.list_styles(None), Err(ValeError::Config(_))));
    }

    #[test]
    fn test_region_is_recorded_with_view() {
        let fx = fixture();
        let context =
            ValeContext::with_invoker(fx.settings.clone(), FakeInvoker::replying(RESPONSE, ""))
                .unwrap();
        let view = markdown_view(&fx, DOC);
        context.run_lint(&view, &RecordingHost::new(), false).unwrap();

        let start = view.text_point(2, 4);
        assert_eq!(
            context.registry().alerts_for(ViewId(1))[0].region,
            Region::new(start, start + 5)
        );
    }
}
