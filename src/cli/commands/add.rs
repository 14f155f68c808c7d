//! Add command implementation.
//!
//! `my-ui add components <name>` and `my-ui add layout <name>` add a registry
//! entry directly. Plain `my-ui add` asks what to add and picks the name from
//! the registry.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::cli::args::{AddArgs, AddTarget, AddType};
use crate::config::ensure_initialized;
use crate::error::{MyUiError, Result};
use crate::install::PackageInstaller;
use crate::materialize::{
    resolve_app_dir, validate_layout_path, ConflictPolicy, PromptOverwrite, DEFAULT_APP_FOLDER,
};
use crate::registry::{Registry, TemplateSource};
use crate::scaffold::{ScaffoldPlan, ScaffoldReport, Scaffolder};
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::display::{display_path, install_with_progress, show_scaffold_report, warn_conflicts};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").expect("valid name regex"));

/// Check a component or layout name before it is looked up.
pub fn validate_name(name: &str) -> Result<()> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(MyUiError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Options for one layout addition.
#[derive(Debug, Clone, Default)]
struct LayoutRequest<'a> {
    name: &'a str,
    provider: Option<&'a str>,
    path: Option<&'a str>,
    policy: ConflictPolicy,
}

/// The add command implementation.
pub struct AddCommand {
    ctx: CommandContext,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(ctx: CommandContext, args: AddArgs) -> Self {
        Self { ctx, args }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.ctx.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &AddArgs {
        &self.args
    }

    /// Run the command with an explicit installer.
    pub fn run(
        &self,
        ui: &mut dyn UserInterface,
        installer: &mut dyn PackageInstaller,
    ) -> Result<CommandResult> {
        ensure_initialized(&self.ctx.project_root)?;

        let templates = self.ctx.template_source();
        let registry = self.ctx.registry(templates.as_ref())?;
        registry.validate(templates.as_ref())?;

        let report = match &self.args.target {
            Some(AddTarget::Components(args)) => {
                let policy = ConflictPolicy::new(
                    args.overwrite || self.args.overwrite,
                    args.yes || self.args.yes,
                );
                self.add_component(ui, installer, &registry, templates.as_ref(), &args.name, policy)?
            }
            Some(AddTarget::Layout(args)) => {
                let request = LayoutRequest {
                    name: &args.name,
                    provider: args.provider.as_deref(),
                    path: args.path.as_deref(),
                    policy: ConflictPolicy::new(
                        args.overwrite || self.args.overwrite,
                        args.yes || self.args.yes,
                    ),
                };
                self.add_layout(ui, installer, &registry, templates.as_ref(), request)?
            }
            None => {
                let policy = ConflictPolicy::new(self.args.overwrite, self.args.yes);
                let add_type = match self.args.add_type {
                    Some(add_type) => add_type,
                    None => ask_type(ui)?,
                };
                let Some(name) = ask_name(ui, &registry, add_type)? else {
                    return Ok(CommandResult::failure(1));
                };

                match add_type {
                    AddType::Components => self.add_component(
                        ui,
                        installer,
                        &registry,
                        templates.as_ref(),
                        &name,
                        policy,
                    )?,
                    AddType::Layout => self.add_layout(
                        ui,
                        installer,
                        &registry,
                        templates.as_ref(),
                        LayoutRequest {
                            name: &name,
                            policy,
                            ..LayoutRequest::default()
                        },
                    )?,
                }
            }
        };

        tracing::debug!(item = %report.target, complete = report.is_complete(), "add finished");
        Ok(CommandResult::success())
    }

    fn add_component(
        &self,
        ui: &mut dyn UserInterface,
        installer: &mut dyn PackageInstaller,
        registry: &Registry,
        templates: &dyn TemplateSource,
        name: &str,
        policy: ConflictPolicy,
    ) -> Result<ScaffoldReport> {
        validate_name(name)?;

        let root = &self.ctx.project_root;
        let mut scaffolder = Scaffolder::new(registry, templates, installer, root);
        let plan = scaffolder.plan_component(name)?;

        ui.message(&format!("Adding {} component...", plan.target));
        self.install(ui, &mut scaffolder, &plan)?;

        let report = {
            let mut confirm = PromptOverwrite::new(ui);
            scaffolder.apply(&plan, root, policy, &mut confirm)?
        };
        show_scaffold_report(ui, root, &report);
        Ok(report)
    }

    fn add_layout(
        &self,
        ui: &mut dyn UserInterface,
        installer: &mut dyn PackageInstaller,
        registry: &Registry,
        templates: &dyn TemplateSource,
        request: LayoutRequest<'_>,
    ) -> Result<ScaffoldReport> {
        validate_name(request.name)?;

        let root = &self.ctx.project_root;
        let layout = registry.lookup_layout(request.name)?;

        let provider = match request.provider {
            Some(provider) => Some(provider.to_string()),
            None if layout.providers.len() > 1 && !request.policy.auto_yes => Some(
                ui.prompt(&Prompt::select(
                    "provider",
                    "Select a provider for the layout:",
                    layout
                        .provider_names()
                        .into_iter()
                        .map(PromptOption::plain)
                        .collect(),
                ))?
                .as_string(),
            ),
            None => None,
        };

        let mut scaffolder = Scaffolder::new(registry, templates, installer, root);
        let plan = scaffolder.plan_layout(request.name, provider.as_deref())?;
        if let Some((_, provider)) = plan.provider {
            ui.message(&format!("Selected provider: {}", provider.name));
        }

        let sub_path = layout_sub_path(ui, &request)?;
        let auto_yes = request.policy.auto_yes;
        let app_dir = resolve_app_dir(root, || ask_app_folder(ui, auto_yes))?;
        let dest = app_dir.join(sub_path);

        self.install(ui, &mut scaffolder, &plan)?;

        let report = {
            let mut confirm = PromptOverwrite::new(ui);
            scaffolder.apply(&plan, &dest, request.policy, &mut confirm)?
        };
        show_scaffold_report(ui, root, &report);
        if report.is_complete() {
            ui.message(&format!(
                "Layout \"{}\" added to {}",
                request.name,
                display_path(root, &dest)
            ));
        }
        Ok(report)
    }

    fn install<I: PackageInstaller>(
        &self,
        ui: &mut dyn UserInterface,
        scaffolder: &mut Scaffolder<'_, I>,
        plan: &ScaffoldPlan<'_>,
    ) -> Result<()> {
        warn_conflicts(ui, &plan.conflicts());
        install_with_progress(ui, plan.packages.as_slice(), self.ctx.no_install, || {
            scaffolder.install(plan).map(|_| ())
        })
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut installer = self.ctx.installer();
        self.run(ui, installer.as_mut())
    }
}

fn ask_type(ui: &mut dyn UserInterface) -> Result<AddType> {
    let answer = ui
        .prompt(&Prompt::select(
            "add_type",
            "What would you like to add?",
            vec![
                PromptOption {
                    label: "Component - UI component".to_string(),
                    value: "components".to_string(),
                },
                PromptOption {
                    label: "Layout - Layout with components".to_string(),
                    value: "layout".to_string(),
                },
            ],
        ))?
        .as_string();

    Ok(match answer.as_str() {
        "layout" => AddType::Layout,
        _ => AddType::Components,
    })
}

/// Pick a name from the registry. `None` when the registry has nothing of
/// that kind.
fn ask_name(
    ui: &mut dyn UserInterface,
    registry: &Registry,
    add_type: AddType,
) -> Result<Option<String>> {
    let (names, question, empty) = match add_type {
        AddType::Components => (
            registry.component_names(),
            "Select a component to add:",
            "No components found in registry",
        ),
        AddType::Layout => (
            registry.layout_names(),
            "Select a layout to add:",
            "No layouts found in registry",
        ),
    };

    if names.is_empty() {
        ui.error(empty);
        return Ok(None);
    }

    let options = names.into_iter().map(PromptOption::plain).collect();
    let name = ui.prompt(&Prompt::select("name", question, options))?.as_string();
    Ok(Some(name))
}

fn ask_app_folder(ui: &mut dyn UserInterface, auto_yes: bool) -> Result<Option<String>> {
    if auto_yes {
        return Ok(Some(DEFAULT_APP_FOLDER.to_string()));
    }

    let answer = ui.prompt(&Prompt::input(
        "app_folder",
        "Neither 'src/app' nor 'app' directory exists. Please provide a folder name to create:",
        Some(DEFAULT_APP_FOLDER),
    ))?;
    Ok(Some(answer.as_string()))
}

/// Path under the app directory that receives the provider's files.
///
/// Checked before the app directory is looked up, so a rejected path never
/// creates one.
fn layout_sub_path(ui: &mut dyn UserInterface, request: &LayoutRequest<'_>) -> Result<PathBuf> {
    let sub_path = match request.path {
        Some(path) => path.to_string(),
        None if request.policy.auto_yes => request.name.to_string(),
        None => {
            let answer = ui
                .prompt(&Prompt::input(
                    "layout_path",
                    &format!(
                        "Enter the path where you want to add the layout (e.g., auth/login) (default: {}):",
                        request.name
                    ),
                    Some(request.name),
                ))?
                .as_string();
            if answer.trim().is_empty() {
                request.name.to_string()
            } else {
                answer
            }
        }
    };

    validate_layout_path(&sub_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{AddComponentArgs, AddLayoutArgs};
    use crate::config::ProjectConfig;
    use crate::install::RecordingInstaller;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn initialized_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        ProjectConfig::initialized_default().save(temp.path()).unwrap();
        temp
    }

    fn command(temp: &TempDir, args: AddArgs) -> AddCommand {
        AddCommand::new(CommandContext::new(temp.path()), args)
    }

    fn add_component(name: &str) -> AddArgs {
        AddArgs {
            target: Some(AddTarget::Components(AddComponentArgs {
                name: name.to_string(),
                ..Default::default()
            })),
            ..Default::default()
        }
    }

    fn add_layout(args: AddLayoutArgs) -> AddArgs {
        AddArgs {
            target: Some(AddTarget::Layout(args)),
            ..Default::default()
        }
    }

    #[test]
    fn validate_name_accepts_kebab_case() {
        assert!(validate_name("button").is_ok());
        assert!(validate_name("my-button-2").is_ok());
    }

    #[test]
    fn validate_name_rejects_bad_names() {
        for name in ["Button", "2button", "my_button", "", "-button", "../button"] {
            let err = validate_name(name).unwrap_err();
            assert!(matches!(err, MyUiError::InvalidName { .. }), "{}", name);
        }
    }

    #[test]
    fn add_requires_initialized_project() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp, add_component("button"));
        let mut ui = MockUI::new();
        let mut installer = RecordingInstaller::new();

        let err = cmd.run(&mut ui, &mut installer).unwrap_err();

        assert!(matches!(err, MyUiError::NotInitialized { .. }));
        assert!(installer.calls().is_empty());
        assert!(!temp.path().join("components").exists());
    }

    #[test]
    fn add_component_writes_closure() {
        let temp = initialized_project();
        let cmd = command(&temp, add_component("button"));
        let mut ui = MockUI::new();
        let mut installer = RecordingInstaller::new();

        let result = cmd.run(&mut ui, &mut installer).unwrap();

        assert!(result.success);
        assert!(temp.path().join("components/ui/button.tsx").is_file());
        assert!(temp.path().join("components/ui/slot.tsx").is_file());
        assert_eq!(installer.calls().len(), 1);
        assert!(ui.has_success("Added button"));
    }

    #[test]
    fn add_component_rejects_invalid_name_without_io() {
        let temp = initialized_project();
        let cmd = command(&temp, add_component("Button"));
        let mut ui = MockUI::new();
        let mut installer = RecordingInstaller::new();

        let err = cmd.run(&mut ui, &mut installer).unwrap_err();

        assert!(matches!(err, MyUiError::InvalidName { .. }));
        assert!(installer.calls().is_empty());
        assert!(!temp.path().join("components").exists());
    }

    #[test]
    fn add_unknown_component_is_not_found() {
        let temp = initialized_project();
        let cmd = command(&temp, add_component("carousel"));
        let mut ui = MockUI::new();

        let err = cmd.run(&mut ui, &mut RecordingInstaller::new()).unwrap_err();

        assert!(matches!(err, MyUiError::NotFound { .. }));
    }

    #[test]
    fn add_component_declined_overwrite_keeps_file() {
        let temp = initialized_project();
        let ui_dir = temp.path().join("components/ui");
        fs::create_dir_all(&ui_dir).unwrap();
        fs::write(ui_dir.join("card.tsx"), "// mine").unwrap();

        let cmd = command(&temp, add_component("card"));
        let mut ui = MockUI::new();
        ui.set_prompt_response("overwrite", "no");

        cmd.run(&mut ui, &mut RecordingInstaller::new()).unwrap();

        assert_eq!(fs::read_to_string(ui_dir.join("card.tsx")).unwrap(), "// mine");
        assert!(ui.has_message("Skipping existing file card.tsx"));
    }

    #[test]
    fn add_component_overwrite_flag_replaces_file() {
        let temp = initialized_project();
        let ui_dir = temp.path().join("components/ui");
        fs::create_dir_all(&ui_dir).unwrap();
        fs::write(ui_dir.join("card.tsx"), "// mine").unwrap();

        let cmd = command(
            &temp,
            AddArgs {
                target: Some(AddTarget::Components(AddComponentArgs {
                    name: "card".to_string(),
                    overwrite: true,
                    yes: false,
                })),
                ..Default::default()
            },
        );
        let mut ui = MockUI::new();

        cmd.run(&mut ui, &mut RecordingInstaller::new()).unwrap();

        assert_ne!(fs::read_to_string(ui_dir.join("card.tsx")).unwrap(), "// mine");
        assert!(!ui.prompts_shown().contains(&"overwrite".to_string()));
    }

    #[test]
    fn escaped_overwrite_stops_cleanly() {
        let temp = initialized_project();
        let ui_dir = temp.path().join("components/ui");
        fs::create_dir_all(&ui_dir).unwrap();
        fs::write(ui_dir.join("slot.tsx"), "// mine").unwrap();

        let cmd = command(&temp, add_component("button"));
        let mut ui = MockUI::new();
        ui.cancel_prompt("overwrite");

        let result = cmd.run(&mut ui, &mut RecordingInstaller::new()).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("Stopped while adding slot"));
        assert!(!ui_dir.join("button.tsx").exists());
    }

    #[test]
    fn add_layout_into_existing_app_dir() {
        let temp = initialized_project();
        fs::create_dir_all(temp.path().join("app")).unwrap();

        let cmd = command(
            &temp,
            add_layout(AddLayoutArgs {
                name: "login".to_string(),
                provider: Some("simple".to_string()),
                path: Some("auth/login".to_string()),
                ..Default::default()
            }),
        );
        let mut ui = MockUI::new();
        let mut installer = RecordingInstaller::new();

        cmd.run(&mut ui, &mut installer).unwrap();

        let dest = temp.path().join("app/auth/login");
        assert!(dest.join("page.tsx").is_file());
        assert!(temp.path().join("components/ui/card.tsx").is_file());
        assert!(ui.has_message("Selected provider: simple"));
        assert!(ui.has_message("Layout \"login\" added to app/auth/login"));
        assert_eq!(installer.calls().len(), 1);
    }

    #[test]
    fn add_layout_prompts_for_provider_and_path() {
        let temp = initialized_project();
        fs::create_dir_all(temp.path().join("src")).unwrap();

        let cmd = command(
            &temp,
            add_layout(AddLayoutArgs {
                name: "login".to_string(),
                ..Default::default()
            }),
        );
        let mut ui = MockUI::new();
        ui.set_prompt_response("provider", "microsoft");
        ui.set_prompt_response("layout_path", "signin");

        cmd.run(&mut ui, &mut RecordingInstaller::new()).unwrap();

        assert!(temp.path().join("src/app/signin/page.tsx").is_file());
        assert_eq!(ui.prompts_shown(), &["provider", "layout_path"]);
    }

    #[test]
    fn add_layout_yes_uses_defaults() {
        let temp = initialized_project();

        let cmd = command(
            &temp,
            add_layout(AddLayoutArgs {
                name: "login".to_string(),
                yes: true,
                ..Default::default()
            }),
        );
        let mut ui = MockUI::new();

        cmd.run(&mut ui, &mut RecordingInstaller::new()).unwrap();

        assert!(temp.path().join("app/login/page.tsx").is_file());
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn add_layout_asks_for_app_folder() {
        let temp = initialized_project();

        let cmd = command(
            &temp,
            add_layout(AddLayoutArgs {
                name: "login".to_string(),
                provider: Some("simple".to_string()),
                path: Some("login".to_string()),
                ..Default::default()
            }),
        );
        let mut ui = MockUI::new();
        ui.set_prompt_response("app_folder", "pages");

        cmd.run(&mut ui, &mut RecordingInstaller::new()).unwrap();

        assert!(temp.path().join("pages/login/page.tsx").is_file());
    }

    #[test]
    fn add_layout_rejects_escaping_path() {
        let temp = initialized_project();
        fs::create_dir_all(temp.path().join("app")).unwrap();

        let cmd = command(
            &temp,
            add_layout(AddLayoutArgs {
                name: "login".to_string(),
                provider: Some("simple".to_string()),
                path: Some("../../outside".to_string()),
                ..Default::default()
            }),
        );
        let mut ui = MockUI::new();
        let mut installer = RecordingInstaller::new();

        let err = cmd.run(&mut ui, &mut installer).unwrap_err();

        assert!(matches!(err, MyUiError::InvalidLayoutPath { .. }));
        assert!(installer.calls().is_empty());
    }

    #[test]
    fn rejected_layout_path_creates_no_app_dir() {
        let temp = initialized_project();
        fs::create_dir_all(temp.path().join("src")).unwrap();

        let cmd = command(
            &temp,
            add_layout(AddLayoutArgs {
                name: "login".to_string(),
                provider: Some("simple".to_string()),
                path: Some("../x".to_string()),
                ..Default::default()
            }),
        );
        let mut ui = MockUI::new();

        let err = cmd.run(&mut ui, &mut RecordingInstaller::new()).unwrap_err();

        assert!(matches!(err, MyUiError::InvalidLayoutPath { .. }));
        assert!(!temp.path().join("src/app").exists());
        assert!(!temp.path().join("x").exists());
    }

    #[test]
    fn add_layout_unknown_provider() {
        let temp = initialized_project();
        let cmd = command(
            &temp,
            add_layout(AddLayoutArgs {
                name: "login".to_string(),
                provider: Some("google".to_string()),
                ..Default::default()
            }),
        );
        let mut ui = MockUI::new();

        let err = cmd.run(&mut ui, &mut RecordingInstaller::new()).unwrap_err();

        assert!(matches!(err, MyUiError::ProviderNotFound { .. }));
        assert!(!temp.path().join("app").exists());
    }

    #[test]
    fn interactive_add_selects_type_and_name() {
        let temp = initialized_project();
        let cmd = command(&temp, AddArgs::default());
        let mut ui = MockUI::new();
        ui.set_prompt_response("add_type", "components");
        ui.set_prompt_response("name", "input");

        cmd.run(&mut ui, &mut RecordingInstaller::new()).unwrap();

        assert!(temp.path().join("components/ui/input.tsx").is_file());
        assert_eq!(ui.prompts_shown(), &["add_type", "name"]);
    }

    #[test]
    fn interactive_add_with_type_flag_skips_type_prompt() {
        let temp = initialized_project();
        fs::create_dir_all(temp.path().join("app")).unwrap();
        let cmd = command(
            &temp,
            AddArgs {
                add_type: Some(AddType::Layout),
                yes: true,
                ..Default::default()
            },
        );
        let mut ui = MockUI::new();
        ui.set_prompt_response("name", "login");

        cmd.run(&mut ui, &mut RecordingInstaller::new()).unwrap();

        assert!(temp.path().join("app/login/page.tsx").is_file());
        assert_eq!(ui.prompts_shown(), &["name"]);
    }
}
