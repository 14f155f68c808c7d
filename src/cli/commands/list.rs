//! List command implementation.
//!
//! The `my-ui list` command lists the components and layouts in the registry.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::{MyUiError, Result};
use crate::registry::Registry;
use crate::ui::theme::MyUiTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// JSON shape of `my-ui list --json`.
#[derive(Debug, Serialize)]
struct Listing<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<Vec<ComponentEntry<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layouts: Option<Vec<LayoutEntry<'a>>>,
}

#[derive(Debug, Serialize)]
struct ComponentEntry<'a> {
    name: &'a str,
    files: Vec<String>,
    prerequisites: &'a [String],
    dependencies: &'a [String],
}

#[derive(Debug, Serialize)]
struct LayoutEntry<'a> {
    name: &'a str,
    providers: Vec<ProviderEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ProviderEntry<'a> {
    name: &'a str,
    prerequisites: &'a [String],
    dependencies: &'a [String],
}

impl<'a> Listing<'a> {
    fn new(registry: &'a Registry, args: &ListArgs) -> Self {
        let components = (!args.layouts_only).then(|| {
            registry
                .components()
                .iter()
                .map(|c| ComponentEntry {
                    name: &c.name,
                    files: c
                        .files
                        .iter()
                        .map(|f| f.relative_file().to_string_lossy().into_owned())
                        .collect(),
                    prerequisites: &c.prerequisites,
                    dependencies: &c.dependencies,
                })
                .collect()
        });

        let layouts = (!args.components_only).then(|| {
            registry
                .layouts()
                .iter()
                .map(|l| LayoutEntry {
                    name: &l.name,
                    providers: l
                        .providers
                        .iter()
                        .map(|p| ProviderEntry {
                            name: &p.name,
                            prerequisites: &p.prerequisites,
                            dependencies: &p.dependencies,
                        })
                        .collect(),
                })
                .collect()
        });

        Self {
            components,
            layouts,
        }
    }
}

/// The list command implementation.
pub struct ListCommand {
    ctx: CommandContext,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(ctx: CommandContext, args: ListArgs) -> Self {
        Self { ctx, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn show(&self, ui: &mut dyn UserInterface, registry: &Registry) {
        let theme = MyUiTheme::detect();

        if !self.args.layouts_only {
            ui.message(&format!("  {}", theme.key.apply_to("Components:")));
            for component in registry.components() {
                let detail = if component.prerequisites.is_empty() {
                    String::new()
                } else {
                    format!(
                        " {}",
                        theme
                            .dim
                            .apply_to(format!("(requires: {})", component.prerequisites.join(", ")))
                    )
                };
                ui.message(&format!(
                    "    {}{}",
                    theme.highlight.apply_to(&component.name),
                    detail
                ));

                if !component.dependencies.is_empty() {
                    ui.message(&format!(
                        "      {} {}",
                        theme.dim.apply_to("└── packages:"),
                        theme.dim.apply_to(component.dependencies.join(", "))
                    ));
                }
            }

            if !self.args.components_only {
                ui.message("");
            }
        }

        if !self.args.components_only {
            ui.message(&format!("  {}", theme.key.apply_to("Layouts:")));
            for layout in registry.layouts() {
                ui.message(&format!(
                    "    {}{} {}",
                    theme.highlight.apply_to(&layout.name),
                    theme.dim.apply_to(":"),
                    theme.dim.apply_to(layout.provider_names().join(" | ")),
                ));

                for provider in &layout.providers {
                    if !provider.prerequisites.is_empty() {
                        ui.message(&format!(
                            "      {} {}",
                            theme.dim.apply_to(format!("└── {} uses:", provider.name)),
                            theme.dim.apply_to(provider.prerequisites.join(", "))
                        ));
                    }
                }
            }
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let templates = self.ctx.template_source();
        let registry = self.ctx.registry(templates.as_ref())?;

        if self.args.json {
            let listing = Listing::new(&registry, &self.args);
            let json = serde_json::to_string_pretty(&listing)
                .map_err(|e| MyUiError::Other(e.into()))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        self.show(ui, &registry);
        Ok(CommandResult::success())
    }
}
