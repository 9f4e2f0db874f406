//! Step-wizard controller: one visible section at a time over an ordered
//! subset of the panel's collapsible sections.

use super::PanelCommand;
use serde::{Deserialize, Serialize};

/// One wizard step bound to a named panel section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardStep {
    pub label: String,
    pub section: String,
}

/// Owns the step index and the section/tab bookkeeping.
///
/// Created against the full section list; dropping the controller releases
/// it (the original's `destroy()`).
#[derive(Debug)]
pub struct WizardController {
    steps: Vec<WizardStep>,
    current: usize,
}

impl WizardController {
    /// Build the controller and the commands that bring the panel into
    /// wizard mode: hide every non-member section, show the first step's
    /// section only, and sync the tab row.
    pub fn mount(
        all_sections: &[String],
        steps: Vec<WizardStep>,
    ) -> (Self, Vec<PanelCommand>) {
        let mut commands = Vec::new();
        for section in all_sections {
            let is_member = steps.iter().any(|s| &s.section == section);
            if !is_member {
                commands.push(PanelCommand::SetSectionVisible {
                    section: section.clone(),
                    visible: false,
                });
            }
        }
        let controller = Self { steps, current: 0 };
        commands.extend(controller.show_only_current());
        (controller, commands)
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Advance one step; clamps at the last step.
    pub fn next(&mut self) -> Vec<PanelCommand> {
        self.goto(self.current.saturating_add(1))
    }

    /// Go back one step; clamps at the first step.
    pub fn back(&mut self) -> Vec<PanelCommand> {
        self.goto(self.current.saturating_sub(1))
    }

    /// Jump to a step (tab click). Out-of-range indices clamp.
    pub fn goto(&mut self, index: usize) -> Vec<PanelCommand> {
        let clamped = index.min(self.steps.len().saturating_sub(1));
        if clamped == self.current {
            return Vec::new();
        }
        self.current = clamped;
        self.show_only_current()
    }

    /// Mirror the three live field values into the summary strip.
    pub fn update_summary(&self, width: u32, depth: u32, roof_style: &str) -> PanelCommand {
        PanelCommand::SetSummary {
            width,
            depth,
            roof_style: roof_style.to_string(),
        }
    }

    /// Commands showing exactly the current step's section and syncing the
    /// tab row.
    fn show_only_current(&self) -> Vec<PanelCommand> {
        let mut commands = Vec::with_capacity(self.steps.len() + 1);
        for (i, step) in self.steps.iter().enumerate() {
            commands.push(PanelCommand::SetSectionVisible {
                section: step.section.clone(),
                visible: i == self.current,
            });
        }
        commands.push(PanelCommand::SetActiveTab {
            index: self.current,
        });
        commands
    }
}
