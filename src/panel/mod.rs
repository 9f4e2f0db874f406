//! Control-panel widgets re-expressed as owned state machines.
//!
//! The original widgets lived in the page as DOM event handlers with
//! module-level mutable state. Here each controller is a plain struct owned
//! by whoever mounts it — dropping the controller is the `destroy()` of the
//! original design. Controllers emit [`PanelCommand`] values; turning a
//! command into its page-side expression is the command's own concern, and
//! the admin API applies the expressions, so the state machines are tested
//! without a browser.

pub mod resize;
pub mod wizard;

pub use resize::{DragState, ResizeBounds, ResizeController};
pub use wizard::{WizardController, WizardStep};

use serde::{Deserialize, Serialize};

/// One side effect on the panel DOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PanelCommand {
    /// Write inline width/height styles on the panel element.
    SetSize { width: u32, height: u32 },
    /// Show or hide one named collapsible section.
    SetSectionVisible { section: String, visible: bool },
    /// Highlight one tab in the step-tab row.
    SetActiveTab { index: usize },
    /// Mirror the three live field values into the summary strip.
    SetSummary {
        width: u32,
        depth: u32,
        roof_style: String,
    },
}

impl PanelCommand {
    /// The page-side expression that performs this command.
    ///
    /// The selectors are the configurator's own; missing elements are
    /// guarded with optional chaining, matching the defensive null-checks
    /// the page itself uses.
    pub fn to_expression(&self) -> String {
        match self {
            Self::SetSize { width, height } => format!(
                "(() => {{ const p = document.querySelector('#control-panel'); \
                 if (p) {{ p.style.width = '{width}px'; p.style.height = '{height}px'; }} }})()"
            ),
            Self::SetSectionVisible { section, visible } => {
                let display = if *visible { "''" } else { "'none'" };
                format!(
                    "(() => {{ const s = document.querySelector('[data-section=\"{section}\"]'); \
                     if (s) s.style.display = {display}; }})()"
                )
            }
            Self::SetActiveTab { index } => format!(
                "document.querySelectorAll('.step-tab').forEach((t, i) => \
                 t.classList.toggle('active', i === {index}))"
            ),
            Self::SetSummary {
                width,
                depth,
                roof_style,
            } => format!(
                "(() => {{ const set = (id, v) => {{ const e = document.getElementById(id); \
                 if (e) e.textContent = v; }}; \
                 set('summary-width', '{width}'); set('summary-depth', '{depth}'); \
                 set('summary-roof', '{roof_style}'); }})()"
            ),
        }
    }
}

