//! Human-readable terminal renderer.

use std::collections::BTreeMap;

use owo_colors::OwoColorize as _;

use crate::domain::MachineRecord;
use crate::output::OutputContext;

/// Table headings, in `docker-machine ls` order.
pub const TABLE_HEADINGS: [&str; 8] = [
    "NAME", "ACTIVE", "DRIVER", "STATE", "URL", "SWARM", "DOCKER", "ERRORS",
];

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the machine listing as an aligned table.
    pub fn render_machines(&self, machines: &[MachineRecord]) {
        if machines.is_empty() {
            self.ctx.info("No machines. Create one: machine create --driver <driver> <name>");
            return;
        }

        let rows: Vec<[String; 8]> = machines.iter().map(table_row).collect();
        let widths = column_widths(&rows);
        let styles = &self.ctx.styles;

        let heading = TABLE_HEADINGS
            .iter()
            .zip(widths)
            .map(|(h, w)| format!("{h:<w$}"))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", heading.trim_end().style(styles.header));

        for (row, machine) in rows.iter().zip(machines) {
            let state_style = styles.state(machine.state.as_deref().unwrap_or_default());
            let line = row
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    let padded = format!("{cell:<w$}");
                    if i == 3 {
                        padded.style(state_style).to_string()
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            println!("{}", line.trim_end());
        }
    }

    /// Render a machine's state as `name  state`.
    pub fn render_state(&self, name: &str, state: &str) {
        println!("{name}  {}", state.style(self.ctx.styles.state(state)));
    }

    /// Render parsed environment variables as `KEY=VALUE` lines.
    pub fn render_variables(&self, vars: &BTreeMap<String, String>) {
        for (key, value) in vars {
            println!("{}={value}", key.style(self.ctx.styles.dim));
        }
    }
}

/// The plain-text cells of one table row.
#[must_use]
pub fn table_row(machine: &MachineRecord) -> [String; 8] {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    [
        machine.name.clone(),
        text(&machine.active),
        text(&machine.driver_name),
        text(&machine.state),
        text(&machine.url),
        text(&machine.swarm),
        text(&machine.docker_version),
        text(&machine.error),
    ]
}

/// Width of each column: the longest cell or heading, counted in chars.
#[must_use]
pub fn column_widths(rows: &[[String; 8]]) -> [usize; 8] {
    let mut widths = TABLE_HEADINGS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}
