use std::fs::File;
use std::io::{BufWriter, Write};

use crate::{Condition, Plan, Result};

/// Writes plan sets as Graphviz DOT graphs.
///
/// Each plan becomes a cluster of action nodes chained in execution order and
/// pointing at the goal. Travel steps are drawn as ellipses, and plans with an
/// unreachable location are outlined in red.
pub struct PlanVisualizer;

impl PlanVisualizer {
    pub fn new() -> Self {
        Self
    }

    /// Writes the graph for `plans` to `filename`.
    pub fn visualize_plans(&self, goal: &Condition, plans: &[Plan], filename: &str) -> Result<()> {
        let mut file = BufWriter::new(File::create(filename)?);
        self.write_dot(goal, plans, &mut file)?;
        file.flush()?;
        Ok(())
    }

    pub fn write_dot(&self, goal: &Condition, plans: &[Plan], out: &mut impl Write) -> Result<()> {
        writeln!(out, "digraph GOAP {{")?;
        writeln!(out, "    rankdir=LR;")?;
        writeln!(out, "    node [shape=box, style=filled, fillcolor=lightblue];")?;
        writeln!(out, "    edge [fontsize=10];")?;
        writeln!(
            out,
            "    goal [label=\"Goal\\n{}\", fillcolor=lightpink];",
            escape(&goal.to_string())
        )?;

        for (p, plan) in plans.iter().enumerate() {
            writeln!(out, "    subgraph cluster_{} {{", p)?;
            writeln!(out, "        label=\"Plan {}\";", p + 1)?;
            if !plan.is_reachable() {
                writeln!(out, "        color=red;")?;
            }

            for (a, action) in plan.iter().enumerate() {
                let shape = if action.is_move() {
                    ", shape=ellipse, fillcolor=lightgrey"
                } else {
                    ""
                };
                let repeats = match action.repeat_count() {
                    1 => String::new(),
                    n => format!("\\nx{}", n),
                };
                writeln!(
                    out,
                    "        p{}_a{} [label=\"{}{}\"{}];",
                    p,
                    a,
                    escape(&action.to_string()),
                    repeats,
                    shape
                )?;
            }
            writeln!(out, "    }}")?;

            for a in 1..plan.len() {
                writeln!(out, "    p{}_a{} -> p{}_a{};", p, a - 1, p, a)?;
            }
            if !plan.is_empty() {
                writeln!(out, "    p{}_a{} -> goal;", p, plan.len() - 1)?;
            }
        }

        writeln!(out, "}}")?;
        Ok(())
    }
}

impl Default for PlanVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(label: &str) -> String {
    label.replace('"', "\\\"")
}
