//! Plain-text rendering of a [`Simulation`].

use std::fmt;

use per_core::{HouseholdParts, Scenario, Simulation};

use crate::format::{format_euro, format_percent_change, format_rate};

/// Optional client identification printed above the figures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<u32>,
}

impl ClientDetails {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.age.is_none()
    }
}

impl fmt::Display for ClientDetails {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name: Vec<&str> = [&self.first_name, &self.last_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();

        match (name.is_empty(), self.age) {
            (false, Some(age)) => write!(f, "{}, {age} years old", name.join(" ")),
            (false, None) => write!(f, "{}", name.join(" ")),
            (true, Some(age)) => write!(f, "{age} years old"),
            (true, None) => Ok(()),
        }
    }
}

/// A simulation laid out as a text report.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub simulation: &'a Simulation,
    pub tax_year: i32,
    pub client: &'a ClientDetails,
}

/// Renders the client block, the parameters, the before/after figures and
/// the scenario table.
pub fn render(
    simulation: &Simulation,
    tax_year: i32,
    client: &ClientDetails,
) -> String {
    Report {
        simulation,
        tax_year,
        client,
    }
    .to_string()
}

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        out: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let simulation = self.simulation;
        let inputs = &simulation.inputs;
        let comparison = &simulation.comparison;

        let parts_label = HouseholdParts::from_decimal(inputs.parts)
            .map(|preset| preset.label().to_string())
            .unwrap_or_else(|| format!("{} parts", inputs.parts.normalize()));

        writeln!(out, "Retirement contribution simulation ({} scale)", self.tax_year)?;
        writeln!(out)?;
        if !self.client.is_empty() {
            writeln!(out, "Client")?;
            writeln!(out, "  {}", self.client)?;
            writeln!(out)?;
        }
        writeln!(out, "Parameters")?;
        writeln!(out, "  Net annual income      {}", format_euro(inputs.gross_income))?;
        writeln!(out, "  Annual contribution    {}", format_euro(inputs.contribution))?;
        writeln!(out, "  Household              {parts_label}")?;
        writeln!(out, "  Contribution ceiling   {}", format_euro(simulation.contribution_cap))?;
        writeln!(out)?;

        writeln!(out, "Results")?;
        let (before, after) = (&comparison.before, &comparison.after);
        writeln!(out, "  Taxable income (before)  {}", format_euro(before.taxable_income))?;
        writeln!(out, "  Taxable income (after)   {}", format_euro(after.taxable_income))?;
        writeln!(out, "  Income tax (before)      {}", format_euro(before.tax))?;
        writeln!(out, "  Income tax (after)       {}", format_euro(after.tax))?;
        writeln!(out, "  Tax saved                {}", format_euro(comparison.gain))?;
        writeln!(
            out,
            "  Marginal rate            {} -> {}{}",
            format_rate(before.marginal_rate),
            format_rate(after.marginal_rate),
            if comparison.bracket_changed() {
                "  (bracket change)"
            } else {
                ""
            }
        )?;
        match simulation.optimal_contribution {
            Some(optimal) => writeln!(
                out,
                "  Optimal contribution     {} (drops to the next bracket)",
                format_euro(optimal)
            )?,
            None => writeln!(out, "  Optimal contribution     none")?,
        }
        writeln!(out)?;

        writeln!(out, "Scenarios")?;
        writeln!(
            out,
            "  {:<26} {:>14} {:>14} {:>20} {:>12} {:>6}",
            "Contribution", "Net income", "Taxable", "Tax", "Saved", "Rate"
        )?;
        for scenario in &simulation.scenarios {
            writeln!(out, "{}", scenario_row(scenario))?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Indicative calculation: excludes the low-income reduction and special schemes."
        )
    }
}

fn scenario_row(scenario: &Scenario) -> String {
    let marker = if scenario.is_optimal {
        '*'
    } else if scenario.is_current && !scenario.contribution.is_zero() {
        '>'
    } else {
        ' '
    };

    let contribution = format!(
        "{} ({}/month)",
        format_euro(scenario.contribution),
        format_euro(scenario.monthly_contribution())
    );
    let tax = if scenario.contribution.is_zero() {
        format_euro(scenario.tax)
    } else {
        format!(
            "{} {}",
            format_euro(scenario.tax),
            format_percent_change(scenario.percent_change)
        )
    };
    let saved = if scenario.gain.is_sign_positive() && !scenario.gain.is_zero() {
        format_euro(scenario.gain)
    } else {
        "–".to_string()
    };

    format!(
        "{marker} {:<26} {:>14} {:>14} {:>20} {:>12} {:>6}",
        contribution,
        format_euro(scenario.net_income_after_contribution),
        format_euro(scenario.taxable_income),
        tax,
        saved,
        format_rate(scenario.marginal_rate)
    )
}
