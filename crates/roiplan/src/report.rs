//! Plain-text report rendering

use std::fmt::{self, Write};

use roiplan_core::analysis::tornado_order;
use roiplan_core::model::{MonteCarloResult, RoiReport};

use crate::util::format::{
    format_capped, format_compact_currency, format_currency, format_irr, format_payback,
    format_percentage,
};

const RULE: &str = "------------------------------------------------------------------------";

fn write_scenarios<W: Write>(out: &mut W, report: &RoiReport) -> fmt::Result {
    writeln!(out, "Scenarios")?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "{:<14}{:>14}{:>20}{:>18}{:>18}",
        "", "NPV", "IRR", "ROIC", "Payback"
    )?;
    for s in &report.scenarios {
        writeln!(
            out,
            "{:<14}{:>14}{:>20}{:>18}{:>18}",
            s.kind.label(),
            format_currency(s.npv),
            format_irr(s.irr_reported.as_ref()),
            format_capped(&s.roic),
            format_payback(s.payback_months),
        )?;
    }
    writeln!(
        out,
        "Expected NPV {}   Expected ROIC {}",
        format_currency(report.expected_npv),
        format_percentage(report.expected_roic)
    )?;
    writeln!(out)
}

fn write_cash_flows<W: Write>(out: &mut W, report: &RoiReport) -> fmt::Result {
    let base = report.base();
    writeln!(out, "Base case cash flow")?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "{:<8}{:>12}{:>12}{:>12}{:>12}{:>12}{:>12}",
        "Year", "Enhance", "Headcount", "Severance", "Ongoing", "Net", "Cumulative"
    )?;
    writeln!(
        out,
        "{:<8}{:>72}",
        "0",
        format_compact_currency(-base.upfront_investment)
    )?;
    for y in &base.years {
        writeln!(
            out,
            "{:<8}{:>12}{:>12}{:>12}{:>12}{:>12}{:>12}",
            y.year,
            format_compact_currency(y.enhancement_savings),
            format_compact_currency(y.headcount_savings),
            format_compact_currency(-y.separation_cost),
            format_compact_currency(-y.ongoing_cost),
            format_compact_currency(y.net_cash_flow),
            format_compact_currency(y.cumulative_net),
        )?;
    }
    writeln!(out)
}

fn write_sensitivity<W: Write>(out: &mut W, report: &RoiReport) -> fmt::Result {
    if report.sensitivity.is_empty() {
        return Ok(());
    }
    writeln!(out, "Sensitivity (NPV, widest swing first)")?;
    writeln!(out, "{RULE}")?;
    for row in tornado_order(&report.sensitivity) {
        writeln!(
            out,
            "{:<22}{:>8} {:>12}   {:>8} {:>12}   swing {}",
            row.label,
            row.low_label,
            format_compact_currency(row.npv_low),
            row.high_label,
            format_compact_currency(row.npv_high),
            format_compact_currency(row.spread()),
        )?;
    }
    writeln!(out)
}

fn write_monte_carlo<W: Write>(out: &mut W, mc: &MonteCarloResult) -> fmt::Result {
    writeln!(
        out,
        "Monte Carlo ({} iterations, seed {})",
        mc.iterations, mc.seed
    )?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "NPV        P10 {}   P50 {}   P90 {}",
        format_compact_currency(mc.npv.p10),
        format_compact_currency(mc.npv.p50),
        format_compact_currency(mc.npv.p90),
    )?;
    if mc.irr.count > 0 {
        writeln!(
            out,
            "IRR        P10 {}   P50 {}   P90 {}   ({} of {} runs defined)",
            format_percentage(mc.irr.p10),
            format_percentage(mc.irr.p50),
            format_percentage(mc.irr.p90),
            mc.irr.count,
            mc.iterations,
        )?;
    } else {
        writeln!(out, "IRR        not applicable")?;
    }
    writeln!(
        out,
        "Payback    P50 {}",
        format_payback(mc.payback_months.p50.round() as u32)
    )?;
    writeln!(
        out,
        "P(NPV > 0) {}",
        format_percentage(mc.probability_positive_npv)
    )?;
    writeln!(
        out,
        "P(loss > 50% of upfront) {}   P(payback beyond horizon) {}",
        format_percentage(mc.tail_risk.prob_capital_loss_50),
        format_percentage(mc.tail_risk.prob_payback_beyond_horizon),
    )
}

/// Render the full plain-text summary
pub fn write_report<W: Write>(out: &mut W, report: &RoiReport) -> fmt::Result {
    writeln!(out, "Automation ROI summary")?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Upfront investment {}   Total capital deployed {}",
        format_currency(report.upfront_investment),
        format_currency(report.total_investment)
    )?;
    writeln!(out)?;

    write_scenarios(out, report)?;
    write_cash_flows(out, report)?;
    write_sensitivity(out, report)?;
    if let Some(mc) = &report.monte_carlo {
        write_monte_carlo(out, mc)?;
    }
    Ok(())
}
