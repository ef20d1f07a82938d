//! Plain-text rendering of command results.

use forecast_engine::{
    CampaignMetrics, FunnelStage, MarketingInsight, ReverseResult, SamplePoint,
    ScenarioComparison,
};
use forecast_reporting::{format_currency, format_number, format_percent};
use forecast_store::CampaignRecord;

fn line(label: &str, value: String) {
    println!("  {label:<22} {value:>24}");
}

pub fn print_metrics(m: &CampaignMetrics, currency: &str) {
    line("Impressions", format_number(m.impressions, 0));
    line("Clicks", format_number(m.clicks, 0));
    line("CPC", format_currency(m.cpc, currency));
    line("Leads", format_number(m.leads, 1));
    line("CPL / CAC", format_currency(m.cpl, currency));
    line("Revenue", format_currency(m.revenue, currency));
    line("Profit", format_currency(m.profit, currency));
    line(
        "ROAS",
        format!("{}x ({})", format_number(m.roas, 2), m.roas_category().label()),
    );
    line("ROI", format_percent(m.roi));
    line("Max CPC", format_currency(m.max_cpc, currency));
    line("Break-even budget", format_currency(m.break_even_budget, currency));
    line("Cost / impression", format_currency(m.cost_per_impression, currency));
    line("Revenue / click", format_currency(m.click_through_value, currency));
    line("Revenue / lead", format_currency(m.conversion_value, currency));
    line("Wasted spend", format_currency(m.wasted_spend, currency));
}

pub fn print_reverse(r: &ReverseResult, currency: &str) {
    println!("{}", r.reason);
    if r.is_achievable {
        line("Required budget", format_currency(r.required_budget, currency));
        line("Impressions", format_number(r.required_impressions, 0));
        line("Clicks", format_number(r.required_clicks, 0));
        line("Leads", format_number(r.required_leads, 1));
        line("Revenue", format_currency(r.total_revenue, currency));
    }
    line("Effective ROAS", format!("{}x", format_number(r.effective_roas, 2)));
    line("Effective ROI", format_percent(r.effective_roi));
}

pub fn print_stages(stages: &[FunnelStage], currency: &str) {
    if stages.is_empty() {
        println!("No funnel: budget and CPM must be positive.");
        return;
    }
    println!(
        "  {:<12} {:>16} {:>22} {:>10} {:>10}",
        "Stage", "Count", "Cost", "Of top", "Drop-off"
    );
    for s in stages {
        println!(
            "  {:<12} {:>16} {:>22} {:>10} {:>10}",
            s.name,
            format_number(s.count, 0),
            format_currency(s.cost, currency),
            format_percent(s.percentage),
            format_percent(s.drop_off),
        );
    }
}

pub fn print_insights(list: &[MarketingInsight]) {
    if list.is_empty() {
        println!("No findings.");
    }
    for i in list {
        println!("[{}] {}", i.severity.label(), i.message);
    }
}

pub fn print_points(points: &[SamplePoint], x_label: &str, y_label: &str, fmt: impl Fn(f64) -> String) {
    if points.is_empty() {
        println!("Nothing to sample for these inputs.");
        return;
    }
    println!("  {x_label:>22} {y_label:>24}");
    for p in points {
        println!("  {:>22} {:>24}", format_number(p.x, 2), fmt(p.y));
    }
}

pub fn print_records(records: &[CampaignRecord]) {
    if records.is_empty() {
        println!("No saved campaigns.");
        return;
    }
    for r in records {
        let id = r.id.to_string();
        println!(
            "{}  {:<28} {:>20}  {}  {}",
            &id[..8],
            r.name,
            format_currency(r.inputs.budget, &r.currency),
            r.platform.as_deref().unwrap_or("-"),
            r.updated_at.format("%Y-%m-%d %H:%M"),
        );
    }
}

pub fn print_record(r: &CampaignRecord) {
    println!("{} ({})", r.name, r.id);
    if let Some(platform) = &r.platform {
        println!("Platform: {platform}");
    }
    if let Some(notes) = &r.notes {
        println!("Notes: {notes}");
    }
    println!(
        "Inputs: budget {}, CPM {}, CTR {}, CR {}, average check {}",
        format_currency(r.inputs.budget, &r.currency),
        format_currency(r.inputs.cpm, &r.currency),
        format_percent(r.inputs.ctr),
        format_percent(r.inputs.cr),
        format_currency(r.inputs.avg_check, &r.currency),
    );
}

pub fn print_comparison(cmp: &ScenarioComparison, currency: &str) {
    if cmp.rows.is_empty() {
        println!("Nothing to compare.");
        return;
    }
    println!(
        "  {:<24} {:>20} {:>20} {:>10} {:>20}",
        "Scenario", "Revenue", "Profit", "ROAS", "Profit vs first"
    );
    for (i, row) in cmp.rows.iter().enumerate() {
        let mut marks = String::new();
        if cmp.best_by_profit == Some(i) {
            marks.push_str(" *profit");
        }
        if cmp.best_by_roas == Some(i) {
            marks.push_str(" *roas");
        }
        println!(
            "  {:<24} {:>20} {:>20} {:>10} {:>20}{}",
            row.name,
            format_currency(row.metrics.revenue, currency),
            format_currency(row.metrics.profit, currency),
            format!("{}x", format_number(row.metrics.roas, 2)),
            format_currency(row.profit_delta, currency),
            marks,
        );
    }
}
