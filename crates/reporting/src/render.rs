//! Report export in paginated text, JSON, and CSV.

use crate::format::{format_currency, format_number, format_percent};
use crate::report::ForecastReport;
use forecast_core::{ForecastError, ForecastResult};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Text,
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown export format '{other}' (text, json, csv)")),
        }
    }
}

/// Form feed between pages of the text export.
pub const PAGE_BREAK: char = '\u{000C}';

pub struct ReportRenderer {
    lines_per_page: usize,
}

impl ReportRenderer {
    /// `lines_per_page == 0` puts the whole body on one page.
    pub fn new(lines_per_page: usize) -> Self {
        Self { lines_per_page }
    }

    pub fn render(&self, report: &ForecastReport, format: ExportFormat) -> ForecastResult<String> {
        let out = match format {
            ExportFormat::Text => self.render_text(report)?,
            ExportFormat::Json => serde_json::to_string_pretty(report)?,
            ExportFormat::Csv => render_csv(report)?,
        };
        metrics::counter!("reporting.reports.rendered").increment(1);
        debug!(report_id = %report.id, ?format, bytes = out.len(), "Report rendered");
        Ok(out)
    }

    fn render_text(&self, report: &ForecastReport) -> ForecastResult<String> {
        let body = text_body(report);
        let per_page = if self.lines_per_page == 0 {
            body.len().max(1)
        } else {
            self.lines_per_page
        };
        let pages: Vec<&[String]> = body.chunks(per_page).collect();
        let total = pages.len();

        let mut out = String::new();
        for (i, page) in pages.iter().enumerate() {
            if i > 0 {
                out.push(PAGE_BREAK);
            }
            writeln!(out, "{} | page {}/{}", report.title, i + 1, total)
                .and_then(|_| writeln!(out, "{}", "=".repeat(60)))
                .map_err(|e| ForecastError::Render(e.to_string()))?;
            for line in page.iter() {
                out.push_str(line);
                out.push('\n');
            }
        }
        Ok(out)
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(40)
    }
}

fn text_body(report: &ForecastReport) -> Vec<String> {
    let cur = report.currency.as_str();
    let i = &report.inputs;
    let m = &report.metrics;
    let mut lines = Vec::new();

    lines.push(format!(
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    lines.push(String::new());

    lines.push("INPUTS".to_string());
    lines.push(row("Budget", format_currency(i.budget, cur)));
    lines.push(row("CPM", format_currency(i.cpm, cur)));
    lines.push(row("CTR", format_percent(i.ctr)));
    lines.push(row("Conversion rate", format_percent(i.cr)));
    lines.push(row("Average check", format_currency(i.avg_check, cur)));
    lines.push(String::new());

    lines.push("FORECAST".to_string());
    lines.push(row("Impressions", format_number(m.impressions, 0)));
    lines.push(row("Clicks", format_number(m.clicks, 0)));
    lines.push(row("Leads", format_number(m.leads, 1)));
    lines.push(row("CPC", format_currency(m.cpc, cur)));
    lines.push(row("CPL / CAC", format_currency(m.cpl, cur)));
    lines.push(row("Max CPC", format_currency(m.max_cpc, cur)));
    lines.push(row("Revenue", format_currency(m.revenue, cur)));
    lines.push(row("Profit", format_currency(m.profit, cur)));
    lines.push(row(
        "ROAS",
        format!("{}x ({})", format_number(m.roas, 2), report.roas_category.label()),
    ));
    lines.push(row("ROI", format_percent(m.roi)));
    lines.push(row("Wasted spend", format_currency(m.wasted_spend, cur)));
    lines.push(String::new());

    lines.push("FUNNEL".to_string());
    if report.stages.is_empty() {
        lines.push("  (no funnel without budget and CPM)".to_string());
    }
    for stage in &report.stages {
        lines.push(format!(
            "  {:<12} {:>16}  {:>9} of top  {:>9} drop-off",
            stage.name,
            format_number(stage.count, 0),
            format_percent(stage.percentage),
            format_percent(stage.drop_off),
        ));
    }
    lines.push(String::new());

    lines.push("INSIGHTS".to_string());
    if report.insights.is_empty() {
        lines.push("  (none)".to_string());
    }
    for insight in &report.insights {
        lines.push(format!("  [{}] {}", insight.severity.label(), insight.message));
    }
    lines.push(String::new());

    lines.push("BREAK-EVEN SWEEP".to_string());
    for point in &report.break_even {
        lines.push(row(
            &format_currency(point.x, cur),
            format_currency(point.y, cur),
        ));
    }

    lines
}

fn row(label: &str, value: String) -> String {
    format!("  {label:<24} {value:>24}")
}

fn render_csv(report: &ForecastReport) -> ForecastResult<String> {
    let i = &report.inputs;
    let m = &report.metrics;
    let mut csv = String::from("section,name,value\n");

    let mut push = |section: &str, name: &str, value: String| -> ForecastResult<()> {
        writeln!(csv, "{},{},{}", section, quote(name), value)
            .map_err(|e| ForecastError::Render(e.to_string()))
    };

    for (name, v) in [
        ("budget", i.budget),
        ("cpm", i.cpm),
        ("ctr", i.ctr),
        ("cr", i.cr),
        ("avg_check", i.avg_check),
    ] {
        push("input", name, v.to_string())?;
    }

    for (name, v) in [
        ("impressions", m.impressions),
        ("clicks", m.clicks),
        ("cpc", m.cpc),
        ("leads", m.leads),
        ("cpl", m.cpl),
        ("revenue", m.revenue),
        ("profit", m.profit),
        ("roas", m.roas),
        ("roi", m.roi),
        ("cac", m.cac),
        ("max_cpc", m.max_cpc),
        ("break_even_budget", m.break_even_budget),
        ("cost_per_impression", m.cost_per_impression),
        ("click_through_value", m.click_through_value),
        ("conversion_value", m.conversion_value),
        ("wasted_spend", m.wasted_spend),
    ] {
        push("metric", name, v.to_string())?;
    }
    push("metric", "roas_category", quote(report.roas_category.label()))?;

    for stage in &report.stages {
        push("stage", &stage.name, stage.count.to_string())?;
    }
    for insight in &report.insights {
        push("insight", insight.severity.label(), quote(&insight.message))?;
    }
    for point in &report.break_even {
        push("break_even", &point.x.to_string(), point.y.to_string())?;
    }

    Ok(csv)
}

fn quote(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::FunnelInputs;

    fn sample_report() -> ForecastReport {
        ForecastReport::build(
            "Spring push",
            "USD",
            FunnelInputs::new(10_000.0, 8.0, 2.5, 3.0, 150.0),
            30_000.0,
        )
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_text_single_page() {
        let text = ReportRenderer::new(0)
            .render(&sample_report(), ExportFormat::Text)
            .unwrap();
        assert!(text.starts_with("Spring push | page 1/1"));
        assert!(!text.contains(PAGE_BREAK));
        assert!(text.contains("140,625.00 USD"));
        assert!(text.contains("Excellent"));
        assert!(text.contains("[POSITIVE]"));
    }

    #[test]
    fn test_text_pagination() {
        let report = sample_report();
        let body_lines = text_body(&report).len();
        let text = ReportRenderer::new(10)
            .render(&report, ExportFormat::Text)
            .unwrap();

        let pages = body_lines.div_ceil(10);
        assert!(pages > 1);
        assert_eq!(text.matches(PAGE_BREAK).count(), pages - 1);
        assert!(text.contains(&format!("page {pages}/{pages}")));
    }

    #[test]
    fn test_json_round_trips() {
        let report = sample_report();
        let json = ReportRenderer::default()
            .render(&report, ExportFormat::Json)
            .unwrap();
        let back: ForecastReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, report.id);
        assert_eq!(back.stages, report.stages);
        assert_eq!(back.insights, report.insights);
    }

    #[test]
    fn test_csv_sections() {
        let csv = ReportRenderer::default()
            .render(&sample_report(), ExportFormat::Csv)
            .unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "section,name,value");
        assert!(lines.contains(&"input,budget,10000"));
        assert!(lines.contains(&"metric,roas_category,Excellent"));
        assert_eq!(lines.iter().filter(|l| l.starts_with("stage,")).count(), 4);
        assert_eq!(lines.iter().filter(|l| l.starts_with("break_even,")).count(), 21);
        assert!(lines
            .iter()
            .any(|l| l.starts_with("insight,POSITIVE,Strong ROAS")));
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "plain");
        assert_eq!(quote("a,b"), "\"a,b\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
