//! Funnel Forecast: advertising funnel calculator with saved campaigns.
//!
//! Main entry point: loads configuration, opens the campaign store, and runs
//! one command.

mod cli;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::{CampaignCommand, Cli, Command};
use forecast_core::config::AppConfig;
use forecast_core::{parse_input, FunnelInputs};
use forecast_engine::{
    break_even_points, calculate, compare_scenarios, funnel_stages, insights, reverse_calculate,
    sensitivity_ctr, Scenario, SensitivityRange,
};
use forecast_reporting::{format_number, ForecastReport, ReportRenderer};
use forecast_store::{CampaignStore, CampaignUpdate, NewCampaign};
use serde::Serialize;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(path) = &cli.store {
        config.store.path = path.display().to_string();
    }
    if let Some(currency) = &cli.currency {
        config.report.currency = currency.clone();
    }

    debug!(
        store = %config.store.path,
        currency = %config.report.currency,
        "Configuration loaded"
    );

    run(cli, &config)
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "funnel_forecast=info,forecast_store=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let json = cli.json;
    let currency = config.report.currency.as_str();

    match cli.command {
        Command::Calculate(args) => {
            let i = args.inputs();
            let m = calculate(i.budget, i.cpm, i.ctr, i.cr, i.avg_check);
            emit(json, &m, || output::print_metrics(&m, currency))
        }
        Command::Stages(args) => {
            let i = args.inputs();
            let stages = funnel_stages(i.budget, i.cpm, i.ctr, i.cr, i.avg_check);
            emit(json, &stages, || output::print_stages(&stages, currency))
        }
        Command::Insights(args) => {
            let i = args.inputs();
            let m = calculate(i.budget, i.cpm, i.ctr, i.cr, i.avg_check);
            let list = insights(&m, i.ctr, i.cr, i.avg_check);
            emit(json, &list, || output::print_insights(&list))
        }
        Command::Reverse(args) => {
            let (profit, cpm, ctr, cr, avg_check) = args.values();
            let r = reverse_calculate(profit, cpm, ctr, cr, avg_check);
            emit(json, &r, || output::print_reverse(&r, currency))
        }
        Command::BreakEven { funnel, max_budget } => {
            let i = funnel.inputs();
            let max = max_budget
                .as_deref()
                .map(parse_input)
                .unwrap_or(i.budget * config.analysis.break_even_budget_factor);
            let points = break_even_points(i.cpm, i.ctr, i.cr, i.avg_check, max);
            emit(json, &points, || {
                output::print_points(&points, "Budget", "Profit", |v| {
                    forecast_reporting::format_currency(v, currency)
                })
            })
        }
        Command::Sensitivity {
            funnel,
            min,
            max,
            steps,
        } => {
            let i = funnel.inputs();
            let range = SensitivityRange {
                min: min.unwrap_or(config.analysis.sensitivity_min),
                max: max.unwrap_or(config.analysis.sensitivity_max),
                steps: steps.unwrap_or(config.analysis.sensitivity_steps),
            };
            let points = sensitivity_ctr(i.budget, i.cpm, i.ctr, i.cr, i.avg_check, range);
            emit(json, &points, || {
                output::print_points(&points, "CTR %", "ROAS", |v| {
                    format!("{}x", format_number(v, 2))
                })
            })
        }
        Command::Campaign(cmd) => {
            let store = open_store(config)?;
            run_campaign(cmd, &store, config, json)
        }
        Command::Compare { ids } => {
            let store = open_store(config)?;
            let records = if ids.is_empty() {
                let mut all = store.list();
                // oldest first so the baseline is stable
                all.reverse();
                all
            } else {
                ids.iter()
                    .map(|id| store.find_by_prefix(id))
                    .collect::<Result<Vec<_>, _>>()?
            };
            let scenarios: Vec<Scenario> = records
                .into_iter()
                .map(|r| Scenario::new(r.name, r.inputs))
                .collect();
            let cmp = compare_scenarios(&scenarios);
            emit(json, &cmp, || output::print_comparison(&cmp, currency))
        }
        Command::Report {
            id,
            funnel,
            format,
            output,
        } => {
            let (title, report_currency, inputs) = match id {
                Some(id) => {
                    let store = open_store(config)?;
                    let record = store.find_by_prefix(&id)?;
                    (record.name, record.currency, record.inputs)
                }
                None if funnel.is_blank() => {
                    anyhow::bail!("report needs --id or the funnel flags (--budget, --cpm, ...)")
                }
                None => (
                    config.report.title.clone(),
                    currency.to_string(),
                    funnel.inputs(),
                ),
            };
            let report = build_report(title, report_currency, inputs, config);
            let rendered = ReportRenderer::new(config.report.lines_per_page).render(&report, format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("writing report to {}", path.display()))?;
                    info!(path = %path.display(), report_id = %report.id, "Report written");
                }
                None => print!("{rendered}"),
            }
            Ok(())
        }
    }
}

fn run_campaign(
    cmd: CampaignCommand,
    store: &CampaignStore,
    config: &AppConfig,
    json: bool,
) -> anyhow::Result<()> {
    match cmd {
        CampaignCommand::Save {
            name,
            funnel,
            platform,
            notes,
        } => {
            let record = store.create(NewCampaign {
                name,
                currency: Some(config.report.currency.clone()),
                platform,
                notes,
                inputs: funnel.inputs(),
            })?;
            emit(json, &record, || {
                println!("Saved {} ({})", record.name, record.id)
            })
        }
        CampaignCommand::List => {
            let records = store.list();
            emit(json, &records, || output::print_records(&records))
        }
        CampaignCommand::Show { id } => {
            let record = store.find_by_prefix(&id)?;
            let i = record.inputs;
            let metrics = calculate(i.budget, i.cpm, i.ctr, i.cr, i.avg_check);

            #[derive(Serialize)]
            struct Shown<'a> {
                campaign: &'a forecast_store::CampaignRecord,
                metrics: &'a forecast_engine::CampaignMetrics,
            }
            let shown = Shown {
                campaign: &record,
                metrics: &metrics,
            };
            emit(json, &shown, || {
                output::print_record(&record);
                output::print_metrics(&metrics, &record.currency);
            })
        }
        CampaignCommand::Update {
            id,
            name,
            platform,
            notes,
            budget,
            cpm,
            ctr,
            cr,
            avg_check,
        } => {
            let record = store.find_by_prefix(&id)?;
            let update = CampaignUpdate {
                name,
                currency: None,
                platform,
                notes,
                budget: budget.as_deref().map(parse_input),
                cpm: cpm.as_deref().map(parse_input),
                ctr: ctr.as_deref().map(parse_input),
                cr: cr.as_deref().map(parse_input),
                avg_check: avg_check.as_deref().map(parse_input),
            };
            let updated = store.update(record.id, update)?;
            emit(json, &updated, || {
                println!("Updated {} ({})", updated.name, updated.id)
            })
        }
        CampaignCommand::Delete { id } => {
            let record = store.find_by_prefix(&id)?;
            store.delete(record.id)?;
            emit(json, &record.id, || {
                println!("Deleted {} ({})", record.name, record.id)
            })
        }
    }
}

fn open_store(config: &AppConfig) -> anyhow::Result<CampaignStore> {
    CampaignStore::open(&config.store.path)
        .with_context(|| format!("opening campaign store {}", config.store.path))
}

fn build_report(
    title: String,
    currency: String,
    inputs: FunnelInputs,
    config: &AppConfig,
) -> ForecastReport {
    let max_budget = inputs.budget * config.analysis.break_even_budget_factor;
    ForecastReport::build(title, currency, inputs, max_budget)
}

/// Print `value` as JSON when requested, otherwise run the text printer.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce()) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text();
    }
    Ok(())
}
