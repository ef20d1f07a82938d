use clap::{Args, Parser, Subcommand};
use forecast_core::{parse_input, FunnelInputs};
use forecast_reporting::ExportFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "funnel-forecast")]
#[command(about = "Advertising funnel forecasts, budget solving and what-if analysis")]
#[command(version)]
pub struct Cli {
    /// Campaign store file (overrides config)
    #[arg(long, global = true, env = "FUNNEL_FORECAST__STORE__PATH")]
    pub store: Option<PathBuf>,

    /// Currency label for money values (overrides config)
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true, default_value_t = false)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Forecast impressions, clicks, leads, revenue and returns
    Calculate(FunnelArgs),
    /// Show the impressions → clicks → leads → sales funnel
    Stages(FunnelArgs),
    /// List advisory findings for a forecast
    Insights(FunnelArgs),
    /// Solve the budget needed for a target profit
    Reverse(ReverseArgs),
    /// Profit across budgets from zero to a maximum
    BreakEven {
        #[command(flatten)]
        funnel: FunnelArgs,
        /// Largest budget in the sweep (default: budget × configured factor)
        #[arg(long, allow_hyphen_values = true)]
        max_budget: Option<String>,
    },
    /// ROAS across a range of click-through rates
    Sensitivity {
        #[command(flatten)]
        funnel: FunnelArgs,
        #[arg(long)]
        min: Option<f64>,
        #[arg(long)]
        max: Option<f64>,
        #[arg(long)]
        steps: Option<usize>,
    },
    /// Manage saved campaigns
    #[command(subcommand)]
    Campaign(CampaignCommand),
    /// Compare saved campaigns side by side (all when no id is given)
    Compare {
        /// Campaign ids or id prefixes; the first is the baseline
        ids: Vec<String>,
    },
    /// Export a report for a saved campaign or for the given funnel flags
    Report {
        /// Saved campaign id or prefix
        #[arg(long, conflicts_with_all = ["budget", "cpm", "ctr", "cr", "avg_check"])]
        id: Option<String>,
        #[command(flatten)]
        funnel: FunnelArgs,
        #[arg(long, default_value = "text")]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CampaignCommand {
    /// Save a new campaign
    Save {
        #[arg(long)]
        name: String,
        #[command(flatten)]
        funnel: FunnelArgs,
        #[arg(long)]
        platform: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List saved campaigns, most recently updated first
    List,
    /// Show a campaign and its forecast
    Show { id: String },
    /// Change fields of a saved campaign
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        platform: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        budget: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        cpm: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        ctr: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        cr: Option<String>,
        #[arg(long = "avg-check", allow_hyphen_values = true)]
        avg_check: Option<String>,
    },
    /// Delete a saved campaign
    Delete { id: String },
}

/// The five funnel fields as typed. Anything unparsable counts as 0.
#[derive(Args, Debug, Clone)]
pub struct FunnelArgs {
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub budget: String,
    /// Cost per 1000 impressions
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub cpm: String,
    /// Click-through rate in percent
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub ctr: String,
    /// Conversion rate in percent
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub cr: String,
    /// Revenue per conversion
    #[arg(long = "avg-check", default_value = "", allow_hyphen_values = true)]
    pub avg_check: String,
}

impl FunnelArgs {
    pub fn inputs(&self) -> FunnelInputs {
        FunnelInputs::parse(&self.budget, &self.cpm, &self.ctr, &self.cr, &self.avg_check)
    }

    /// True when no funnel flag was given at all.
    pub fn is_blank(&self) -> bool {
        [&self.budget, &self.cpm, &self.ctr, &self.cr, &self.avg_check]
            .iter()
            .all(|s| s.trim().is_empty())
    }
}

#[derive(Args, Debug, Clone)]
pub struct ReverseArgs {
    /// Target profit
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub profit: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub cpm: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub ctr: String,
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub cr: String,
    #[arg(long = "avg-check", default_value = "", allow_hyphen_values = true)]
    pub avg_check: String,
}

impl ReverseArgs {
    /// `(profit, cpm, ctr, cr, avg_check)`
    pub fn values(&self) -> (f64, f64, f64, f64, f64) {
        (
            parse_input(&self.profit),
            parse_input(&self.cpm),
            parse_input(&self.ctr),
            parse_input(&self.cr),
            parse_input(&self.avg_check),
        )
    }
}
