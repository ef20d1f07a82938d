//! Advisory insight rules over a computed metrics bundle.
//!
//! Rules are independent and emitted in a fixed order; only the two ROAS
//! rules exclude each other.

use crate::model::{CampaignMetrics, InsightSeverity, MarketingInsight};

const LOSING_ROAS: f64 = 1.0;
const THIN_MARGIN_ROAS: f64 = 2.0;
const LOW_CTR_PERCENT: f64 = 1.0;
const LOW_CR_PERCENT: f64 = 2.0;
const SCALE_UP_ROAS: f64 = 3.0;

pub fn insights(
    metrics: &CampaignMetrics,
    ctr: f64,
    cr: f64,
    avg_check: f64,
) -> Vec<MarketingInsight> {
    let mut out = Vec::new();

    if metrics.cpc > metrics.max_cpc {
        out.push(MarketingInsight::new(
            InsightSeverity::Critical,
            format!(
                "CPC ({:.2}) exceeds the break-even CPC ({:.2}). Every click costs more than it earns.",
                metrics.cpc, metrics.max_cpc
            ),
        ));
    }

    if metrics.roas < LOSING_ROAS {
        out.push(MarketingInsight::new(
            InsightSeverity::Critical,
            format!(
                "ROAS below 1.0x ({:.2}x): the campaign is losing money.",
                metrics.roas
            ),
        ));
    } else if metrics.roas < THIN_MARGIN_ROAS {
        out.push(MarketingInsight::new(
            InsightSeverity::Warning,
            format!(
                "ROAS between 1.0x and 2.0x ({:.2}x): margins are thin once other costs are included.",
                metrics.roas
            ),
        ));
    }

    // Informational in tone, reported as a warning.
    if ctr < LOW_CTR_PERCENT {
        out.push(MarketingInsight::new(
            InsightSeverity::Warning,
            "CTR below 1%: test new creatives or tighten targeting.",
        ));
    }

    if cr < LOW_CR_PERCENT {
        out.push(MarketingInsight::new(
            InsightSeverity::Info,
            "Conversion rate below 2%: landing page and offer optimization may pay off.",
        ));
    }

    if metrics.cpl > avg_check {
        out.push(MarketingInsight::new(
            InsightSeverity::Critical,
            format!(
                "Cost per lead ({:.2}) exceeds the average check ({:.2}): each lead costs more than it returns.",
                metrics.cpl, avg_check
            ),
        ));
    }

    if metrics.is_profitable() && metrics.roas >= SCALE_UP_ROAS {
        out.push(MarketingInsight::new(
            InsightSeverity::Positive,
            format!(
                "Strong ROAS of {:.2}x: consider scaling the budget.",
                metrics.roas
            ),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate;

    fn severities(list: &[MarketingInsight]) -> Vec<InsightSeverity> {
        list.iter().map(|i| i.severity).collect()
    }

    #[test]
    fn test_healthy_campaign_only_scales() {
        let m = calculate(10_000.0, 8.0, 2.5, 3.0, 150.0);
        let list = insights(&m, 2.5, 3.0, 150.0);
        assert_eq!(severities(&list), vec![InsightSeverity::Positive]);
        assert!(list[0].message.contains("14.0"));
    }

    #[test]
    fn test_losing_roas_excludes_thin_margin() {
        let m = CampaignMetrics {
            roas: 0.5,
            ..CampaignMetrics::zero()
        };
        let list = insights(&m, 2.5, 3.0, 150.0);
        assert!(list
            .iter()
            .any(|i| i.severity == InsightSeverity::Critical && i.message.contains("ROAS below 1.0x")));
        assert!(!list.iter().any(|i| i.message.contains("between 1.0x and 2.0x")));
    }

    #[test]
    fn test_thin_margin_warning() {
        let m = CampaignMetrics {
            roas: 1.5,
            profit: 10.0,
            ..CampaignMetrics::zero()
        };
        let list = insights(&m, 2.5, 3.0, 150.0);
        assert_eq!(severities(&list), vec![InsightSeverity::Warning]);
        assert!(list[0].message.contains("between 1.0x and 2.0x"));
    }

    #[test]
    fn test_all_warning_rules_fire_in_order() {
        // cpc 4.0 > max_cpc 1.5, roas 0.375, cpl 266.67 > 100
        let m = calculate(1_000.0, 20.0, 0.5, 1.5, 100.0);
        let list = insights(&m, 0.5, 1.5, 100.0);
        assert_eq!(
            severities(&list),
            vec![
                InsightSeverity::Critical,
                InsightSeverity::Critical,
                InsightSeverity::Warning,
                InsightSeverity::Info,
                InsightSeverity::Critical,
            ]
        );
        assert!(list[0].message.starts_with("CPC"));
        assert!(list[1].message.starts_with("ROAS below 1.0x"));
        assert!(list[2].message.starts_with("CTR below 1%"));
        assert!(list[4].message.starts_with("Cost per lead"));
    }

    #[test]
    fn test_profitable_below_three_does_not_scale() {
        let m = CampaignMetrics {
            roas: 2.5,
            profit: 100.0,
            ..CampaignMetrics::zero()
        };
        assert!(insights(&m, 2.0, 2.0, 150.0).is_empty());
    }

    #[test]
    fn test_scale_up_fires_at_exactly_three() {
        let m = CampaignMetrics {
            roas: 3.0,
            profit: 200.0,
            ..CampaignMetrics::zero()
        };
        let list = insights(&m, 2.0, 2.0, 150.0);
        assert_eq!(severities(&list), vec![InsightSeverity::Positive]);
        assert!(list[0].message.contains("3.00x"));
    }

    #[test]
    fn test_cpc_at_break_even_is_quiet() {
        let m = CampaignMetrics {
            cpc: 2.0,
            max_cpc: 2.0,
            cpl: 50.0,
            roas: 2.5,
            profit: 100.0,
            ..CampaignMetrics::zero()
        };
        assert!(insights(&m, 2.0, 2.0, 150.0).is_empty());

        let over = CampaignMetrics { cpc: 2.01, ..m };
        let list = insights(&over, 2.0, 2.0, 150.0);
        assert_eq!(severities(&list), vec![InsightSeverity::Critical]);
        assert!(list[0].message.starts_with("CPC"));
    }

    #[test]
    fn test_zero_metrics() {
        // cpc == max_cpc == 0, so the CPC rule stays quiet
        let list = insights(&CampaignMetrics::zero(), 0.0, 0.0, 0.0);
        assert_eq!(
            severities(&list),
            vec![
                InsightSeverity::Critical,
                InsightSeverity::Warning,
                InsightSeverity::Info,
            ]
        );
    }
}
