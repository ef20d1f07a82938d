//! Forward calculator: funnel assumptions → full metrics bundle.

use crate::model::CampaignMetrics;

/// Inputs must be finite and strictly positive to take part in a formula.
pub(crate) fn is_usable(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// `a / b` when `b > 0`, otherwise `fallback`.
pub(crate) fn ratio_or(a: f64, b: f64, fallback: f64) -> f64 {
    if b > 0.0 {
        a / b
    } else {
        fallback
    }
}

/// Forecast the funnel for one budget.
///
/// `ctr` and `cr` are percentages. If any input is not a positive finite
/// number the result is [`CampaignMetrics::zero`].
pub fn calculate(budget: f64, cpm: f64, ctr: f64, cr: f64, avg_check: f64) -> CampaignMetrics {
    if ![budget, cpm, ctr, cr, avg_check].into_iter().all(is_usable) {
        return CampaignMetrics::zero();
    }

    let ctr_rate = ctr / 100.0;
    let cr_rate = cr / 100.0;

    let impressions = budget / cpm * 1000.0;
    let clicks = impressions * ctr_rate;
    let cpc = ratio_or(budget, clicks, 0.0);
    let leads = clicks * cr_rate;
    let cpl = ratio_or(budget, leads, 0.0);
    let revenue = leads * avg_check;
    let profit = revenue - budget;
    let roas = revenue / budget;
    let roi = (revenue - budget) / budget * 100.0;

    // Binary signal: either every unit of spend pays for itself or none does.
    let revenue_per_unit = ctr_rate * cr_rate * avg_check;
    let cost_per_unit = cpm / 1000.0;
    let break_even_budget = if revenue_per_unit > cost_per_unit {
        0.0
    } else {
        budget
    };

    CampaignMetrics {
        impressions,
        clicks,
        cpc,
        leads,
        cpl,
        revenue,
        profit,
        roas,
        roi,
        cac: cpl,
        max_cpc: avg_check * cr_rate,
        break_even_budget,
        cost_per_impression: ratio_or(budget, impressions, 0.0),
        click_through_value: ratio_or(revenue, clicks, 0.0),
        conversion_value: ratio_or(revenue, leads, avg_check),
        wasted_spend: (budget - revenue).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_reference_forecast() {
        let m = calculate(10_000.0, 8.0, 2.5, 3.0, 150.0);

        assert!(close(m.impressions, 1_250_000.0));
        assert!(close(m.clicks, 31_250.0));
        assert!(close(m.cpc, 0.32));
        assert!(close(m.leads, 937.5));
        assert!((m.cpl - 10.666_666_666_7).abs() < 1e-6);
        assert!(close(m.cac, m.cpl));
        assert!(close(m.revenue, 140_625.0));
        assert!(close(m.profit, 130_625.0));
        assert!(close(m.roas, 14.0625));
        assert!(close(m.roi, 1306.25));
        assert!(close(m.max_cpc, 4.5));
        assert!(close(m.cost_per_impression, 0.008));
        assert!(close(m.click_through_value, 4.5));
        assert!(close(m.conversion_value, 150.0));
        assert_eq!(m.wasted_spend, 0.0);
        assert_eq!(m.break_even_budget, 0.0);
        assert!(m.is_profitable());
        assert!(m.is_viable());
    }

    #[test]
    fn test_non_positive_inputs_give_zero_metrics() {
        let cases = [
            (0.0, 8.0, 2.5, 3.0, 150.0),
            (10_000.0, 0.0, 2.5, 3.0, 150.0),
            (10_000.0, 8.0, -1.0, 3.0, 150.0),
            (10_000.0, 8.0, 2.5, 0.0, 150.0),
            (10_000.0, 8.0, 2.5, 3.0, -150.0),
        ];
        for (b, cpm, ctr, cr, avg) in cases {
            assert_eq!(calculate(b, cpm, ctr, cr, avg), CampaignMetrics::zero());
        }
    }

    #[test]
    fn test_non_finite_inputs_give_zero_metrics() {
        assert_eq!(
            calculate(f64::NAN, 8.0, 2.5, 3.0, 150.0),
            CampaignMetrics::zero()
        );
        assert_eq!(
            calculate(10_000.0, f64::INFINITY, 2.5, 3.0, 150.0),
            CampaignMetrics::zero()
        );
    }

    #[test]
    fn test_losing_funnel() {
        // revenue per 1000 impressions: 1000 * 1% * 1% * 50 = 5 < cpm 20
        let m = calculate(1_000.0, 20.0, 1.0, 1.0, 50.0);
        assert!(close(m.revenue, 250.0));
        assert!(close(m.profit, -750.0));
        assert!(close(m.roi, -75.0));
        assert!(close(m.wasted_spend, 750.0));
        assert!(close(m.break_even_budget, 1_000.0));
        assert!(!m.is_profitable());
        assert!(!m.is_viable());
    }

    #[test]
    fn test_exact_break_even_counts_as_not_profitable_per_unit() {
        // revenue per unit == cost per unit (0.125) -> whole budget flagged
        let m = calculate(500.0, 125.0, 50.0, 50.0, 0.5);
        assert!(close(m.roas, 1.0));
        assert!(close(m.break_even_budget, 500.0));
    }

    #[test]
    fn test_max_cpc_ignores_budget_and_cpm() {
        let a = calculate(100.0, 5.0, 2.0, 4.0, 80.0);
        let b = calculate(9_000.0, 50.0, 2.0, 4.0, 80.0);
        assert!(close(a.max_cpc, 3.2));
        assert!(close(a.max_cpc, b.max_cpc));
    }
}
