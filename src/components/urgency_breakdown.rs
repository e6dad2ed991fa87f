//! Urgency Breakdown Component
//!
//! Read-only rendering of the scoring structure attached to a creation
//! response: factor cards, step-by-step reasoning, and a verification
//! table that re-derives the weighted total next to the backend's final
//! score. The two numbers come from independent sources and are shown
//! as-is; a rounding mismatch between them is not an error.

use leptos::prelude::*;

use crate::models::UrgencyReport;
use crate::urgency::{format_factor_name, level_color, score_tier, total_weighted_score};

#[component]
pub fn UrgencyBreakdownView(report: UrgencyReport) -> impl IntoView {
    let Some(breakdown) = report.urgency_breakdown else {
        return ().into_any();
    };

    let score = report.urgency_score;
    let level = report.urgency_level;
    let color = level_color(level);
    let total = total_weighted_score(&breakdown);

    let recommendation_box = breakdown.recommendation.as_ref().map(|rec| {
        view! {
            <div class="recommendation-box">
                <h3>"Recommended Action"</h3>
                <div class="recommendation-item">
                    <strong>"Action: "</strong>
                    <span class="action-required" style=format!("color: {color}")>
                        {rec.action.clone()}
                    </span>
                </div>
                <div class="recommendation-item">
                    <strong>"Timeline: "</strong>
                    <span>{rec.timeline.clone()}</span>
                </div>
                <div class="recommendation-item">
                    <strong>"Priority Level: "</strong>
                    <span>{rec.priority.clone()}</span>
                </div>
            </div>
        }
    });

    let factor_cards = breakdown
        .factors
        .iter()
        .map(|(key, factor)| {
            let tier = score_tier(factor.score);
            let bar_width = (factor.score * 10.0).clamp(0.0, 100.0);
            view! {
                <div class=format!("factor-card {}", tier.css_class())>
                    <div class="factor-header">
                        <h4>{format_factor_name(key)}</h4>
                        <span class="factor-weight">
                            {format!("Weight: {:.0}%", factor.weight * 100.0)}
                        </span>
                    </div>
                    <div class="score-bar-container">
                        <div
                            class="score-bar-fill"
                            style=format!(
                                "width: {bar_width}%; background-color: {}",
                                level_color(tier),
                            )
                        >
                            {format!("{:.1}/10", factor.score)}
                        </div>
                    </div>
                    <div class="factor-contribution">
                        <strong>"Contribution to total: "</strong>
                        {format!("+{:.2} points", factor.weighted_score)}
                    </div>
                    <div class="factor-reasoning">{factor.reasoning.clone()}</div>
                    {(!factor.indicators.is_empty())
                        .then(|| {
                            view! {
                                <div class="factor-indicators">
                                    <strong>"Detected indicators:"</strong>
                                    <ul>
                                        {factor
                                            .indicators
                                            .iter()
                                            .map(|ind| view! { <li>{ind.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })}
                </div>
            }
        })
        .collect_view();

    let reasoning_steps = (!breakdown.reasoning.is_empty()).then(|| {
        let steps = breakdown
            .reasoning
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let impact = step.impact.to_lowercase();
                view! {
                    <div class=format!("reasoning-step {impact}")>
                        <div class="step-number">{index + 1}</div>
                        <div class="step-content">
                            <div class="step-header">
                                <strong>{step.factor.clone()}</strong>
                                <span class=format!("impact-badge impact-{impact}")>
                                    {format!("{} IMPACT", step.impact.to_uppercase())}
                                </span>
                            </div>
                            <div class="step-explanation">{step.explanation.clone()}</div>
                            {(!step.indicators.is_empty())
                                .then(|| {
                                    view! {
                                        <div class="step-indicators">
                                            <strong>"Evidence: "</strong>
                                            {step.indicators.join(", ")}
                                        </div>
                                    }
                                })}
                        </div>
                    </div>
                }
            })
            .collect_view();
        view! {
            <div class="reasoning-narrative">
                <h3>"Why This Score? Step-by-Step Reasoning"</h3>
                <div class="reasoning-timeline">{steps}</div>
            </div>
        }
    });

    let verification_rows = breakdown
        .factors
        .iter()
        .map(|(key, factor)| {
            view! {
                <tr>
                    <td>{format_factor_name(key)}</td>
                    <td>{format!("{:.2}/10", factor.score)}</td>
                    <td>{format!("{:.0}%", factor.weight * 100.0)}</td>
                    <td>{format!("+{:.2}", factor.weighted_score)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="urgency-breakdown-container">
            <div class="urgency-header">
                <h2>"Urgency Analysis - Transparent Scoring"</h2>
                <p class="urgency-subtitle">
                    "Understanding why this request scored "
                    <strong>{format!("{score}/10")}</strong>
                    {format!(" ({})", level.label())}
                </p>
            </div>

            <div class="urgency-overall" style=format!("border-left-color: {color}")>
                <div class="urgency-score-circle" style=format!("border-color: {color}")>
                    <div class="score-value" style=format!("color: {color}")>{score}</div>
                    <div class="score-max">"/10"</div>
                </div>
                <div class="urgency-summary">
                    <h3 style=format!("color: {color}")>
                        {format!("{} PRIORITY", level.label())}
                    </h3>
                    <p>{report.urgency_reasoning.clone().unwrap_or_default()}</p>
                </div>
            </div>

            {recommendation_box}

            <div class="factors-section">
                <h3>"Detailed Factor Analysis"</h3>
                <p class="factors-description">
                    "Each weighted factor below shows how it contributed to the final score."
                </p>
                <div class="factors-grid">{factor_cards}</div>
            </div>

            {reasoning_steps}

            <div class="calculation-verification">
                <h3>"Score Calculation Verification"</h3>
                <p>
                    <strong>"Formula: "</strong>
                    "sum of (factor score x factor weight) across all factors"
                </p>
                <table class="calculation-table">
                    <thead>
                        <tr>
                            <th>"Factor"</th>
                            <th>"Score"</th>
                            <th>"Weight"</th>
                            <th>"Contribution"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {verification_rows}
                        <tr class="total-row">
                            <td colspan="3">
                                <strong>"Total weighted score:"</strong>
                            </td>
                            <td>
                                <strong>{format!("{total:.2}")}</strong>
                            </td>
                        </tr>
                        <tr class="final-row">
                            <td colspan="3">
                                <strong>"Final score (rounded):"</strong>
                            </td>
                            <td>
                                <strong style=format!("color: {color}")>
                                    {format!("{score}/10")}
                                </strong>
                            </td>
                        </tr>
                    </tbody>
                </table>
            </div>

            <div class="transparency-notice">
                <p>
                    <strong>"Transparency guarantee: "</strong>
                    "this urgency score comes from a documented algorithm with "
                    "published weights and factors; every decision above is auditable."
                </p>
            </div>
        </div>
    }
    .into_any()
}
