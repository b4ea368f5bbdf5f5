use serde::Serialize;

use super::approach::{Approach, ApproachProfile, PerApproach};
use crate::{FraudRoiError, FraudRoiResult};

/// Top of the 1–5 scoring scale.
pub const MAX_SCORE: u8 = 5;

/// A buyer-facing dimension on which the four approaches are scored.
#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Why a buyer weighs this dimension
    pub buyer_care: &'static str,
    pub scores: PerApproach<u8>,
    pub details: PerApproach<&'static str>,
}

impl Attribute {
    /// Every approach tied at the best score for this attribute.
    pub fn leaders(&self) -> Vec<Approach> {
        let best = self.scores.iter().map(|(_, s)| s).max().unwrap_or(0);
        self.scores
            .iter()
            .filter(|(_, s)| *s == best)
            .map(|(a, _)| a)
            .collect()
    }
}

static ATTRIBUTES: [Attribute; 6] = [
    Attribute {
        id: "speed",
        label: "Investigation Speed",
        description: "Time from alert to decision-ready output",
        buyer_care: "High — directly impacts how many cases get resolved per day",
        scores: PerApproach {
            manual: 1,
            rules: 2,
            ml: 3,
            agents: 5,
        },
        details: PerApproach {
            manual: "Hours to a full day per case — analyst gathers data across tools, writes up narrative manually",
            rules: "Fast at flagging, but investigation still manual. Rules fire in ms, humans still spend 30-60 min per alert",
            ml: "Better prioritization reduces wasted time, but analysts still investigate every escalated alert. ~20-45 min per case",
            agents: "15 minutes per investigation (vs. full day). Agent gathers evidence, maps relationships, drafts narrative autonomously",
        },
    },
    Attribute {
        id: "fp",
        label: "False Positive Rate",
        description: "% of alerts that turn out to be legitimate activity",
        buyer_care: "Critical — up to 95% of alerts are false positives industry-wide, costing billions in wasted investigation",
        scores: PerApproach {
            manual: 2,
            rules: 1,
            ml: 4,
            agents: 4,
        },
        details: PerApproach {
            manual: "Depends on analyst skill. Experienced analysts can triage faster, but they're still reviewing every alert",
            rules: "Worst performer — rigid rules generate 80-95% false positive rates. Can't distinguish context",
            ml: "Behavioral analytics cut FP rates to 15-40%. Adaptive models learn what 'normal' looks like per customer",
            agents: "Comparable ML-level detection, plus AI pre-screening auto-resolves obvious false positives before human review",
        },
    },
    Attribute {
        id: "explain",
        label: "Explainability",
        description: "Can decisions be audited by regulators and compliance teams?",
        buyer_care: "Non-negotiable in regulated finance — SAR filings, audits, and legal hold all require decision trails",
        scores: PerApproach {
            manual: 5,
            rules: 5,
            ml: 2,
            agents: 4,
        },
        details: PerApproach {
            manual: "Fully explainable — humans document their reasoning. Gold standard for auditability",
            rules: "Deterministic and auditable — if rule X fires, you know exactly why. Regulators love this",
            ml: "Black-box problem. Models detect patterns but can't explain why. Major compliance risk in regulated environments",
            agents: "Explainable by design — each decision includes evidence chain, reasoning, and recommended action. Built for audits",
        },
    },
    Attribute {
        id: "deploy",
        label: "Deployment Time",
        description: "Time from contract to production value",
        buyer_care: "Matters for budget cycles — faster deployment means faster ROI realization",
        scores: PerApproach {
            manual: 3,
            rules: 2,
            ml: 2,
            agents: 5,
        },
        details: PerApproach {
            manual: "Hiring takes weeks, training takes months. Each new analyst needs domain ramp-up",
            rules: "Months-long implementation. Rule tuning, integration with data sources, testing cycles",
            ml: "Similar timeline — data ingestion, model training, integration. 3-6 months is typical",
            agents: "Days, not quarters. Plugs into existing fraud stack. No data migration required — agents learn from historical alerts",
        },
    },
    Attribute {
        id: "scale",
        label: "Scalability",
        description: "Can it handle 10x alert volume without 10x cost?",
        buyer_care: "Essential — fraud attacks are scaling with AI while team budgets aren't",
        scores: PerApproach {
            manual: 1,
            rules: 4,
            ml: 4,
            agents: 5,
        },
        details: PerApproach {
            manual: "Linear scaling only — more alerts = more headcount = more cost. Cannot keep pace with AI-powered fraud",
            rules: "Rules scale computationally, but more rules = more alerts = more analysts needed to investigate",
            ml: "Good computational scale, but investigation bottleneck remains. Better prioritization helps but doesn't eliminate the problem",
            agents: "True non-linear scaling — agents handle investigation autonomously. 10x alerts doesn't mean 10x headcount",
        },
    },
    Attribute {
        id: "cost",
        label: "Total Cost of Ownership",
        description: "All-in cost including software, headcount, and maintenance",
        buyer_care: "CFOs compare: fully-loaded analyst cost vs. software + reduced headcount needs",
        scores: PerApproach {
            manual: 1,
            rules: 3,
            ml: 3,
            agents: 4,
        },
        details: PerApproach {
            manual: "$70-85K per analyst fully loaded. 30%+ annual turnover means constant rehiring and retraining costs",
            rules: "Software licensing + engineering maintenance + analyst team. Rules proliferate and require constant tuning",
            ml: "Platform cost + reduced (but still significant) analyst team. Better efficiency but still labor-intensive",
            agents: "Software cost offset by dramatic headcount efficiency. Recovered analyst capacity redirected to high-value work",
        },
    },
];

pub fn attributes() -> &'static [Attribute] {
    &ATTRIBUTES
}

pub fn find_attribute(id: &str) -> FraudRoiResult<&'static Attribute> {
    let wanted = id.trim().to_lowercase();
    ATTRIBUTES
        .iter()
        .find(|a| a.id == wanted)
        .ok_or_else(|| FraudRoiError::UnknownAttribute(id.to_string()))
}

// ---------------------------------------------------------------------------
// Matrix view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ApproachTotal {
    pub approach: Approach,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub scores: PerApproach<u8>,
    pub leaders: Vec<Approach>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonMatrix {
    pub max_score: u8,
    pub approaches: Vec<ApproachProfile>,
    pub rows: Vec<MatrixRow>,
    pub totals: Vec<ApproachTotal>,
}

/// Sum of scores across all attributes, in column order.
pub fn score_totals() -> Vec<ApproachTotal> {
    Approach::ALL
        .into_iter()
        .map(|approach| ApproachTotal {
            approach,
            total: ATTRIBUTES
                .iter()
                .map(|attr| u32::from(attr.scores.get(approach)))
                .sum(),
        })
        .collect()
}

pub fn comparison_matrix() -> ComparisonMatrix {
    ComparisonMatrix {
        max_score: MAX_SCORE,
        approaches: Approach::ALL.iter().map(Approach::profile).collect(),
        rows: ATTRIBUTES
            .iter()
            .map(|attr| MatrixRow {
                id: attr.id,
                label: attr.label,
                description: attr.description,
                scores: attr.scores,
                leaders: attr.leaders(),
            })
            .collect(),
        totals: score_totals(),
    }
}
