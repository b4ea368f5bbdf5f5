use serde::Serialize;

/// One deliverable in the 30-day plan.
#[derive(Debug, Clone, Serialize)]
pub struct PlanItem {
    pub week: &'static str,
    pub title: &'static str,
    pub what: &'static str,
    pub deliverable: &'static str,
    /// How success is judged at the end of the window
    pub metric: &'static str,
}

static PLAN: [PlanItem; 3] = [
    PlanItem {
        week: "Week 1",
        title: "Build the competitive battle card system",
        what: "Sit in on sales calls. Catalog every objection buyers raise about switching from \
               Unit21, Sardine, or manual teams. Turn these into structured battle cards the \
               founders can pull up mid-call — with counter-positioning, ROI framing, and proof \
               points per objection.",
        deliverable: "Battle card deck (per competitor) + objection-handling playbook + a \
                      Notion/doc system founders can update live",
        metric: "Reduce founder prep time per sales call from ad-hoc to <5 min with a \
                 standardized reference",
    },
    PlanItem {
        week: "Week 2–3",
        title: "Close the feedback loop between customers and product",
        what: "Design a lightweight system to capture insights from every customer call and \
               pilot deployment. Tag by theme (integration friction, explainability gaps, \
               feature requests, fraud pattern types). Surface the top 3 recurring themes \
               weekly to prioritize the roadmap.",
        deliverable: "Customer insight tracker + weekly insight digest + first product \
                      requirements doc synthesized from real conversations",
        metric: "Zero customer insights lost between call and product decision. Every feature \
                 request traceable to a real conversation.",
    },
    PlanItem {
        week: "Week 3–4",
        title: "Build the ROI calculator for enterprise pilots",
        what: "Take this analysis and turn it into a customer-facing tool. Let prospects input \
               their team size, alert volume, and false positive rate — and see the projected \
               savings before signing. Embed it in the sales process so every pilot starts with \
               a clear success benchmark.",
        deliverable: "Customer-facing ROI calculator + integration into sales deck + pilot \
                      success criteria template",
        metric: "Every enterprise pilot starts with quantified baseline → measurable 'before vs. \
                 after' at renewal",
    },
];

pub fn plan_items() -> &'static [PlanItem] {
    &PLAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_is_ordered_by_week() {
        let weeks: Vec<&str> = plan_items().iter().map(|p| p.week).collect();
        assert_eq!(weeks, vec!["Week 1", "Week 2–3", "Week 3–4"]);
    }
}
