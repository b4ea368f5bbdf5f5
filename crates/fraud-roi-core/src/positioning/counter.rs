use serde::Serialize;

/// One-line positioning statement the matrix argues for.
pub const POSITIONING_STATEMENT: &str = "For fraud and risk teams drowning in alerts, Socratix is \
     the AI coworker that investigates autonomously — unlike ML platforms that detect threats \
     but still leave humans to do all the work.";

pub const POSITIONING_ANCHOR: &str = "Anchor category: AI-powered fraud tools. Differentiation: \
     autonomous investigation with explainable decisions. The competitive moat isn't detection \
     accuracy — it's investigation speed × explainability.";

/// A competitor's structural weakness turned into the agent's strength.
#[derive(Debug, Clone, Serialize)]
pub struct CounterPosition {
    pub against: &'static str,
    pub weakness: &'static str,
    pub strength: &'static str,
    pub analogy: &'static str,
}

static COUNTER_POSITIONS: [CounterPosition; 3] = [
    CounterPosition {
        against: "Manual Teams",
        weakness: "Cannot scale without linear headcount growth",
        strength: "AI agents scale non-linearly — 10x alerts ≠ 10x cost",
        analogy: "Like hiring 100 junior analysts who never sleep, never burn out, and get smarter every week",
    },
    CounterPosition {
        against: "Rule Engines (FICO, Actimize)",
        weakness: "Rigid rules can't adapt to novel fraud patterns",
        strength: "Agents learn from historical decisions and adapt in real-time",
        analogy: "Rules are a lock on the front door. Agents are a security guard who can think",
    },
    CounterPosition {
        against: "ML Platforms (Unit21, Sardine)",
        weakness: "Better detection, same investigation bottleneck — analysts still do all the work",
        strength: "Agents don't just detect — they investigate, gather evidence, and draft case narratives",
        analogy: "ML platforms gave analysts a better radar. Socratix gave them a copilot",
    },
];

pub fn counter_positions() -> &'static [CounterPosition] {
    &COUNTER_POSITIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_per_competitor() {
        let cps = counter_positions();
        assert_eq!(cps.len(), 3);
        assert!(cps[0].against.starts_with("Manual"));
        assert!(cps[2].against.starts_with("ML"));
        assert!(cps.iter().all(|cp| !cp.analogy.is_empty()));
    }
}
