use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::FraudRoiError;

/// The four ways a fraud team can staff alert investigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Approach {
    Manual,
    Rules,
    Ml,
    Agents,
}

impl Approach {
    /// Matrix column order, oldest generation first.
    pub const ALL: [Approach; 4] = [
        Approach::Manual,
        Approach::Rules,
        Approach::Ml,
        Approach::Agents,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Rules => "rules",
            Self::Ml => "ml",
            Self::Agents => "agents",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Manual => "Manual Teams",
            Self::Rules => "Rule Engines",
            Self::Ml => "ML Platforms",
            Self::Agents => "AI Agents",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Rules => "Rules",
            Self::Ml => "ML",
            Self::Agents => "Agents",
        }
    }

    pub fn era(&self) -> &'static str {
        match self {
            Self::Manual => "Gen 0",
            Self::Rules => "Gen 1",
            Self::Ml => "Gen 2",
            Self::Agents => "Gen 3",
        }
    }

    /// Representative vendors, if the approach is a product category.
    pub fn examples(&self) -> Option<&'static str> {
        match self {
            Self::Manual => None,
            Self::Rules => Some("FICO Falcon, Actimize, Verafin"),
            Self::Ml => Some("Unit21, Sardine, Featurespace"),
            Self::Agents => Some("Socratix AI"),
        }
    }

    /// The approach being positioned.
    pub fn is_highlighted(&self) -> bool {
        matches!(self, Self::Agents)
    }

    pub fn profile(&self) -> ApproachProfile {
        ApproachProfile {
            id: *self,
            label: self.label(),
            short_label: self.short_label(),
            era: self.era(),
            examples: self.examples(),
            highlighted: self.is_highlighted(),
        }
    }
}

impl std::fmt::Display for Approach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Approach {
    type Err = FraudRoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        Approach::ALL
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| FraudRoiError::UnknownApproach(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApproachProfile {
    pub id: Approach,
    pub label: &'static str,
    pub short_label: &'static str,
    pub era: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<&'static str>,
    pub highlighted: bool,
}

/// One value per approach, in matrix column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerApproach<T> {
    pub manual: T,
    pub rules: T,
    pub ml: T,
    pub agents: T,
}

impl<T: Copy> PerApproach<T> {
    pub fn get(&self, approach: Approach) -> T {
        match approach {
            Approach::Manual => self.manual,
            Approach::Rules => self.rules,
            Approach::Ml => self.ml,
            Approach::Agents => self.agents,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Approach, T)> + '_ {
        Approach::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_roundtrips_ids() {
        for a in Approach::ALL {
            assert_eq!(a.id().parse::<Approach>().unwrap(), a);
        }
        assert_eq!(" ML ".parse::<Approach>().unwrap(), Approach::Ml);
        assert!(matches!(
            "outsourcing".parse::<Approach>(),
            Err(FraudRoiError::UnknownApproach(_))
        ));
    }

    #[test]
    fn test_only_agents_highlighted() {
        let highlighted: Vec<Approach> = Approach::ALL
            .into_iter()
            .filter(|a| a.is_highlighted())
            .collect();
        assert_eq!(highlighted, vec![Approach::Agents]);
        assert!(Approach::Manual.profile().examples.is_none());
    }

    #[test]
    fn test_per_approach_iter_order() {
        let scores = PerApproach {
            manual: 1,
            rules: 2,
            ml: 3,
            agents: 4,
        };
        let order: Vec<(Approach, u8)> = scores.iter().collect();
        assert_eq!(order[0], (Approach::Manual, 1));
        assert_eq!(order[3], (Approach::Agents, 4));
    }
}
