//! Sample internet plan records used by the comparison table

/// What a plan is a good fit for
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UseCase {
    WorkFromHome,
    Gaming,
    Streaming,
    LargeHousehold,
}

impl UseCase {
    /// All use cases in chip display order
    pub const ALL: [UseCase; 4] = [
        UseCase::WorkFromHome,
        UseCase::Gaming,
        UseCase::Streaming,
        UseCase::LargeHousehold,
    ];

    /// Filter chip label
    pub fn label(&self) -> &'static str {
        match self {
            UseCase::WorkFromHome => "Work from Home",
            UseCase::Gaming => "Gaming",
            UseCase::Streaming => "Streaming",
            UseCase::LargeHousehold => "Large Household",
        }
    }

    /// Lowercase label shown in the "Best For" chips
    pub fn short_label(&self) -> &'static str {
        match self {
            UseCase::WorkFromHome => "work from home",
            UseCase::Gaming => "gaming",
            UseCase::Streaming => "streaming",
            UseCase::LargeHousehold => "large household",
        }
    }
}

/// Connection type / contract tags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanTag {
    Fiber,
    Cable,
    NoContract,
}

/// A single provider plan shown in the comparison table
#[derive(Clone, Debug, PartialEq)]
pub struct PlanRecord {
    pub id: &'static str,
    pub provider: &'static str,
    pub provider_color: &'static str,
    pub name: &'static str,
    /// Human readable speed, e.g. `940 Mbps`
    pub speed: &'static str,
    /// Download speed in Mbps
    pub speed_value: u32,
    /// Human readable price, e.g. `$49.99/mo`
    pub price: &'static str,
    pub price_note: &'static str,
    pub features: &'static [&'static str],
    pub tags: &'static [PlanTag],
    pub best_for: &'static [UseCase],
}

impl PlanRecord {
    pub fn is_best_for(&self, use_case: UseCase) -> bool {
        self.best_for.contains(&use_case)
    }
}

const EXAMPLE_PRICE: &str = "Example price, varies by location";
const AUTOPAY_PRICE: &str = "Example price with autopay";
const FIRST_YEAR_PRICE: &str = "Example price for first year";

/// The eight sample plans, in display order
pub fn sample_plans() -> Vec<PlanRecord> {
    use PlanTag::*;
    use UseCase::*;

    vec![
        PlanRecord {
            id: "v1",
            provider: "Verizon",
            provider_color: "#ee0000",
            name: "Fios 300",
            speed: "300 Mbps",
            speed_value: 300,
            price: "$49.99/mo",
            price_note: EXAMPLE_PRICE,
            features: &["Symmetrical upload/download", "No data caps", "Free router for 12 mo"],
            tags: &[Fiber, NoContract],
            best_for: &[Streaming, WorkFromHome],
        },
        PlanRecord {
            id: "v2",
            provider: "Verizon",
            provider_color: "#ee0000",
            name: "Fios Gigabit",
            speed: "940 Mbps",
            speed_value: 940,
            price: "$89.99/mo",
            price_note: EXAMPLE_PRICE,
            features: &["Symmetrical speeds", "Unlimited data", "Whole-home WiFi option"],
            tags: &[Fiber, NoContract],
            best_for: &[Gaming, Streaming, WorkFromHome, LargeHousehold],
        },
        PlanRecord {
            id: "s1",
            provider: "Spectrum",
            provider_color: "#0075c9",
            name: "Internet",
            speed: "300 Mbps",
            speed_value: 300,
            price: "$49.99/mo",
            price_note: EXAMPLE_PRICE,
            features: &["No contracts", "Free modem", "Free antivirus"],
            tags: &[Cable, NoContract],
            best_for: &[Streaming, WorkFromHome],
        },
        PlanRecord {
            id: "s2",
            provider: "Spectrum",
            provider_color: "#0075c9",
            name: "Internet Ultra",
            speed: "500 Mbps",
            speed_value: 500,
            price: "$69.99/mo",
            price_note: EXAMPLE_PRICE,
            features: &["No contracts", "Free modem", "Advanced WiFi option"],
            tags: &[Cable, NoContract],
            best_for: &[Gaming, Streaming, WorkFromHome],
        },
        PlanRecord {
            id: "a1",
            provider: "AT&T",
            provider_color: "#00a8e0",
            name: "Fiber 300",
            speed: "300 Mbps",
            speed_value: 300,
            price: "$55/mo",
            price_note: AUTOPAY_PRICE,
            features: &["Symmetrical speeds", "Unlimited data", "Smart Home Manager"],
            tags: &[Fiber],
            best_for: &[Streaming, WorkFromHome],
        },
        PlanRecord {
            id: "a2",
            provider: "AT&T",
            provider_color: "#00a8e0",
            name: "Fiber 1 Gig",
            speed: "1000 Mbps",
            speed_value: 1000,
            price: "$80/mo",
            price_note: AUTOPAY_PRICE,
            features: &["Symmetrical speeds", "Unlimited data", "HBO Max included"],
            tags: &[Fiber],
            best_for: &[Gaming, Streaming, WorkFromHome, LargeHousehold],
        },
        PlanRecord {
            id: "o1",
            provider: "Optimum",
            provider_color: "#ff6900",
            name: "Optimum 300",
            speed: "300 Mbps",
            speed_value: 300,
            price: "$40/mo",
            price_note: FIRST_YEAR_PRICE,
            features: &["No annual contract", "Free installation", "Smart WiFi 6"],
            tags: &[Fiber, Cable, NoContract],
            best_for: &[Streaming, WorkFromHome],
        },
        PlanRecord {
            id: "o2",
            provider: "Optimum",
            provider_color: "#ff6900",
            name: "Optimum Fiber 1 Gig",
            speed: "940 Mbps",
            speed_value: 940,
            price: "$80/mo",
            price_note: FIRST_YEAR_PRICE,
            features: &["Fiber network", "No data caps", "WiFi 6 router included"],
            tags: &[Fiber, NoContract],
            best_for: &[Gaming, Streaming, WorkFromHome, LargeHousehold],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_plans_have_unique_ids() {
        let plans = sample_plans();
        let ids: HashSet<&str> = plans.iter().map(|p| p.id).collect();

        assert_eq!(plans.len(), 8);
        assert_eq!(ids.len(), plans.len());
    }

    #[test]
    fn test_sample_plan_speed_labels_match_values() {
        for plan in sample_plans() {
            assert_eq!(plan.speed, format!("{} Mbps", plan.speed_value));
        }
    }

    #[test]
    fn test_best_for_and_tags() {
        let plans = sample_plans();
        let optimum = plans.iter().find(|p| p.id == "o1").unwrap();

        assert!(optimum.is_best_for(UseCase::Streaming));
        assert!(!optimum.is_best_for(UseCase::Gaming));
        assert!(optimum.tags.contains(&PlanTag::Cable));
        assert!(optimum.tags.contains(&PlanTag::Fiber));
    }
}
