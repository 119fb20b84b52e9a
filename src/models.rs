use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treats an explicit `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Row ids may come back as text or as numbers depending on the column type.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Creative,
    Engine,
    Growth,
    Foundation,
}

impl ServiceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Creative => "Creative",
            ServiceCategory::Engine => "Engine",
            ServiceCategory::Growth => "Growth",
            ServiceCategory::Foundation => "Foundation",
        }
    }

    /// CSS modifier for the category badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ServiceCategory::Creative => "badge-creative",
            ServiceCategory::Engine => "badge-engine",
            ServiceCategory::Growth => "badge-growth",
            ServiceCategory::Foundation => "badge-foundation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Refresh,
    Utensils,
    Users,
    Spreadsheet,
    Document,
    Smartphone,
    Briefcase,
    Share,
    Camera,
    Monitor,
    Layers,
    TrendingUp,
    PenTool,
    ChefHat,
    Clipboard,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Refresh => "↻",
            Icon::Utensils => "🍴",
            Icon::Users => "👥",
            Icon::Spreadsheet => "▦",
            Icon::Document => "📄",
            Icon::Smartphone => "📱",
            Icon::Briefcase => "💼",
            Icon::Share => "⇪",
            Icon::Camera => "📷",
            Icon::Monitor => "🖥",
            Icon::Layers => "◫",
            Icon::TrendingUp => "↗",
            Icon::PenTool => "✒",
            Icon::ChefHat => "👨‍🍳",
            Icon::Clipboard => "📋",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ServiceCategory,
    pub icon: Icon,
    pub tags: &'static [&'static str],
}

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        id: "rebrand",
        title: "RE-BRANDING",
        description: "Modernizing identity aesthetics.",
        category: ServiceCategory::Creative,
        icon: Icon::Refresh,
        tags: &["Refresh", "Identity"],
    },
    ServiceOffering {
        id: "recipe",
        title: "RECIPE DEVELOPMENT",
        description: "Signature dish creation & balance.",
        category: ServiceCategory::Foundation,
        icon: Icon::Utensils,
        tags: &["R&D", "Menu"],
    },
    ServiceOffering {
        id: "staff",
        title: "STAFF HIRING AND TRAINING",
        description: "Recruitment & training modules.",
        category: ServiceCategory::Foundation,
        icon: Icon::Users,
        tags: &["HR", "Training"],
    },
    ServiceOffering {
        id: "cost",
        title: "PRECISE FOOD COSTING",
        description: "Margin control & yield sheets.",
        category: ServiceCategory::Foundation,
        icon: Icon::Spreadsheet,
        tags: &["Finance", "Audit"],
    },
    ServiceOffering {
        id: "docs",
        title: "THOROUGH BACKEND DOCUMENTATION",
        description: "SOPs & legal frameworks.",
        category: ServiceCategory::Foundation,
        icon: Icon::Document,
        tags: &["Systems", "Legal"],
    },
    ServiceOffering {
        id: "online",
        title: "ONLINE ORDER STRATEGY SUPPORT",
        description: "Zomato/Swiggy growth hacking.",
        category: ServiceCategory::Growth,
        icon: Icon::Smartphone,
        tags: &["Sales", "Delivery"],
    },
    ServiceOffering {
        id: "ops",
        title: "OVERALL OPERATIONAL MANAGEMENT",
        description: "Day-to-day oversight & audits.",
        category: ServiceCategory::Engine,
        icon: Icon::Briefcase,
        tags: &["Mgmt", "SOPs"],
    },
    ServiceOffering {
        id: "social",
        title: "SOCIAL MEDIA HANDLING",
        description: "Community growth & handling.",
        category: ServiceCategory::Creative,
        icon: Icon::Share,
        tags: &["Growth", "Community"],
    },
    ServiceOffering {
        id: "content",
        title: "DIGITAL CONTENT CREATION (BOTH AGC & UGC)",
        description: "High-end AGC & UGC assets.",
        category: ServiceCategory::Creative,
        icon: Icon::Camera,
        tags: &["Video", "Photo"],
    },
    ServiceOffering {
        id: "web",
        title: "WEBSITE AND APP DEVELOPMENT",
        description: "Custom ordering platforms.",
        category: ServiceCategory::Growth,
        icon: Icon::Monitor,
        tags: &["Tech", "UX/UI"],
    },
];

/// Section tints assigned to portfolio entries by position.
pub const PORTFOLIO_COLORS: [&str; 16] = [
    "rgba(127, 29, 29, 0.4)",
    "rgba(124, 45, 18, 0.4)",
    "rgba(120, 53, 15, 0.4)",
    "rgba(113, 63, 18, 0.4)",
    "rgba(54, 83, 20, 0.4)",
    "rgba(6, 78, 59, 0.4)",
    "rgba(19, 78, 74, 0.4)",
    "rgba(22, 78, 99, 0.4)",
    "rgba(12, 74, 110, 0.4)",
    "rgba(30, 58, 138, 0.4)",
    "rgba(49, 46, 129, 0.4)",
    "rgba(76, 29, 149, 0.4)",
    "rgba(88, 28, 135, 0.4)",
    "rgba(112, 26, 117, 0.4)",
    "rgba(131, 24, 67, 0.4)",
    "rgba(136, 19, 55, 0.4)",
];

pub const IDLE_SECTION_COLOR: &str = "#09090b";

/// Raw `portfolio` row.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioRow {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image: String,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    pub color: &'static str,
}

impl PortfolioEntry {
    pub fn from_rows(rows: Vec<PortfolioRow>) -> Vec<PortfolioEntry> {
        rows.into_iter()
            .enumerate()
            .map(|(index, row)| PortfolioEntry {
                id: row.id,
                name: row.name,
                category: row.category,
                image: row.image,
                color: PORTFOLIO_COLORS[index % PORTFOLIO_COLORS.len()],
            })
            .collect()
    }

    pub fn short_id(&self) -> String {
        self.id.chars().take(4).collect()
    }
}

/// Two-digit, one-based position label ("01", "02", ... "10", "11").
pub fn position_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamOperator {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub role: String,
    #[serde(default, deserialize_with = "nullable")]
    pub exp: String,
    #[serde(default, deserialize_with = "nullable")]
    pub image: String,
    #[serde(default, deserialize_with = "nullable")]
    pub code: String,
    #[serde(default, deserialize_with = "nullable")]
    pub skills: Vec<String>,
}

impl TeamOperator {
    pub fn display_code(&self) -> String {
        if !self.code.is_empty() {
            return self.code.clone();
        }
        let prefix: String = self.name.to_uppercase().chars().take(3).collect();
        format!("OP_{}", prefix)
    }

    pub fn with_cache_buster(mut self, stamp: i64) -> Self {
        self.image = cache_busted(&self.image, stamp);
        self
    }
}

/// Appends a `v` query parameter so the browser refetches updated photos.
pub fn cache_busted(url: &str, stamp: i64) -> String {
    if url.contains('?') {
        format!("{}&v={}", url, stamp)
    } else {
        format!("{}?v={}", url, stamp)
    }
}

fn operator(
    id: &str,
    name: &str,
    role: &str,
    exp: &str,
    image: &str,
    code: &str,
    skills: [&str; 4],
) -> TeamOperator {
    TeamOperator {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        exp: exp.to_string(),
        image: image.to_string(),
        code: code.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// Roster shown until (or instead of) the `team` collection.
pub fn fallback_team() -> Vec<TeamOperator> {
    vec![
        operator(
            "01",
            "Shreyash",
            "CEO",
            "5+ YRS EXP",
            "https://images.unsplash.com/photo-1560250097-0b93528c311a?q=80&w=800&auto=format&fit=crop",
            "OP_PRIME",
            ["Team Handling", "P&L Optimization", "Web & App Development", "MIS System"],
        ),
        operator(
            "02",
            "Govind",
            "Strategy Officer",
            "7+ YRS EXP",
            "https://images.unsplash.com/photo-1556157382-97eda2d62296?q=80&w=800&auto=format&fit=crop",
            "OP_STRAT",
            ["Backend Operation", "Documentation", "Cost & Franchise Eng.", "Zomato & Swiggy Strategy"],
        ),
        operator(
            "03",
            "Rajat",
            "Operation Head",
            "7+ YRS EXP",
            "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=800&auto=format&fit=crop",
            "OP_G_OPS",
            ["On Store Operation", "Manpower Hiring", "Supply Chain Mgmt", "Staff Handling"],
        ),
        operator(
            "04",
            "Rushikesh",
            "Marketing Head",
            "5+ YRS EXP",
            "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?q=80&w=800&auto=format&fit=crop",
            "OP_MEDIA",
            ["Brand Creator", "Cinematography", "Social Media Handling", "UGC & AGC Creation"],
        ),
        operator(
            "05",
            "Himanshu",
            "Head Chef",
            "10+ YRS EXP",
            "https://images.unsplash.com/photo-1583394293214-28ded15ee548?q=80&w=800&auto=format&fit=crop",
            "OP_CULINARY",
            ["New Recipe Dev", "Manpower Training", "Kitchen Development", "Vendor Development"],
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStep {
    pub title: &'static str,
    pub desc: &'static str,
    pub tech: &'static str,
    pub icon: Icon,
}

pub const TIMELINE_STEPS: &[TimelineStep] = &[
    TimelineStep {
        title: "Concept & Branding",
        desc: "Logo, Moodboards, Interior Direction.",
        tech: "INITIALIZING_CORE_IDENTITY",
        icon: Icon::PenTool,
    },
    TimelineStep {
        title: "R&D & Menu",
        desc: "Recipe creation, tasting sessions, food costing.",
        tech: "COMPILING_FLAVOR_PROFILE",
        icon: Icon::ChefHat,
    },
    TimelineStep {
        title: "Operations Setup",
        desc: "Staff hiring, training manuals, supply chain.",
        tech: "CONFIGURING_HUMAN_RESOURCES",
        icon: Icon::Clipboard,
    },
    TimelineStep {
        title: "Digital Launch",
        desc: "Website, App, Social Media, Grand Opening.",
        tech: "DEPLOYING_TO_MARKET",
        icon: Icon::Smartphone,
    },
];

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub brand_name: String,
    pub service_interest: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn portfolio_colors_cycle_by_position() {
        let rows: Vec<PortfolioRow> = (0..18)
            .map(|i| PortfolioRow {
                id: format!("id-{}", i),
                name: format!("Brand {}", i),
                image: String::new(),
                category: String::new(),
            })
            .collect();
        let entries = PortfolioEntry::from_rows(rows);
        assert_eq!(entries[0].color, PORTFOLIO_COLORS[0]);
        assert_eq!(entries[15].color, PORTFOLIO_COLORS[15]);
        assert_eq!(entries[16].color, PORTFOLIO_COLORS[0]);
        assert_eq!(entries[17].color, PORTFOLIO_COLORS[1]);
    }

    #[test]
    fn portfolio_row_tolerates_null_category_and_numeric_id() {
        let rows: Vec<PortfolioRow> = serde_json::from_value(json!([
            { "id": "7f3c9a10-aaaa", "name": "Chai Point", "image": "a.png", "category": null },
            { "id": 42, "name": "Tandoor", "image": "b.png", "created_at": "2025-01-01" }
        ]))
        .unwrap();
        let entries = PortfolioEntry::from_rows(rows);
        assert_eq!(entries[0].category, "");
        assert_eq!(entries[0].short_id(), "7f3c");
        assert_eq!(entries[1].id, "42");
        assert_eq!(entries[1].short_id(), "42");
    }

    #[test]
    fn position_labels_are_zero_padded() {
        assert_eq!(position_label(0), "01");
        assert_eq!(position_label(8), "09");
        assert_eq!(position_label(9), "10");
        assert_eq!(position_label(41), "42");
    }

    #[test]
    fn display_code_falls_back_to_name_prefix() {
        let mut op = fallback_team().remove(0);
        assert_eq!(op.display_code(), "OP_PRIME");
        op.code.clear();
        assert_eq!(op.display_code(), "OP_SHR");
        op.name = "Al".into();
        assert_eq!(op.display_code(), "OP_AL");
    }

    #[test]
    fn team_row_with_missing_skills_decodes() {
        let op: TeamOperator = serde_json::from_value(json!({
            "id": 3,
            "name": "Rajat",
            "role": "Operation Head",
            "exp": "7+ YRS EXP",
            "image": "https://cdn.example/rajat.jpg",
            "skills": null
        }))
        .unwrap();
        assert_eq!(op.id, "3");
        assert!(op.skills.is_empty());
        assert_eq!(op.display_code(), "OP_RAJ");
    }

    #[test]
    fn cache_buster_respects_existing_query() {
        assert_eq!(cache_busted("https://x/a.jpg", 17), "https://x/a.jpg?v=17");
        assert_eq!(cache_busted("https://x/a.jpg?w=800", 17), "https://x/a.jpg?w=800&v=17");
    }

    #[test]
    fn fallback_team_is_complete() {
        let team = fallback_team();
        assert_eq!(team.len(), 5);
        assert!(team.iter().all(|op| op.skills.len() == 4 && !op.image.is_empty()));
    }

    #[test]
    fn lead_payload_uses_store_column_names() {
        let lead = LeadSubmission {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            brand_name: "Masala Co".into(),
            service_interest: "Full Brand Development".into(),
            phone: "+91 9876543210".into(),
        };
        assert_eq!(
            serde_json::to_value(&lead).unwrap(),
            json!({
                "name": "Asha",
                "email": "asha@example.com",
                "brand_name": "Masala Co",
                "service_interest": "Full Brand Development",
                "phone": "+91 9876543210"
            })
        );
    }
}
