use serde::{Deserialize, Serialize};

/// Fraud patterns the triage engine knows how to score.
///
/// Category declaration order inside a catalog is load-bearing: the evaluator
/// scans categories in order and breaks raw-score ties in favor of the first
/// one declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudCategory {
    SinglePersonDiscount,
    StudentExemption,
    EmptyProperty,
    CouncilTaxReduction,
    PropertyBanding,
    Cuckooing,
}

impl FraudCategory {
    pub const fn label(self) -> &'static str {
        match self {
            FraudCategory::SinglePersonDiscount => "single_person_discount",
            FraudCategory::StudentExemption => "student_exemption",
            FraudCategory::EmptyProperty => "empty_property",
            FraudCategory::CouncilTaxReduction => "council_tax_reduction",
            FraudCategory::PropertyBanding => "property_banding",
            FraudCategory::Cuckooing => "cuckooing",
        }
    }

    /// Cuckooing cases involve a vulnerable resident and trigger the
    /// safeguarding escalation path in recommendation synthesis.
    pub const fn is_safeguarding_sensitive(self) -> bool {
        matches!(self, FraudCategory::Cuckooing)
    }
}

/// A named boolean signal with a tuned weight. Positive weights support a
/// fraud reading; negative weights are mitigating and support an honest-error
/// reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDefinition {
    pub key: String,
    pub description: String,
    pub weight: f64,
}

impl IndicatorDefinition {
    pub fn new(key: &str, description: &str, weight: f64) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
            weight,
        }
    }
}

/// Indicator set declared for one fraud category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryIndicators {
    pub category: FraudCategory,
    pub indicators: Vec<IndicatorDefinition>,
}

/// Immutable catalog of weighted indicators, fixed at construction.
///
/// The per-category lists drive the weighted scan in the evaluator; the
/// mitigating list is shared across categories and scored independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorCatalog {
    categories: Vec<CategoryIndicators>,
    mitigating: Vec<IndicatorDefinition>,
}

impl IndicatorCatalog {
    /// Build a catalog, rejecting any category declared with zero indicators.
    ///
    /// An empty category would make the per-category normalization divide by
    /// zero, so it is treated as a fatal configuration error rather than a
    /// runtime scoring anomaly.
    pub fn new(
        categories: Vec<CategoryIndicators>,
        mitigating: Vec<IndicatorDefinition>,
    ) -> Result<Self, CatalogError> {
        for entry in &categories {
            if entry.indicators.is_empty() {
                return Err(CatalogError::EmptyCategory(entry.category.label()));
            }
        }

        Ok(Self {
            categories,
            mitigating,
        })
    }

    /// The tuned catalog shipped with the engine. Weights are audit-sensitive
    /// constants; they determine classification outcomes and must not drift.
    pub fn standard() -> Self {
        let categories = vec![
            CategoryIndicators {
                category: FraudCategory::SinglePersonDiscount,
                indicators: vec![
                    IndicatorDefinition::new(
                        "multiple_utility_accounts",
                        "Multiple utility accounts in different names",
                        0.8,
                    ),
                    IndicatorDefinition::new(
                        "electoral_register_mismatch",
                        "Electoral register shows multiple adults",
                        0.9,
                    ),
                    IndicatorDefinition::new(
                        "social_media_evidence",
                        "Social media indicates cohabitation",
                        0.7,
                    ),
                    IndicatorDefinition::new(
                        "multiple_vehicles",
                        "Multiple vehicles registered at property",
                        0.6,
                    ),
                    IndicatorDefinition::new(
                        "credit_check_mismatch",
                        "Credit checks show multiple residents",
                        0.85,
                    ),
                ],
            },
            CategoryIndicators {
                category: FraudCategory::StudentExemption,
                indicators: vec![
                    IndicatorDefinition::new(
                        "post_graduation_claim",
                        "Claim continues after graduation date",
                        0.95,
                    ),
                    IndicatorDefinition::new(
                        "employment_income",
                        "Employment records during claimed study",
                        0.9,
                    ),
                    IndicatorDefinition::new(
                        "part_time_status",
                        "Part-time course claimed as full-time",
                        0.85,
                    ),
                    IndicatorDefinition::new(
                        "fake_documentation",
                        "Suspected fraudulent enrollment docs",
                        0.98,
                    ),
                    IndicatorDefinition::new(
                        "historical_pattern",
                        "Previous false student claims",
                        0.9,
                    ),
                ],
            },
            CategoryIndicators {
                category: FraudCategory::EmptyProperty,
                indicators: vec![
                    IndicatorDefinition::new(
                        "utility_usage",
                        "Utility usage in 'empty' property",
                        0.9,
                    ),
                    IndicatorDefinition::new(
                        "rental_listings",
                        "Property on rental platforms",
                        0.95,
                    ),
                    IndicatorDefinition::new(
                        "neighbor_reports",
                        "Neighbors report occupancy",
                        0.7,
                    ),
                    IndicatorDefinition::new(
                        "maintenance_activity",
                        "Regular maintenance observed",
                        0.6,
                    ),
                    IndicatorDefinition::new(
                        "postal_deliveries",
                        "Regular mail deliveries",
                        0.65,
                    ),
                ],
            },
            CategoryIndicators {
                category: FraudCategory::Cuckooing,
                indicators: vec![
                    IndicatorDefinition::new(
                        "sudden_payment_regularity",
                        "Sudden payment regularization",
                        0.8,
                    ),
                    IndicatorDefinition::new(
                        "behavior_change",
                        "Significant property usage change",
                        0.85,
                    ),
                    IndicatorDefinition::new(
                        "antisocial_reports",
                        "Increased antisocial behavior reports",
                        0.9,
                    ),
                    IndicatorDefinition::new(
                        "vulnerable_resident",
                        "Resident is vulnerable person",
                        0.7,
                    ),
                    IndicatorDefinition::new(
                        "payment_source_change",
                        "Unexplained payment source change",
                        0.75,
                    ),
                    IndicatorDefinition::new(
                        "police_intelligence",
                        "Police intelligence indicators",
                        0.95,
                    ),
                ],
            },
        ];

        let mitigating = vec![
            IndicatorDefinition::new(
                "immediate_cooperation",
                "Immediate cooperation when contacted",
                -0.3,
            ),
            IndicatorDefinition::new(
                "consistent_explanation",
                "Consistent explanations provided",
                -0.25,
            ),
            IndicatorDefinition::new(
                "documentation_provided",
                "Willingly provides documentation",
                -0.2,
            ),
            IndicatorDefinition::new("self_reported", "Self-reported the change", -0.4),
            IndicatorDefinition::new("first_occurrence", "First time occurrence", -0.15),
            IndicatorDefinition::new(
                "recent_life_change",
                "Recent bereavement/separation",
                -0.2,
            ),
        ];

        Self::new(categories, mitigating).expect("standard catalog declares no empty category")
    }

    /// Declared categories in scan order.
    pub fn categories(&self) -> &[CategoryIndicators] {
        &self.categories
    }

    /// Mitigating indicators shared across all categories.
    pub fn mitigating(&self) -> &[IndicatorDefinition] {
        &self.mitigating
    }
}

/// Error raised when a catalog is declared in an unusable shape.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("fraud category '{0}' is declared with zero indicators")]
    EmptyCategory(&'static str),
}
