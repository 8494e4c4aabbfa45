use crate::detection::catalog::{
    CatalogError, CategoryIndicators, FraudCategory, IndicatorCatalog, IndicatorDefinition,
};

#[test]
fn standard_catalog_reproduces_tuned_weights() {
    let catalog = IndicatorCatalog::standard();

    let discount = &catalog.categories()[0];
    assert_eq!(discount.category, FraudCategory::SinglePersonDiscount);
    assert_eq!(discount.indicators.len(), 5);
    assert_eq!(discount.indicators[0].key, "multiple_utility_accounts");
    assert_eq!(discount.indicators[0].weight, 0.8);
    assert_eq!(discount.indicators[1].key, "electoral_register_mismatch");
    assert_eq!(discount.indicators[1].weight, 0.9);

    let cuckooing = catalog
        .categories()
        .iter()
        .find(|entry| entry.category == FraudCategory::Cuckooing)
        .expect("cuckooing declared");
    assert_eq!(cuckooing.indicators.len(), 6);
    assert_eq!(cuckooing.indicators[5].key, "police_intelligence");
    assert_eq!(cuckooing.indicators[5].weight, 0.95);

    assert_eq!(catalog.mitigating().len(), 6);
    let self_reported = catalog
        .mitigating()
        .iter()
        .find(|definition| definition.key == "self_reported")
        .expect("self_reported declared");
    assert_eq!(self_reported.weight, -0.4);
    assert!(catalog
        .mitigating()
        .iter()
        .all(|definition| definition.weight < 0.0));
}

#[test]
fn category_scan_order_matches_declaration_order() {
    let labels: Vec<_> = IndicatorCatalog::standard()
        .categories()
        .iter()
        .map(|entry| entry.category.label())
        .collect();

    assert_eq!(
        labels,
        vec![
            "single_person_discount",
            "student_exemption",
            "empty_property",
            "cuckooing",
        ]
    );
}

#[test]
fn empty_category_is_a_construction_error() {
    let result = IndicatorCatalog::new(
        vec![CategoryIndicators {
            category: FraudCategory::PropertyBanding,
            indicators: Vec::new(),
        }],
        Vec::new(),
    );

    match result {
        Err(CatalogError::EmptyCategory(label)) => assert_eq!(label, "property_banding"),
        Ok(_) => panic!("empty category must be rejected at construction"),
    }
}

#[test]
fn custom_catalog_with_indicators_constructs() {
    let catalog = IndicatorCatalog::new(
        vec![CategoryIndicators {
            category: FraudCategory::CouncilTaxReduction,
            indicators: vec![IndicatorDefinition::new(
                "undeclared_income",
                "Income stream omitted from the reduction claim",
                0.9,
            )],
        }],
        vec![IndicatorDefinition::new(
            "self_reported",
            "Self-reported the change",
            -0.4,
        )],
    )
    .expect("non-empty categories construct");

    assert_eq!(catalog.categories().len(), 1);
    assert_eq!(catalog.mitigating().len(), 1);
}

#[test]
fn only_cuckooing_is_safeguarding_sensitive() {
    assert!(FraudCategory::Cuckooing.is_safeguarding_sensitive());
    assert!(!FraudCategory::SinglePersonDiscount.is_safeguarding_sensitive());
    assert!(!FraudCategory::EmptyProperty.is_safeguarding_sensitive());
}
