use geoexport_core::prelude::*;

#[test]
fn builtin_mexico_has_all_states() {
    let db = DatasetVariant::Mexico.load().unwrap();
    assert_eq!(db.country_count(), 1);

    let mx = &db.countries()[0];
    assert_eq!((mx.name(), mx.code()), ("Mexico", "MX"));
    assert_eq!(mx.total_regions(), 32);
    assert_eq!(mx.regions()[0].code(), Some("01"));
    assert_eq!(mx.regions()[31].name(), "Zacatecas");
    assert_eq!(mx.find_region("Ciudad de Mexico").unwrap().total_cities(), 10);
}

#[test]
fn builtin_global_keeps_table_order() {
    let db = DatasetVariant::Global.load().unwrap();
    let codes: Vec<_> = db.countries().iter().map(Country::code).collect();
    assert_eq!(codes, ["US", "CA", "BR", "ES", "DE", "JP", "MX"]);

    // The abbreviated Mexico entry is its own variant, not the detailed table.
    let mx = db.find_country_by_code("MX").unwrap();
    assert_eq!(mx.total_regions(), 4);
    assert!(mx.regions().iter().all(|r| r.code().is_none()));
}

#[test]
fn totals_equal_sum_of_children() {
    for variant in DatasetVariant::ALL {
        let db = variant.build().unwrap();
        for country in db.countries() {
            let summed: usize = country.regions().iter().map(|r| r.cities().len()).sum();
            assert_eq!(country.total_cities(), summed, "{}", country.name());
            assert_eq!(country.total_regions(), country.regions().len());
        }
        let stats = db.stats();
        assert_eq!(stats.cities, db.cities().count());
    }
}

#[test]
fn every_builtin_city_is_principal() {
    for variant in DatasetVariant::ALL {
        let db = variant.load().unwrap();
        assert!(db.cities().all(|e| e.city.is_major()));
    }
}

#[test]
fn build_is_deterministic() {
    let a = DatasetVariant::Global.build().unwrap();
    let b = DatasetVariant::Global.build().unwrap();
    assert_eq!(a, b);
}

#[test]
fn lookup_key_without_region_fails_loudly() {
    let tables = [CountryTable {
        name: "Germany",
        code: "DE",
        regions: &[RegionEntry::new("Bavaria")],
        principal_cities: &[("Bavaria", &["Munich"]), ("Saxony", &["Dresden"])],
    }];

    let err = build_dataset(&tables).unwrap_err();
    match &err {
        ExportError::MissingMapping { key, table, country } => {
            assert_eq!(key, "Saxony");
            assert_eq!(*table, MappingTable::Regions);
            assert_eq!(country, "Germany");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("Saxony"));
}

#[test]
fn region_without_lookup_entry_fails_loudly() {
    let tables = [CountryTable {
        name: "Japan",
        code: "JP",
        regions: &[RegionEntry::new("Tokyo"), RegionEntry::new("Osaka")],
        principal_cities: &[("Tokyo", &["Tokyo"])],
    }];

    let err = build_dataset(&tables).unwrap_err();
    assert!(matches!(
        err,
        ExportError::MissingMapping { ref key, table: MappingTable::PrincipalCities, .. } if key == "Osaka"
    ));
    assert!(err.to_string().contains("Osaka"));
}

#[test]
fn duplicate_country_code_is_rejected() {
    let tables = [
        CountryTable {
            name: "Mexico",
            code: "MX",
            regions: &[],
            principal_cities: &[],
        },
        CountryTable {
            name: "México",
            code: "MX",
            regions: &[],
            principal_cities: &[],
        },
    ];

    assert!(matches!(
        build_dataset(&tables),
        Err(ExportError::DuplicateCountryCode(code)) if code == "MX"
    ));
}

#[test]
fn duplicate_region_name_is_rejected() {
    let tables = [CountryTable {
        name: "Canada",
        code: "CA",
        regions: &[RegionEntry::new("Quebec"), RegionEntry::new("Quebec")],
        principal_cities: &[("Quebec", &["Laval"])],
    }];

    assert!(matches!(
        build_dataset(&tables),
        Err(ExportError::DuplicateRegion { region, .. }) if region == "Quebec"
    ));
}
