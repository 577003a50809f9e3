use geoexport_core::prelude::*;

fn bavaria() -> Dataset {
    build_dataset(&[CountryTable {
        name: "Germany",
        code: "DE",
        regions: &[RegionEntry::coded("BY", "Bavaria"), RegionEntry::coded("SL", "Saarland")],
        principal_cities: &[("Bavaria", &["Munich", "O'Hara"]), ("Saarland", &[])],
    }])
    .unwrap()
}

/// Splits a SQL row line into its unescaped string literals. Panics on a
/// quote that neither closes a literal nor forms a doubled pair.
fn string_literals(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\'' {
            continue;
        }
        let mut lit = String::new();
        loop {
            match chars.next() {
                Some('\'') if chars.peek() == Some(&'\'') => {
                    chars.next();
                    lit.push('\'');
                }
                Some('\'') => break,
                Some(other) => lit.push(other),
                None => panic!("unterminated literal in {line}"),
            }
        }
        let next = chars.peek().copied();
        assert!(
            matches!(next, Some(',') | Some(')')),
            "stray quote after literal {lit:?} in {line}"
        );
        out.push(lit);
    }
    out
}

#[test]
fn statement_batch_escapes_single_quotes() {
    let db = bavaria();
    let sql = Exporter::new(&db, ExportOptions::default())
        .to_statement_batch()
        .unwrap()
        .to_string();

    assert!(sql.contains("'O''Hara'"), "{sql}");
    assert!(!sql.contains("'O'Hara'"));
}

#[test]
fn statement_batch_has_regions_then_cities() {
    let db = bavaria();
    let sql = Exporter::new(&db, ExportOptions::default())
        .to_statement_batch()
        .unwrap()
        .to_string();

    let regions = sql.find("INSERT INTO states (code, name, country_code) VALUES").unwrap();
    let cities = sql
        .find("INSERT INTO cities (name, state_code, country_code, is_major) VALUES")
        .unwrap();
    assert!(regions < cities);
    assert!(sql.contains("  ('BY', 'Bavaria', 'DE'),\n  ('SL', 'Saarland', 'DE');\n"));
    assert!(sql.contains("  ('Munich', 'BY', 'DE', TRUE),\n  ('O''Hara', 'BY', 'DE', TRUE);\n"));
    assert_eq!(sql.matches(';').count(), 2);
}

fn codeless_germany() -> Dataset {
    build_dataset(&[CountryTable {
        name: "Germany",
        code: "DE",
        regions: &[RegionEntry::new("Bavaria"), RegionEntry::new("Saxony")],
        principal_cities: &[("Bavaria", &["Munich"]), ("Saxony", &["Dresden"])],
    }])
    .unwrap()
}

#[test]
fn normalized_batch_rejects_regions_without_code() {
    let db = codeless_germany();
    let exporter = Exporter::new(&db, ExportOptions::default());

    let err = exporter.to_statement_batch().unwrap_err();
    assert!(matches!(err, ExportError::InvalidData(_)), "{err}");
    assert!(err.to_string().contains("Bavaria"), "{err}");
    assert!(exporter.render(OutputFormat::Sql).is_err());
}

#[test]
fn locations_batch_keeps_codeless_regions_linked() {
    let db = codeless_germany();
    let options = ExportOptions {
        sql_layout: SqlLayout::Locations,
        ..ExportOptions::default()
    };
    let sql = Exporter::new(&db, options)
        .to_statement_batch()
        .unwrap()
        .to_string();

    assert!(sql.contains("  ('Germany', 'DE', 'Bavaria', 'Munich', TRUE),\n"), "{sql}");
    assert!(sql.contains("  ('Germany', 'DE', 'Saxony', 'Dresden', TRUE);\n"), "{sql}");
    assert!(!sql.contains("NULL"));
}

#[test]
fn rescanned_literals_match_source_names() {
    for variant in DatasetVariant::ALL {
        let db = variant.load().unwrap();
        let options = ExportOptions {
            sql_layout: SqlLayout::Locations,
            ..ExportOptions::for_variant(variant)
        };
        let sql = Exporter::new(db, options)
            .to_statement_batch()
            .unwrap()
            .to_string();

        let rows: Vec<Vec<String>> = sql
            .lines()
            .filter(|l| l.starts_with("  ("))
            .map(string_literals)
            .collect();
        assert_eq!(rows.len(), db.total_cities());

        for (row, entry) in rows.iter().zip(db.cities()) {
            assert_eq!(
                row,
                &[
                    entry.country.name(),
                    entry.country.code(),
                    entry.region.name(),
                    entry.city.name(),
                ]
            );
        }
    }
}

#[test]
fn global_sql_contains_escaped_catalan_city() {
    let db = DatasetVariant::Global.load().unwrap();
    let exporter = Exporter::new(db, ExportOptions::for_variant(DatasetVariant::Global));
    let sql = exporter.to_statement_batch().unwrap().to_string();

    assert!(sql.contains("INSERT INTO locations (country, country_code, state, city, is_major) VALUES"));
    assert!(sql.contains("('Spain', 'ES', 'Catalonia', 'L''Hospitalet de Llobregat', TRUE)"));
}

#[test]
fn flat_table_has_one_row_per_city() {
    for variant in DatasetVariant::ALL {
        let db = variant.load().unwrap();
        let table = Exporter::new(db, ExportOptions::for_variant(variant)).to_flat_table();
        assert_eq!(table.len(), db.total_cities());

        let csv = String::from_utf8(table.to_csv_bytes().unwrap()).unwrap();
        assert_eq!(csv.lines().count(), db.total_cities() + 1);
    }
}

#[test]
fn mexico_flat_table_header_and_first_row() {
    let db = DatasetVariant::Mexico.load().unwrap();
    let csv = Exporter::new(db, ExportOptions::for_variant(DatasetVariant::Mexico))
        .to_flat_table()
        .to_csv_bytes()
        .unwrap();
    let text = String::from_utf8(csv).unwrap();
    let mut lines = text.lines();

    assert_eq!(
        lines.next(),
        Some("state_code,state_name,city_name,country_code,is_major")
    );
    assert_eq!(lines.next(), Some("01,Aguascalientes,Aguascalientes,MX,TRUE"));
    assert!(text.contains("09,Ciudad de México,Álvaro Obregón,MX,TRUE\n"));
}

#[test]
fn empty_region_stays_in_record_but_adds_no_rows() {
    let db = bavaria();
    let saarland = &db.countries()[0].regions()[1];
    assert_eq!(saarland.total_cities(), 0);

    let exporter = Exporter::new(&db, ExportOptions::default());
    let table = exporter.to_flat_table();
    assert_eq!(table.len(), 2);
    assert!(table.rows.iter().all(|row| row[1] != "Saarland"));

    let value = exporter.to_structured_record().unwrap().to_value().unwrap();
    let states = value[0]["states"].as_array().unwrap();
    assert_eq!(states.len(), 2);
    assert_eq!(states[1]["state_name"], "Saarland");
    assert_eq!(states[1]["total_cities"], 0);
    assert_eq!(states[1]["cities"].as_array().unwrap().len(), 0);
}

#[test]
fn structured_record_mirrors_the_mexico_layout() {
    let db = DatasetVariant::Mexico.load().unwrap();
    let exporter = Exporter::new(db, ExportOptions::for_variant(DatasetVariant::Mexico));
    let value = exporter.to_structured_record().unwrap().to_value().unwrap();

    assert_eq!(value["country"], "Mexico");
    assert_eq!(value["country_code"], "MX");
    assert_eq!(value["total_states"], 32);

    let nuevo_leon = &value["states"][18];
    assert_eq!(nuevo_leon["state_code"], "19");
    assert_eq!(nuevo_leon["state_name"], "Nuevo León");
    assert_eq!(nuevo_leon["total_cities"], 8);
    assert_eq!(nuevo_leon["cities"][0]["city_name"], "Monterrey");
    assert_eq!(nuevo_leon["cities"][0]["state"], "Nuevo León");
    assert_eq!(nuevo_leon["cities"][0]["country"], "Mexico");
    assert_eq!(nuevo_leon["cities"][0]["is_major"], true);
}

#[test]
fn structured_record_keeps_non_ascii_verbatim() {
    let db = DatasetVariant::Mexico.load().unwrap();
    let bytes = Exporter::new(db, ExportOptions::for_variant(DatasetVariant::Mexico))
        .render(OutputFormat::Json)
        .unwrap();
    let json = String::from_utf8(bytes).unwrap();

    assert!(json.contains("\"state_name\": \"Nuevo León\""));
    assert!(!json.contains("\\u"));
    assert!(json.starts_with("{\n  \"country\": \"Mexico\""));
}

#[test]
fn structured_record_round_trips() {
    let custom = bavaria();
    let cases: Vec<(&Dataset, ExportOptions)> = vec![
        (
            DatasetVariant::Mexico.load().unwrap(),
            ExportOptions::for_variant(DatasetVariant::Mexico),
        ),
        (
            DatasetVariant::Global.load().unwrap(),
            ExportOptions::for_variant(DatasetVariant::Global),
        ),
        (
            &custom,
            ExportOptions {
                terminology: Terminology::Regions,
                ..ExportOptions::default()
            },
        ),
    ];

    for (db, options) in cases {
        let json = Exporter::new(db, options)
            .to_structured_record()
            .unwrap()
            .to_json_string()
            .unwrap();
        let parsed = parse_structured_record(&json).unwrap();
        assert_eq!(&parsed, db);
    }
}

#[test]
fn renders_are_reproducible() {
    for variant in DatasetVariant::ALL {
        let first = variant.build().unwrap();
        let second = variant.build().unwrap();
        for format in OutputFormat::ALL {
            let a = Exporter::new(&first, ExportOptions::for_variant(variant))
                .render(format)
                .unwrap();
            let b = Exporter::new(&second, ExportOptions::for_variant(variant))
                .render(format)
                .unwrap();
            assert_eq!(a, b, "{variant} {format}");
        }
    }
}
