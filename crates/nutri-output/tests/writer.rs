use std::fs;

use nutri_model::{CountryTable, IngredientKind, MarkerTable, SourceDataset, SourceTable};
use nutri_normalization::{NormalizationContext, build_reference_catalog, normalize_dataset};
use nutri_output::{OutputError, write_outputs, write_references};

fn fixture() -> SourceDataset {
    SourceDataset {
        vitamins: SourceTable::new(IngredientKind::Vitamin)
            .with_country(
                CountryTable::new("Argentina")
                    .with_entry("Vitamina A / Retinol (µg)", "180 - 3000 [1]"),
            )
            .with_country(
                CountryTable::new("Guatemala")
                    .with_entry("Colina (mg)", "AL:80-600 / PF:NE-3500 [61]"),
            )
            .with_country(
                CountryTable::new("Perú").with_entry("Beta Caroteno (mg)", "No establecidos"),
            ),
        minerals: SourceTable::new(IngredientKind::Mineral).with_country(
            CountryTable::new("Chile").with_entry("Zinc (mg)", "1,5 - 25 [1, 2]"),
        ),
        vitamin_references: MarkerTable::new(IngredientKind::Vitamin)
            .with_marker("1", "Como Retinol Equivalente (RE).")
            .with_marker("61", "AL: alimentos, PF: farmacéuticos"),
        mineral_references: MarkerTable::new(IngredientKind::Mineral)
            .with_marker("1", "Para embarazadas."),
        strategies: None,
    }
}

#[test]
fn writes_normalized_table() {
    let dataset = fixture();
    let normalization = normalize_dataset(&dataset, &NormalizationContext::default());
    let catalog =
        build_reference_catalog(&dataset.vitamin_references, &dataset.mineral_references);
    let dir = tempfile::tempdir().expect("create temp dir");
    let out_dir = dir.path().join("output");

    let paths = write_outputs(&out_dir, &normalization.records, &catalog).expect("write outputs");
    for path in paths.all() {
        assert!(path.exists(), "{} missing", path.display());
    }

    let text = fs::read_to_string(&paths.records).expect("read records");
    insta::assert_snapshot!(text.trim_end(), @r#"
    country,ingredient,kind,unit,minimum,maximum,established,category,references,original_value
    Argentina,Vitamina A / Retinol,Vitamin,µg,180.0,3000.0,true,Standard,1,180 - 3000 [1]
    Guatemala,Colina,Vitamin,mg,80.0,600.0,true,Food Supplements,61,AL:80-600 / PF:NE-3500 [61]
    Guatemala,Colina,Vitamin,mg,3500.0,3500.0,true,Pharmaceutical Products,61,AL:80-600 / PF:NE-3500 [61]
    Perú,Beta Caroteno,Vitamin,mg,,,false,Standard,,No establecidos
    Chile,Zinc,Mineral,mg,1.5,25.0,true,Standard,"1,2","1,5 - 25 [1, 2]"
    "#);
}

#[test]
fn writes_reference_tables_per_kind() {
    let dataset = fixture();
    let catalog =
        build_reference_catalog(&dataset.vitamin_references, &dataset.mineral_references);
    let dir = tempfile::tempdir().expect("create temp dir");

    let paths = write_outputs(dir.path(), &[], &catalog).expect("write outputs");

    let vitamins = fs::read_to_string(&paths.vitamin_references).expect("read vitamins");
    insta::assert_snapshot!(vitamins.trim_end(), @r#"
    marker_id,description,kind
    1,Como Retinol Equivalente (RE).,Vitamin
    61,"AL: alimentos, PF: farmacéuticos",Vitamin
    "#);

    let minerals = fs::read_to_string(&paths.mineral_references).expect("read minerals");
    assert_eq!(
        minerals.lines().collect::<Vec<_>>(),
        vec!["marker_id,description,kind", "1,Para embarazadas.,Mineral"]
    );
}

#[test]
fn writes_references_to_any_writer() {
    let dataset = fixture();
    let catalog =
        build_reference_catalog(&dataset.vitamin_references, &dataset.mineral_references);
    let mut buffer = Vec::new();
    write_references(&mut buffer, catalog.entries()).expect("write references");
    let text = String::from_utf8(buffer).expect("utf8");
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn unwritable_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let blocker = dir.path().join("file");
    fs::write(&blocker, "not a directory").expect("write blocker");

    let catalog = build_reference_catalog(
        &MarkerTable::new(IngredientKind::Vitamin),
        &MarkerTable::new(IngredientKind::Mineral),
    );
    let error = write_outputs(&blocker.join("out"), &[], &catalog).unwrap_err();
    assert!(matches!(error, OutputError::Io { .. }));
}
