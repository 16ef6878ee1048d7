use catalog_model::columns::MANDATORY_COLUMNS;
use catalog_model::{Brand, EnrichColumns, MissingReference, Projection};

#[test]
fn every_profile_carries_the_mandatory_columns() {
    for brand in Brand::ALL {
        let profile = brand.profile();
        for column in MANDATORY_COLUMNS {
            assert!(
                profile.output_columns.contains(&column),
                "{brand} output schema lacks {column}"
            );
        }
    }
}

#[test]
fn profile_brand_matches_lookup() {
    for brand in Brand::ALL {
        assert_eq!(brand.profile().brand, brand);
    }
}

#[test]
fn style_column_is_part_of_the_schema() {
    for brand in Brand::ALL {
        let profile = brand.profile();
        assert!(profile.output_columns.contains(&profile.style_column));
    }
}

#[test]
fn projection_modes_per_brand() {
    let restricted: Vec<Brand> = Brand::ALL
        .into_iter()
        .filter(|b| b.profile().projection == Projection::Restrict)
        .collect();
    assert_eq!(restricted, vec![Brand::Ch, Brand::Ne, Brand::Fb]);
}

#[test]
fn parse_only_brands_stop_without_reference() {
    let parse_only: Vec<Brand> = Brand::ALL
        .into_iter()
        .filter(|b| b.profile().missing_reference == MissingReference::ParseOnly)
        .collect();
    assert_eq!(parse_only, vec![Brand::Ch, Brand::Sk, Brand::Ne, Brand::Pb]);
}

#[test]
fn enrichment_passes_never_copy_their_own_key() {
    for brand in Brand::ALL {
        for pass in brand.profile().enrichment {
            if let EnrichColumns::Listed(columns) = pass.columns {
                assert!(!columns.contains(&pass.key), "{brand} copies its join key");
            }
        }
    }
}

#[test]
fn display_names() {
    assert_eq!(Brand::Ch.display_name(), "Cole Haan");
    assert_eq!(Brand::Pb.display_name(), "Psycho Bunny");
    assert_eq!(Brand::Ad.display_name(), "Adolfo");
}
