mod common;

use catalog_core::Cleaner;
use catalog_core::parse::parse_slash_layout;
use catalog_ingest::ReferenceSet;
use polars::prelude::*;
use proptest::prelude::*;

use common::{frame, values};

fn style() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9]{1,5}"
}

fn item_name() -> impl Strategy<Value = String> {
    (style(), "[a-z ]{0,8}", prop::option::of("[A-Z0-9]{1,3}")).prop_map(|(style, desc, size)| {
        match size {
            Some(size) => format!("{style}/{desc}/{size}"),
            None => format!("{style}/{desc}"),
        }
    })
}

proptest! {
    #[test]
    fn style_key_is_first_slash_field(name in item_name()) {
        let parsed = parse_slash_layout(Some(&name));
        prop_assert_eq!(parsed.style.as_deref(), name.split('/').next());
    }

    #[test]
    fn cleaning_twice_keeps_style_keys(names in prop::collection::vec(item_name(), 1..8)) {
        let refs: Vec<Option<&str>> = names.iter().map(|n| Some(n.as_str())).collect();
        let table = frame(&[
            ("ItemName", refs.clone()),
            ("ItemCode", vec![Some("1"); names.len()]),
            ("Empresa", vec![Some("X"); names.len()]),
        ]);
        let cleaner = Cleaner::new("BI").unwrap();
        let once = cleaner.clean(&table, &ReferenceSet::new()).unwrap();
        let twice = cleaner.clean(&once.data, &ReferenceSet::new()).unwrap();
        prop_assert_eq!(values(&once.data, "U_Estilo"), values(&twice.data, "U_Estilo"));
    }

    #[test]
    fn enrichment_never_overwrites(
        rows in prop::collection::vec((style(), prop::option::of("[A-Z]{1,6}")), 1..10),
        reference in prop::collection::vec((style(), "[a-z]{1,6}"), 1..10),
    ) {
        let names: Vec<String> = rows.iter().map(|(s, _)| format!("{s}/item")).collect();
        let genders: Vec<Option<&str>> = rows.iter().map(|(_, g)| g.as_deref()).collect();
        let mut table = frame(&[
            ("ItemName", names.iter().map(|n| Some(n.as_str())).collect()),
            ("ItemCode", vec![Some("1"); rows.len()]),
            ("Empresa", vec![Some("X"); rows.len()]),
        ]);
        table.with_column(Series::new("U_Genero".into(), genders.clone())).unwrap();
        let references = ReferenceSet::new().with_collection(
            "Adolfo",
            frame(&[
                ("U_Estilo", reference.iter().map(|(s, _)| Some(s.as_str())).collect()),
                ("U_Genero", reference.iter().map(|(_, g)| Some(g.as_str())).collect()),
            ]),
        );

        let outcome = Cleaner::new("AD").unwrap().clean(&table, &references).unwrap();
        let out = values(&outcome.data, "U_Genero");
        for (idx, before) in genders.iter().enumerate() {
            if let Some(before) = before {
                prop_assert_eq!(out[idx].as_deref(), Some(*before));
            }
        }
    }

    #[test]
    fn first_reference_row_wins(
        key in style(),
        first in "[a-z]{1,6}",
        second in "[a-z]{1,6}",
    ) {
        let name = format!("{key}/item");
        let table = frame(&[
            ("ItemName", vec![Some(name.as_str())]),
            ("ItemCode", vec![Some("1")]),
            ("Empresa", vec![Some("X")]),
        ]);
        let references = ReferenceSet::new().with_collection(
            "Birkenstock",
            frame(&[
                ("U_Estilo", vec![Some(key.as_str()), Some(key.as_str())]),
                ("U_Categoria", vec![Some(first.as_str()), Some(second.as_str())]),
            ]),
        );
        let outcome = Cleaner::new("BI").unwrap().clean(&table, &references).unwrap();
        prop_assert_eq!(values(&outcome.data, "U_Categoria"), vec![Some(first.clone())]);
    }
}
