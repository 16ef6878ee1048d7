//! New Era: whitespace-normalized descriptions and league lookup by team.

use catalog_model::columns::{ITEM_NAME, U_DESCRIPCION, U_ESTILO, U_LIGA, U_TALLA, U_TEAM};
use catalog_model::{Brand, Diagnostic, codes};
use polars::prelude::DataFrame;

use super::BrandProcessor;
use super::common::{ParsedName, set_string_column, string_column_or_null};
use crate::error::Result;
use crate::parse::{collapse_whitespace, field, split_fields};
use crate::rules::league_for_team;
use crate::state::CleanState;

pub struct NewEraProcessor;

fn parse_new_era(name: Option<&str>) -> ParsedName {
    let Some(name) = name else {
        return ParsedName::default();
    };
    let raw = split_fields(name, '/');
    let collapsed = collapse_whitespace(name);
    let normalized = split_fields(&collapsed, '/');
    ParsedName {
        style: field(raw.as_deref(), 0),
        description: field(normalized.as_deref(), 1).map(|d| d.trim().to_string()),
        talla: field(raw.as_deref(), 2),
        ..ParsedName::default()
    }
}

impl BrandProcessor for NewEraProcessor {
    fn brand(&self) -> Brand {
        Brand::Ne
    }

    fn description(&self) -> &'static str {
        "Style/description/size split with league lookup by team"
    }

    fn parse(&self, df: &mut DataFrame, _state: &mut CleanState) -> Result<()> {
        let parsed: Vec<ParsedName> = string_column_or_null(df, ITEM_NAME)?
            .iter()
            .map(|name| parse_new_era(name.as_deref()))
            .collect();
        let (mut styles, mut descriptions, mut sizes) = (Vec::new(), Vec::new(), Vec::new());
        for p in parsed {
            styles.push(p.style);
            descriptions.push(p.description);
            sizes.push(p.talla);
        }
        set_string_column(df, U_ESTILO, styles)?;
        set_string_column(df, U_DESCRIPCION, descriptions)?;
        set_string_column(df, U_TALLA, sizes)?;
        Ok(())
    }

    /// Fills blank leagues from the licensed-team table.
    fn post_enrich(&self, df: &mut DataFrame, state: &mut CleanState) -> Result<()> {
        let teams = string_column_or_null(df, U_TEAM)?;
        let mut leagues = string_column_or_null(df, U_LIGA)?;
        let mut filled = 0;
        for (league, team) in leagues.iter_mut().zip(&teams) {
            if league.as_deref().is_some_and(|l| !l.is_empty()) {
                continue;
            }
            if let Some(found) = team.as_deref().and_then(league_for_team) {
                *league = Some(found.to_string());
                filled += 1;
            }
        }
        if filled > 0 {
            state.push(
                Diagnostic::info(
                    codes::LEAGUE_LOOKUP,
                    format!("assigned a league to {filled} rows from the team table"),
                )
                .with_rows(filled),
            );
        }
        set_string_column(df, U_LIGA, leagues)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::string_column;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn description_is_whitespace_normalized() {
        let parsed = parse_new_era(Some("X1 /  Gorra   9FORTY  / OS"));
        assert_eq!(parsed.style.as_deref(), Some("X1 "));
        assert_eq!(parsed.description.as_deref(), Some("Gorra 9FORTY"));
        assert_eq!(parsed.talla.as_deref(), Some(" OS"));
        assert_eq!(parse_new_era(Some("X1")), ParsedName::default());
    }

    #[test]
    fn blank_leagues_come_from_team_table() {
        let mut df = DataFrame::new(vec![
            Series::new(
                "U_Team".into(),
                vec![Some("DALLAS COWBOYS"), Some("ACME FC"), Some("NASCAR"), None],
            )
            .into_column(),
            Series::new("U_Liga".into(), vec![Some(""), None, Some("CUSTOM"), None]).into_column(),
        ])
        .unwrap();
        let mut state = CleanState::new();
        NewEraProcessor.post_enrich(&mut df, &mut state).unwrap();
        assert_eq!(
            string_column(&df, U_LIGA).unwrap(),
            vec![Some("NFL".to_string()), None, Some("CUSTOM".to_string()), None]
        );
        assert_eq!(state.diagnostics[0].affected_rows, Some(1));
    }
}
