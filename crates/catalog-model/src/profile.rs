//! Static brand profiles.
//!
//! Each [`BrandProfile`] describes the data-driven half of a brand's rules:
//! the canonical output schema, which columns must exist before parsing,
//! and how reference data is merged. The parsing and derivation code that
//! cannot be expressed as data lives with the brand processors in
//! `catalog-core`.

use serde::Serialize;

use crate::brand::Brand;
use crate::columns::{
    BAR_CODE, CL_COD_COLOR, CL_DESCRIP_COLOR, CL_DESCRIPCION, CL_ESTILO, CL_GENERO, CREATE_DATE,
    EMPRESA, ITEM_CODE, ITEM_NAME, U_CATEGORIA, U_COLECCION_NE, U_DESCRIP_COLOR, U_DESCRIPCION,
    U_DIVISION, U_ESTILO, U_ESTILO_COLOR, U_GENERO, U_LIGA, U_PRENDA, U_SEGMENTACION_SK,
    U_SEGMENTO, U_SILUETA, U_SUBPRENDA, U_SUELA, U_TALLA, U_TEAM, U_TEMPORALIDAD, U_ZONE,
    UPDATE_DATE,
};

/// How the final table is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Keep only schema columns, in schema order, skipping absent ones.
    Restrict,
    /// Keep every column as it stands after enrichment.
    KeepAll,
}

/// What happens when no reference table matches the brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReference {
    /// Stop right after parsing: no derivation, merge or projection.
    ParseOnly,
    /// Run every stage except the merge.
    Continue,
}

/// Which reference columns a merge pass may copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichColumns {
    Listed(&'static [&'static str]),
    /// Every reference column except the listed ones (and the key).
    AllExcept(&'static [&'static str]),
}

/// Row grouping applied before a merge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePartition {
    #[default]
    Whole,
    /// Rows with a valid style key and rows without one are merged separately.
    ByStyleValidity,
}

/// One left join of the row table against the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentPass {
    /// Join column; must exist on both sides.
    pub key: &'static str,
    pub columns: EnrichColumns,
    /// Trim surrounding whitespace from keys on both sides.
    pub trim_keys: bool,
    pub partition: MergePartition,
}

impl EnrichmentPass {
    const fn listed(key: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            key,
            columns: EnrichColumns::Listed(columns),
            trim_keys: false,
            partition: MergePartition::Whole,
        }
    }
}

#[derive(Debug)]
pub struct BrandProfile {
    pub brand: Brand,
    pub display_name: &'static str,
    /// Column holding the style key after parsing.
    pub style_column: &'static str,
    /// Canonical output column order.
    pub output_columns: &'static [&'static str],
    pub projection: Projection,
    pub missing_reference: MissingReference,
    /// Columns created as all-null when the input lacks them.
    pub placeholder_columns: &'static [&'static str],
    pub enrichment: &'static [EnrichmentPass],
}

impl BrandProfile {
    pub fn has_enrichment(&self) -> bool {
        !self.enrichment.is_empty()
    }
}

static COLE_HAAN: BrandProfile = BrandProfile {
    brand: Brand::Ch,
    display_name: "Cole Haan",
    style_column: U_ESTILO,
    output_columns: &[
        ITEM_NAME,
        ITEM_CODE,
        EMPRESA,
        U_ESTILO,
        U_GENERO,
        U_CATEGORIA,
        U_SEGMENTO,
        U_DESCRIPCION,
        U_DESCRIP_COLOR,
        U_SEGMENTACION_SK,
        U_ZONE,
        U_TALLA,
    ],
    projection: Projection::Restrict,
    missing_reference: MissingReference::ParseOnly,
    placeholder_columns: &[],
    enrichment: &[EnrichmentPass::listed(
        U_ESTILO,
        &[U_SEGMENTACION_SK, U_ZONE, U_DESCRIP_COLOR],
    )],
};

static COLUMBIA: BrandProfile = BrandProfile {
    brand: Brand::Cl,
    display_name: "Columbia",
    style_column: CL_ESTILO,
    output_columns: &[
        ITEM_NAME,
        ITEM_CODE,
        EMPRESA,
        CL_ESTILO,
        CL_DESCRIPCION,
        CL_DESCRIP_COLOR,
        CL_COD_COLOR,
        CL_GENERO,
    ],
    projection: Projection::KeepAll,
    missing_reference: MissingReference::Continue,
    placeholder_columns: &[],
    enrichment: &[],
};

static SKECHERS: BrandProfile = BrandProfile {
    brand: Brand::Sk,
    display_name: "Skechers",
    style_column: U_ESTILO,
    output_columns: &[
        ITEM_NAME,
        ITEM_CODE,
        EMPRESA,
        CREATE_DATE,
        UPDATE_DATE,
        U_ESTILO,
        U_GENERO,
        U_DIVISION,
        U_SUELA,
        U_TEMPORALIDAD,
        U_SEGMENTACION_SK,
        U_DESCRIPCION,
        U_DESCRIP_COLOR,
        BAR_CODE,
    ],
    projection: Projection::KeepAll,
    missing_reference: MissingReference::ParseOnly,
    placeholder_columns: &[
        U_ESTILO,
        U_GENERO,
        U_SUELA,
        U_DESCRIP_COLOR,
        U_SEGMENTACION_SK,
        U_DIVISION,
        U_TEMPORALIDAD,
        U_DESCRIPCION,
        U_TALLA,
    ],
    enrichment: &[EnrichmentPass {
        key: U_ESTILO,
        columns: EnrichColumns::Listed(&[U_GENERO, U_SUELA, U_DIVISION, U_TEMPORALIDAD]),
        trim_keys: false,
        partition: MergePartition::ByStyleValidity,
    }],
};

const NEW_ERA_ENRICHED: &[&str] = &[
    U_SILUETA,
    U_TEAM,
    U_DESCRIP_COLOR,
    U_SEGMENTO,
    U_LIGA,
    U_COLECCION_NE,
    U_GENERO,
    U_DESCRIPCION,
    U_TEMPORALIDAD,
];

static NEW_ERA: BrandProfile = BrandProfile {
    brand: Brand::Ne,
    display_name: "New Era",
    style_column: U_ESTILO,
    output_columns: &[
        U_ESTILO,
        U_SILUETA,
        U_TEAM,
        U_DESCRIP_COLOR,
        U_SEGMENTO,
        U_LIGA,
        U_COLECCION_NE,
        U_GENERO,
        U_DESCRIPCION,
        U_TEMPORALIDAD,
        ITEM_CODE,
        EMPRESA,
        ITEM_NAME,
        U_TALLA,
    ],
    projection: Projection::Restrict,
    missing_reference: MissingReference::ParseOnly,
    placeholder_columns: &[
        U_ESTILO,
        U_SILUETA,
        U_TEAM,
        U_DESCRIP_COLOR,
        U_SEGMENTO,
        U_LIGA,
        U_COLECCION_NE,
        U_GENERO,
        U_DESCRIPCION,
        U_TEMPORALIDAD,
        U_TALLA,
    ],
    enrichment: &[EnrichmentPass::listed(U_ESTILO, NEW_ERA_ENRICHED)],
};

static FABLETICS: BrandProfile = BrandProfile {
    brand: Brand::Fb,
    display_name: "Fabletics",
    style_column: U_ESTILO,
    output_columns: &[
        ITEM_NAME,
        ITEM_CODE,
        EMPRESA,
        U_ESTILO,
        U_ESTILO_COLOR,
        U_DESCRIPCION,
        U_DESCRIP_COLOR,
        U_TALLA,
        U_GENERO,
        U_SEGMENTO,
        U_PRENDA,
        U_SUBPRENDA,
        U_CATEGORIA,
        U_DIVISION,
    ],
    projection: Projection::Restrict,
    missing_reference: MissingReference::Continue,
    placeholder_columns: &[],
    enrichment: &[
        EnrichmentPass {
            key: U_ESTILO,
            columns: EnrichColumns::AllExcept(&[U_ESTILO_COLOR, U_DIVISION]),
            trim_keys: false,
            partition: MergePartition::Whole,
        },
        EnrichmentPass::listed(U_ESTILO_COLOR, &[U_DIVISION]),
    ],
};

static PSYCHO_BUNNY: BrandProfile = BrandProfile {
    brand: Brand::Pb,
    display_name: "Psycho Bunny",
    style_column: U_ESTILO,
    output_columns: &[
        ITEM_NAME,
        ITEM_CODE,
        EMPRESA,
        U_ESTILO,
        U_PRENDA,
        U_SUBPRENDA,
        U_GENERO,
        U_DESCRIP_COLOR,
        U_TEMPORALIDAD,
        U_TALLA,
    ],
    projection: Projection::KeepAll,
    missing_reference: MissingReference::ParseOnly,
    placeholder_columns: &[],
    enrichment: &[EnrichmentPass {
        key: U_ESTILO,
        columns: EnrichColumns::Listed(&[U_GENERO, U_PRENDA, U_SUBPRENDA, U_TEMPORALIDAD]),
        trim_keys: true,
        partition: MergePartition::Whole,
    }],
};

const GENERIC_OUTPUT: &[&str] = &[ITEM_NAME, ITEM_CODE, EMPRESA, U_ESTILO, U_GENERO, U_CATEGORIA];
const GENERIC_ENRICHMENT: &[EnrichmentPass] =
    &[EnrichmentPass::listed(U_ESTILO, &[U_GENERO, U_CATEGORIA])];

static BIRKENSTOCK: BrandProfile = BrandProfile {
    brand: Brand::Bi,
    display_name: "Birkenstock",
    style_column: U_ESTILO,
    output_columns: GENERIC_OUTPUT,
    projection: Projection::KeepAll,
    missing_reference: MissingReference::Continue,
    placeholder_columns: &[],
    enrichment: GENERIC_ENRICHMENT,
};

static ADOLFO: BrandProfile = BrandProfile {
    brand: Brand::Ad,
    display_name: "Adolfo",
    style_column: U_ESTILO,
    output_columns: GENERIC_OUTPUT,
    projection: Projection::KeepAll,
    missing_reference: MissingReference::Continue,
    placeholder_columns: &[],
    enrichment: GENERIC_ENRICHMENT,
};

pub(crate) fn profile_for(brand: Brand) -> &'static BrandProfile {
    match brand {
        Brand::Ch => &COLE_HAAN,
        Brand::Cl => &COLUMBIA,
        Brand::Sk => &SKECHERS,
        Brand::Ne => &NEW_ERA,
        Brand::Fb => &FABLETICS,
        Brand::Pb => &PSYCHO_BUNNY,
        Brand::Bi => &BIRKENSTOCK,
        Brand::Ad => &ADOLFO,
    }
}
