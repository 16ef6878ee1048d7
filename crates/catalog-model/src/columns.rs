//! Column names shared by every brand.
//!
//! The catalog columns follow the ERP naming used by the upstream export
//! (`ItemName`, `ItemCode`, `Empresa`) and the `U_*` user-defined fields.
//! Columbia is the one brand that uses lowercase attribute names.

pub const ITEM_NAME: &str = "ItemName";
pub const ITEM_CODE: &str = "ItemCode";
pub const EMPRESA: &str = "Empresa";

/// Columns every input table must carry.
pub const MANDATORY_COLUMNS: [&str; 3] = [ITEM_NAME, ITEM_CODE, EMPRESA];

pub const U_ESTILO: &str = "U_Estilo";
pub const U_ESTILO_COLOR: &str = "U_Estilo_Color";
pub const U_DESCRIPCION: &str = "U_Descripcion";
pub const U_TALLA: &str = "U_Talla";
pub const U_GENERO: &str = "U_Genero";
pub const U_CATEGORIA: &str = "U_Categoria";
pub const U_SEGMENTO: &str = "U_Segmento";
pub const U_DESCRIP_COLOR: &str = "U_Descrip_Color";
pub const U_SEGMENTACION_SK: &str = "U_Segmentacion_SK";
pub const U_ZONE: &str = "U_Zone";
pub const U_DIVISION: &str = "U_Division";
pub const U_SUELA: &str = "U_Suela";
pub const U_TEMPORALIDAD: &str = "U_Temporalidad";
pub const U_SILUETA: &str = "U_Silueta";
pub const U_TEAM: &str = "U_Team";
pub const U_LIGA: &str = "U_Liga";
pub const U_COLECCION_NE: &str = "U_Coleccion_NE";
pub const U_PRENDA: &str = "U_Prenda";
pub const U_SUBPRENDA: &str = "U_Subprenda";

// Columbia
pub const CL_ESTILO: &str = "u_estilo";
pub const CL_DESCRIPCION: &str = "u_descripcion";
pub const CL_DESCRIP_COLOR: &str = "u_descrip_color";
pub const CL_COD_COLOR: &str = "u_cod_color";
pub const CL_GENERO: &str = "u_genero";

// Skechers passthrough columns
pub const CREATE_DATE: &str = "createdate";
pub const UPDATE_DATE: &str = "updatedate";
pub const BAR_CODE: &str = "BarCode";
