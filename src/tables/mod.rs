//! Property tables. The UCD tables are generated from Unicode 14.0.0; the
//! notation tables are hand-maintained selections. The UCD tables are sorted
//! by code point.

pub mod bidi;
pub mod block;
pub mod category;
pub mod combining_class;
pub mod latex_text;
pub mod name;
pub mod name_alias;
pub mod script;
pub mod texmath;
pub mod typst;
pub mod unimath;
