//! Anchor literals delimiting the three fragments in the source document.

pub const SECTION_OPEN: &str = "<section class=\"perfil \">";
pub const SECTION_CLOSE: &str = "</section>";

pub const STYLE_OPEN: &str = "<style media=\"screen\" type=\"text/css\">";
pub const STYLE_CLOSE: &str = "</style>";
pub const PERFIL_RULE: &str = ".perfil {";

pub const SCRIPT_OPEN: &str = "<script>";
pub const SCRIPT_CLOSE: &str = "</script>";
pub const IIFE_OPEN: &str = "(() => {";
pub const IIFE_CLOSE: &str = "})();";

/// The extracted section keeps a chart canvas whose id must be renamed so
/// the bundled chart script finds it. First occurrence only.
pub const CHART_ID_FROM: &str = "id=\"myChart0\"";
pub const CHART_ID_TO: &str = "id=\"myChart\"";
