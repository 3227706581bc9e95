//! Everything a section builder may read while emitting content.

use quotepress_style::{Palette, TextStyles, Theme};
use quotepress_types::{Quote, Tenant};

use crate::logo::Logo;

/// Read-only build context shared by all section builders. Builders draw
/// from it but never write back, so sections cannot observe each other.
pub struct BuildContext<'a> {
    pub quote: &'a Quote,
    pub tenant: Option<&'a Tenant>,
    pub palette: &'a Palette,
    pub styles: &'a TextStyles,
    pub theme: Theme,
    pub logo: Option<&'a Logo>,
}

impl<'a> BuildContext<'a> {
    pub fn tenant_name(&self) -> &str {
        self.tenant.map(|t| t.name.as_str()).unwrap_or("")
    }
}
