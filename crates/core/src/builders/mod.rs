//! One builder per section type. Builders are pure: given a typed config
//! and the build context they emit content elements and nothing else.

mod cover;
mod custom_text;
mod details;
mod signature;
mod summary;
mod terms;
mod totals;

use quotepress_idf::{AccentLine, ContentElement, Paragraph};
use quotepress_style::{FontFamily, ParagraphStyle};

use crate::configs::{
    CoverConfig, CustomTextConfig, DetailsConfig, SignatureConfig, TermsConfig, TotalsConfig,
};
use crate::context::BuildContext;
use crate::error::PipelineError;
use crate::section::{SectionDescriptor, SectionType};

pub fn build_section(
    descriptor: &SectionDescriptor,
    ctx: &BuildContext,
) -> Result<Vec<ContentElement>, PipelineError> {
    let elements = match descriptor.kind {
        SectionType::Cover => cover::build(&CoverConfig::from_map(&descriptor.config)?, ctx),
        SectionType::Summary => summary::build(ctx),
        SectionType::Details => details::build(&DetailsConfig::from_map(&descriptor.config)?, ctx),
        SectionType::Totals => totals::build(&TotalsConfig::from_map(&descriptor.config)?, ctx),
        SectionType::Terms => terms::build(&TermsConfig::from_map(&descriptor.config)?, ctx),
        SectionType::Signature => {
            signature::build(&SignatureConfig::from_map(&descriptor.config)?, ctx)
        }
        SectionType::CustomText => {
            custom_text::build(&CustomTextConfig::from_map(&descriptor.config)?, ctx)
        }
        SectionType::Unknown => {
            log::warn!("skipping unknown section type (id: {:?})", descriptor.id);
            Vec::new()
        }
    };
    Ok(elements)
}

/// Section heading followed by its gradient accent line.
fn title_with_accent(text: &str, accent_width: f32, ctx: &BuildContext) -> Vec<ContentElement> {
    vec![
        ContentElement::Paragraph(Paragraph::new(text, ctx.styles.section_title.clone())),
        ContentElement::AccentLine(AccentLine {
            width: accent_width,
            height: 3.0,
            start: ctx.palette.primary,
            end: ctx.palette.secondary,
        }),
        ContentElement::Spacer(10.0),
    ]
}

fn bold(style: &ParagraphStyle) -> ParagraphStyle {
    let mut style = style.clone();
    style.font = FontFamily::HelveticaBold;
    style
}
