use anyhow::Result;
use handlebars::Handlebars;

pub const PAGE_TEMPLATE: &str = "page";

pub fn handlebars<'hb>() -> Result<Handlebars<'hb>> {
    let mut hb = Handlebars::new();

    hb.register_template_string(PAGE_TEMPLATE, include_str!("./page.hbs"))?;
    hb.register_partial("pr_card", include_str!("./pr_card.hbs"))?;
    hb.register_partial("placeholder", include_str!("./placeholder.hbs"))?;

    Ok(hb)
}
