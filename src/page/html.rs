use super::{
    document::{Container, Document},
    template::{handlebars, PAGE_TEMPLATE},
    Surface,
};
use crate::config::Config;
use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;
use std::{fs, path::PathBuf};

/// A [`Document`] painted as a static HTML file.
pub struct HtmlPage {
    document: Document,
    output: PathBuf,
    title: String,
    profile_url: String,
    hb: Handlebars<'static>,
}

#[derive(Serialize)]
struct PageView<'a> {
    title: &'a str,
    profile_url: &'a str,
    year: i32,
    containers: &'a [Container],
}

impl HtmlPage {
    pub fn new(config: &Config) -> Result<HtmlPage> {
        HtmlPage::with_document(config, Document::new([&config.page.container_id]))
    }

    pub fn with_document(config: &Config, document: Document) -> Result<HtmlPage> {
        Ok(HtmlPage {
            document,
            output: config.page.output.clone(),
            title: config.page.title.clone(),
            profile_url: config.profile_url(),
            hb: handlebars().context("Cannot register page templates")?,
        })
    }

    pub fn render(&self) -> Result<String> {
        let view = PageView {
            title: &self.title,
            profile_url: &self.profile_url,
            year: self.document.year(),
            containers: self.document.containers(),
        };

        let rendered = self.hb.render(PAGE_TEMPLATE, &view)?;
        Ok(rendered)
    }
}

impl Surface for HtmlPage {
    fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.document.container_mut(id)
    }

    fn present(&mut self) -> Result<()> {
        let data = self.render().context("Cannot render the page")?;

        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Cannot create directory {}", parent.display()))?;
        }

        fs::write(&self.output, data)
            .context(format!("Cannot write the page to {}", self.output.display()))?;
        log::debug!("Wrote {}", self.output.display());

        Ok(())
    }
}
