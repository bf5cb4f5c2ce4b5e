use clap::{Parser, ValueEnum};

use webchrome::i18n::Language;

/// webchrome-demo — drive the browser-chrome controller through a
/// scripted page load and print the resulting chrome state.
#[derive(Parser, Debug)]
#[command(name = "webchrome-demo", version, about)]
pub struct Args {
    /// Index into the built-in site list.
    #[arg(short = 's', long, default_value_t = 0)]
    pub site: usize,

    /// Load this URL instead of a site from the list.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Language for the chrome strings.
    #[arg(short = 'l', long, value_enum, default_value_t = LanguageArg::English)]
    pub language: LanguageArg,

    /// Tint color as a hex string, e.g. "#03a9f4".
    #[arg(short = 't', long)]
    pub tint: Option<String>,

    /// Hide the toolbar while presented.
    #[arg(long)]
    pub toolbar_hidden: bool,

    /// List the built-in sites and exit.
    #[arg(long)]
    pub list: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LanguageArg {
    English,
    SimplifiedChinese,
    TraditionalChinese,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
            LanguageArg::SimplifiedChinese => Language::SimplifiedChinese,
            LanguageArg::TraditionalChinese => Language::TraditionalChinese,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
