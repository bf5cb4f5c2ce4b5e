//! Localized chrome strings.

use serde::{Deserialize, Serialize};

/// Language used for the controller's own strings (Done button, external
/// app prompt, built-in share action).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    SimplifiedChinese,
    TraditionalChinese,
}

/// Keys for the strings the controller displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKey {
    Done,
    Cancel,
    Open,
    OpenExternalAppTitle,
    OpenExternalAppMessage,
    OpenInBrowser,
}

/// Look up a localized string.
pub fn localized(language: Language, key: StringKey) -> &'static str {
    use StringKey::*;
    match language {
        Language::English => match key {
            Done => "Done",
            Cancel => "Cancel",
            Open => "Open",
            OpenExternalAppTitle => "Open External App",
            OpenExternalAppMessage => "Leave this app and open the link in another app?",
            OpenInBrowser => "Open in Browser",
        },
        Language::SimplifiedChinese => match key {
            Done => "完成",
            Cancel => "取消",
            Open => "打开",
            OpenExternalAppTitle => "打开外部应用",
            OpenExternalAppMessage => "即将离开当前应用，打开外部应用",
            OpenInBrowser => "在浏览器中打开",
        },
        Language::TraditionalChinese => match key {
            Done => "完成",
            Cancel => "取消",
            Open => "打開",
            OpenExternalAppTitle => "打開外部應用",
            OpenExternalAppMessage => "即將離開當前應用，打開外部應用",
            OpenInBrowser => "在瀏覽器中打開",
        },
    }
}

/// The strings for the open-in-external-app confirmation, resolved for one
/// language so shells need no localization of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalOpenPrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub cancel: &'static str,
    pub open: &'static str,
}

impl ExternalOpenPrompt {
    pub fn for_language(language: Language) -> Self {
        Self {
            title: localized(language, StringKey::OpenExternalAppTitle),
            message: localized(language, StringKey::OpenExternalAppMessage),
            cancel: localized(language, StringKey::Cancel),
            open: localized(language, StringKey::Open),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_default() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(localized(Language::default(), StringKey::Done), "Done");
    }

    #[test]
    fn simplified_and_traditional_differ_where_expected() {
        assert_eq!(localized(Language::SimplifiedChinese, StringKey::Open), "打开");
        assert_eq!(localized(Language::TraditionalChinese, StringKey::Open), "打開");
        assert_eq!(
            localized(Language::SimplifiedChinese, StringKey::Done),
            localized(Language::TraditionalChinese, StringKey::Done),
        );
    }

    #[test]
    fn prompt_resolves_all_strings() {
        let prompt = ExternalOpenPrompt::for_language(Language::English);
        assert_eq!(prompt.title, "Open External App");
        assert_eq!(prompt.cancel, "Cancel");
        assert_eq!(prompt.open, "Open");
        assert!(!prompt.message.is_empty());
    }

    #[test]
    fn language_serializes_as_name() {
        let json = serde_json::to_string(&Language::SimplifiedChinese).unwrap();
        assert_eq!(json, r#""SimplifiedChinese""#);
    }
}
