//! 農家向けダッシュボードの表示文言（英語 / テルグ語）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Te,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Te => "te",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Language::En => Language::Te,
            Language::Te => Language::En,
        }
    }

    pub fn strings(&self) -> &'static Translations {
        match self {
            Language::En => &EN,
            Language::Te => &TE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "te" | "telugu" => Ok(Language::Te),
            _ => Err(Error::Config(format!("Unknown language: {}. Use en or te", s))),
        }
    }
}

/// 文言テーブル
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
    pub ethylene: &'static str,
    pub quantity: &'static str,
    pub switch_language: &'static str,
}

pub static EN: Translations = Translations {
    title: "Farmer Dashboard",
    subtitle: "Monitor your cold storage conditions",
    temperature: "Temperature",
    humidity: "Humidity",
    ethylene: "Ethylene",
    quantity: "Quantity",
    switch_language: "Switch to Telugu",
};

pub static TE: Translations = Translations {
    title: "రైతు డాష్‌బోర్డ్",
    subtitle: "మీ చల్లని నిల్వ పరిస్థితులను పర్యవేక్షించండి",
    temperature: "ఉష్ణోగ్రత",
    humidity: "తేమ",
    ethylene: "ఇథిలీన్",
    quantity: "పరిమాణం",
    switch_language: "ఇంగ్లీష్‌కు మారండి",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Language::En.toggle(), Language::Te);
        assert_eq!(Language::En.toggle().toggle(), Language::En);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::default().strings().title, "Farmer Dashboard");
    }

    #[test]
    fn test_telugu_table() {
        let t = Language::Te.strings();
        assert_eq!(t.humidity, "తేమ");
        assert_ne!(t.title, EN.title);
    }

    #[test]
    fn test_switch_label_names_other_language() {
        assert!(Language::En.strings().switch_language.contains("Telugu"));
        assert_eq!(Language::Te.strings().switch_language, "ఇంగ్లీష్‌కు మారండి");
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("te".parse::<Language>().unwrap(), Language::Te);
        assert_eq!("English".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::Te).unwrap(), "\"te\"");
    }
}
